//! Configuration for a universe.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Graphics API the universe renders through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphicsApiBackend {
    /// No window and no GPU. Render traversal still runs against the supplied render system.
    #[default]
    Headless,
    /// OpenGL.
    OpenGl,
}

/// Configuration for a [`Universe`](crate::Universe).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UniverseConfig {
    /// Graphics backend.
    pub backend: GraphicsApiBackend,

    /// Window title.
    pub window_title: String,

    /// Window width in pixels.
    pub window_width: u32,

    /// Window height in pixels.
    pub window_height: u32,

    /// Offscreen framebuffer width in pixels.
    pub framebuffer_width: u32,

    /// Offscreen framebuffer height in pixels.
    pub framebuffer_height: u32,

    /// Give every new scene a camera of its own.
    pub create_default_cameras: bool,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            backend: GraphicsApiBackend::Headless,
            window_title: String::from("Ylikuutio"),
            window_width: 1600,
            window_height: 900,
            framebuffer_width: 1600,
            framebuffer_height: 900,
            create_default_cameras: true,
        }
    }
}

impl UniverseConfig {
    /// Creates a headless configuration, used by tests and tools.
    #[must_use]
    pub fn headless() -> Self {
        Self::default()
    }

    /// Creates a configuration rendering through OpenGL.
    #[must_use]
    pub fn opengl() -> Self {
        Self {
            backend: GraphicsApiBackend::OpenGl,
            ..Self::default()
        }
    }

    /// Returns true if no window will be opened.
    #[must_use]
    pub fn is_headless(&self) -> bool {
        self.backend == GraphicsApiBackend::Headless
    }

    /// Builder method to set the backend.
    #[must_use]
    pub fn with_backend(mut self, backend: GraphicsApiBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Builder method to set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Builder method to set the window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builder method to set the framebuffer size.
    #[must_use]
    pub fn with_framebuffer_size(mut self, width: u32, height: u32) -> Self {
        self.framebuffer_width = width;
        self.framebuffer_height = height;
        self
    }

    /// Builder method to enable or disable default cameras.
    #[must_use]
    pub fn with_default_cameras(mut self, enabled: bool) -> Self {
        self.create_default_cameras = enabled;
        self
    }
}
