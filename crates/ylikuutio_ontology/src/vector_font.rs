//! Vector fonts.

use ylikuutio_foundation::{Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{MaterialId, VectorFontId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A font whose glyphs are meshes, drawn with its parent material.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorFont {
    pub(crate) font_filename: String,
    pub(crate) font_file_format: String,
}

impl VectorFont {
    /// Returns the font filename.
    #[must_use]
    pub fn font_filename(&self) -> &str {
        &self.font_filename
    }

    /// Returns the font file format.
    #[must_use]
    pub fn font_file_format(&self) -> &str {
        &self.font_file_format
    }

    /// Moves `font` under `material`, releasing 3D texts in other scenes.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision.
    pub fn bind_to_new_material_parent(
        universe: &mut Universe,
        font: VectorFontId,
        material: MaterialId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            font.id(),
            material.id(),
            "VectorFont::bind_to_new_material_parent",
        )
    }
}

/// Parameters for creating a [`VectorFont`].
#[derive(Debug, Clone, Default)]
pub struct VectorFontStruct {
    /// Material to bind to.
    pub parent: Request<MaterialId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Font filename.
    pub font_filename: String,
    /// Font file format.
    pub font_file_format: String,
}

impl VectorFontStruct {
    /// Creates parameters for a font under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<MaterialId>>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the font file.
    #[must_use]
    pub fn with_font(mut self, filename: impl Into<String>, format: impl Into<String>) -> Self {
        self.font_filename = filename.into();
        self.font_file_format = format.into();
        self
    }
}

crate::named_struct!(VectorFontStruct);
