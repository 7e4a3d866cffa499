//! 3D texts drawn with a vector font.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{SceneId, Text3dId, VectorFontId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A string laid out as glyph meshes.
///
/// Child of a scene and apprentice of a vector font. Each glyph is an
/// object owned by the text that also uses it as its mesh master.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Text3d {
    pub(crate) text: String,
    pub(crate) cartesian_coordinates: [f32; 3],
}

impl Text3d {
    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the position of the first glyph.
    #[must_use]
    pub fn cartesian_coordinates(&self) -> [f32; 3] {
        self.cartesian_coordinates
    }

    /// Moves `text` and its glyph objects under `scene`, releasing its font
    /// and the glyphs' brains if they lie in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the text has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        text: Text3dId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(text.id(), scene.id(), "Text3d::bind_to_new_scene_parent")
    }

    /// Makes `font` the master of `text`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the font lies in another scene.
    pub fn bind_to_new_vector_font_master(
        universe: &mut Universe,
        text: Text3dId,
        font: VectorFontId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            text.id(),
            MasterOf::Text3ds,
            font.id(),
            "Text3d::bind_to_new_vector_font_master",
        )
    }
}

/// Parameters for creating a [`Text3d`].
#[derive(Debug, Clone, Default)]
pub struct Text3dStruct {
    /// Scene to bind to.
    pub parent: Request<SceneId>,
    /// Font to draw with.
    pub vector_font: Request<VectorFontId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// The text.
    pub text: String,
    /// Position of the first glyph.
    pub cartesian_coordinates: [f32; 3],
}

impl Text3dStruct {
    /// Creates parameters for `text` under `parent` drawn with `vector_font`.
    #[must_use]
    pub fn new(
        parent: impl Into<Request<SceneId>>,
        vector_font: impl Into<Request<VectorFontId>>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            parent: parent.into(),
            vector_font: vector_font.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the position.
    #[must_use]
    pub fn at(mut self, cartesian_coordinates: [f32; 3]) -> Self {
        self.cartesian_coordinates = cartesian_coordinates;
        self
    }
}

crate::named_struct!(Text3dStruct);
