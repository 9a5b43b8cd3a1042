//! Tera rendering engine — the embedded document template and [`Renderer`].

use tera::Tera;

use cribsheet_core::types::{LayoutParams, SheetItem};

use crate::context::SheetContext;
use crate::error::RenderError;

// Embedded template, baked into the binary at compile time via include_str!
const SHEET_TEMPLATE: &str = include_str!("templates/sheet.tex.tera");

const TEMPLATE_NAME: &str = "sheet.tex.tera";

/// Tera-based document renderer.
///
/// Holds the parsed template; create once with [`Renderer::new`] and reuse.
/// Rendering the same items and params twice yields byte-identical output.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, SHEET_TEMPLATE)?;
        Ok(Renderer { tera })
    }

    /// Render a complete LaTeX document from `items` and `params`.
    ///
    /// Total over valid inputs: an empty item list renders a valid document
    /// with an empty multi-column environment.
    pub fn render(
        &self,
        items: &[SheetItem],
        params: &LayoutParams,
    ) -> Result<String, RenderError> {
        let ctx = SheetContext::new(items, params);
        let tera_ctx = tera::Context::from_serialize(&ctx)?;
        Ok(self.tera.render(TEMPLATE_NAME, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
