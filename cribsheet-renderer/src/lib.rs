//! # cribsheet-renderer
//!
//! Tera-based engine that renders a sheet's items and layout parameters into
//! a complete LaTeX document string. Rendering is pure: the same inputs
//! always produce a byte-identical document.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cribsheet_core::Sheet;
//! use cribsheet_renderer::Renderer;
//!
//! fn show(sheet: &Sheet) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(document) = renderer.render(&sheet.items, &sheet.params) {
//!             println!("{document}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod escape;

pub use context::{group_by_category, SheetContext};
pub use engine::Renderer;
pub use error::RenderError;
pub use escape::escape;
