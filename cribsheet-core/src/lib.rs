//! Cribsheet core library — domain types, sheet state, sheet-file store, errors.
//!
//! Public API surface:
//! - [`types`] — layout enumerations, newtypes and domain structs
//! - [`sheet`] — [`Sheet`], the item list + layout params with the add/remove lifecycle
//! - [`store`] — sheet-definition YAML load / save / scaffold
//! - [`error`] — [`SheetError`]

pub mod error;
pub mod sheet;
pub mod store;
pub mod types;

pub use error::SheetError;
pub use sheet::Sheet;
pub use types::{
    Category, ColumnCount, FontSize, ItemId, LayoutParams, MarginPreset, PaperSize, SheetItem,
};
