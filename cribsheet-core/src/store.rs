//! Sheet-definition YAML files.
//!
//! The CLI works against one YAML document holding `params` and `items`:
//!
//! ```text
//! params:
//!   columns: 3
//!   font_size: small
//!   title: My Cheat Sheet
//! items:
//!   - id: 1
//!     category: formula
//!     label: Pythagorean theorem
//!     content: a^2 + b^2 = c^2
//! ```
//!
//! Saves are atomic: serialize to a `.tmp` sibling, then rename over the
//! target (same directory, same filesystem).

use std::path::{Path, PathBuf};

use crate::error::SheetError;
use crate::sheet::Sheet;
use crate::types::Category;

/// Load a sheet from `path`.
///
/// Returns `SheetError::SheetNotFound` if absent,
/// `SheetError::Parse` (with path + line context) if malformed YAML.
pub fn load(path: &Path) -> Result<Sheet, SheetError> {
    if !path.exists() {
        return Err(SheetError::SheetNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| SheetError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Atomically save `sheet` to `path`.
pub fn save(path: &Path, sheet: &Sheet) -> Result<(), SheetError> {
    let yaml = serde_yaml::to_string(sheet)?;
    let tmp = tmp_path(path);
    std::fs::write(&tmp, yaml)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Write a starter sheet at `path`, refusing to clobber an existing file.
pub fn scaffold(path: &Path) -> Result<Sheet, SheetError> {
    if path.exists() {
        return Err(SheetError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    let mut sheet = Sheet::default();
    let _ = sheet.add_item(Category::Formula, "Pythagorean theorem", "a^2 + b^2 = c^2");
    save(path, &sheet)?;
    Ok(sheet)
}

fn tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet.yaml".to_string());
    path.with_file_name(format!("{file_name}.tmp"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
