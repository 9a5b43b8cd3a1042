//! Domain types for a cribsheet document.
//!
//! Every layout option is a closed enum so the renderer's lookup tables are
//! total: an unmapped font size, margin, or paper value is unrepresentable.
//! All types are serializable/deserializable via serde + serde_yaml.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a sheet item, assigned at creation.
///
/// Ids key removal and listing only; rendering never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Number of text columns on the sheet, kept inside 1..=5 by construction.
///
/// The only ways in are [`TryFrom<u8>`] (fails closed out of range) and
/// [`Default`], so the renderer never has to validate at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColumnCount(u8);

impl ColumnCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        ColumnCount(3)
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = SheetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(ColumnCount(value))
        } else {
            Err(SheetError::ColumnsOutOfRange { value })
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(columns: ColumnCount) -> Self {
        columns.0
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The kind of note an item holds.
///
/// Declaration order is section order in the rendered document, regardless of
/// the order items were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Formula,
    Definition,
    Example,
    Note,
}

impl Category {
    /// All category variants in section order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Formula,
            Category::Definition,
            Category::Example,
            Category::Note,
        ]
    }

    /// Pluralized section heading, as printed above a group of items.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Formula => "Formulas",
            Category::Definition => "Definitions",
            Category::Example => "Examples",
            Category::Note => "Notes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Formula => write!(f, "formula"),
            Category::Definition => write!(f, "definition"),
            Category::Example => write!(f, "example"),
            Category::Note => write!(f, "note"),
        }
    }
}

/// Content font size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Tiny,
    #[default]
    Small,
    Normal,
    Large,
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Tiny => write!(f, "tiny"),
            FontSize::Small => write!(f, "small"),
            FontSize::Normal => write!(f, "normal"),
            FontSize::Large => write!(f, "large"),
        }
    }
}

/// Physical paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::Letter => write!(f, "letter"),
            PaperSize::A4 => write!(f, "a4"),
        }
    }
}

/// Page margin preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarginPreset {
    #[default]
    Narrow,
    Normal,
    Wide,
}

impl fmt::Display for MarginPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginPreset::Narrow => write!(f, "narrow"),
            MarginPreset::Normal => write!(f, "normal"),
            MarginPreset::Wide => write!(f, "wide"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One user-entered note on the sheet.
///
/// `label` and `content` are raw user text; escaping happens in the renderer,
/// never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetItem {
    pub id: ItemId,
    pub category: Category,
    /// Optional short label, shown bold before the content when non-empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    pub content: String,
}

/// Rendering configuration for a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    #[serde(default)]
    pub columns: ColumnCount,
    #[serde(default)]
    pub font_size: FontSize,
    #[serde(default)]
    pub paper_size: PaperSize,
    #[serde(default)]
    pub margins: MarginPreset,
    /// Sheet title, escaped by the renderer before embedding.
    #[serde(default = "default_title")]
    pub title: String,
    /// Toggles the column separator rule.
    #[serde(default = "default_show_borders")]
    pub show_borders: bool,
}

fn default_title() -> String {
    "My Cheat Sheet".to_string()
}

fn default_show_borders() -> bool {
    true
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            columns: ColumnCount::default(),
            font_size: FontSize::default(),
            paper_size: PaperSize::default(),
            margins: MarginPreset::default(),
            title: default_title(),
            show_borders: default_show_borders(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn category_order_is_fixed() {
        assert_eq!(
            Category::all(),
            &[
                Category::Formula,
                Category::Definition,
                Category::Example,
                Category::Note,
            ]
        );
    }

    #[test]
    fn category_headings_are_pluralized() {
        assert_eq!(Category::Formula.heading(), "Formulas");
        assert_eq!(Category::Note.heading(), "Notes");
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(255)]
    fn column_count_rejects_out_of_range(#[case] value: u8) {
        let err = ColumnCount::try_from(value).unwrap_err();
        assert!(matches!(err, SheetError::ColumnsOutOfRange { value: v } if v == value));
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn column_count_accepts_in_range(#[case] value: u8) {
        assert_eq!(ColumnCount::try_from(value).unwrap().get(), value);
    }

    #[test]
    fn layout_defaults_match_the_editor() {
        let params = LayoutParams::default();
        assert_eq!(params.columns.get(), 3);
        assert_eq!(params.font_size, FontSize::Small);
        assert_eq!(params.paper_size, PaperSize::Letter);
        assert_eq!(params.margins, MarginPreset::Narrow);
        assert_eq!(params.title, "My Cheat Sheet");
        assert!(params.show_borders);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_yaml::to_string(&Category::Definition).unwrap().trim(), "definition");
        assert_eq!(serde_yaml::to_string(&FontSize::Tiny).unwrap().trim(), "tiny");
        assert_eq!(serde_yaml::to_string(&PaperSize::A4).unwrap().trim(), "a4");
        assert_eq!(serde_yaml::to_string(&MarginPreset::Wide).unwrap().trim(), "wide");
    }

    #[test]
    fn unknown_enum_value_fails_parsing() {
        assert!(serde_yaml::from_str::<FontSize>("huge").is_err());
        assert!(serde_yaml::from_str::<PaperSize>("a5").is_err());
    }

    #[test]
    fn column_count_deserialization_fails_closed() {
        assert!(serde_yaml::from_str::<ColumnCount>("7").is_err());
        assert_eq!(serde_yaml::from_str::<ColumnCount>("5").unwrap().get(), 5);
    }

    #[test]
    fn item_serde_roundtrip_skips_empty_label() {
        let item = SheetItem {
            id: ItemId(4),
            category: Category::Example,
            label: String::new(),
            content: "f(2) = 4".to_string(),
        };
        let yaml = serde_yaml::to_string(&item).expect("serialize");
        assert!(!yaml.contains("label"));
        let parsed: SheetItem = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(parsed, item);
    }
}
