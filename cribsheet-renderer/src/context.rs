//! Rendering context: the escaped, grouped, table-mapped payload handed to
//! the document template.
//!
//! # Layout lookup tables
//!
//! | `font_size` | content size    | class base size |
//! |-------------|-----------------|-----------------|
//! | tiny        | `\tiny`         | `8pt`           |
//! | small       | `\scriptsize`   | `9pt`           |
//! | normal      | `\footnotesize` | `9pt`           |
//! | large       | `\small`        | `9pt`           |
//!
//! | `margins` | value    |
//! |-----------|----------|
//! | narrow    | `0.5in`  |
//! | normal    | `0.75in` |
//! | wide      | `1in`    |

use serde::Serialize;

use cribsheet_core::types::{Category, FontSize, LayoutParams, MarginPreset, PaperSize, SheetItem};

use crate::escape::escape;

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Content size command, emitted at the top of the document body.
fn text_size_command(size: FontSize) -> &'static str {
    match size {
        FontSize::Tiny => "\\tiny",
        FontSize::Small => "\\scriptsize",
        FontSize::Normal => "\\footnotesize",
        FontSize::Large => "\\small",
    }
}

/// Document class base size. A separate concern from the content size: only
/// `tiny` drops the class below the default.
fn base_point_size(size: FontSize) -> &'static str {
    match size {
        FontSize::Tiny => "8pt",
        FontSize::Small | FontSize::Normal | FontSize::Large => "9pt",
    }
}

fn margin_value(margins: MarginPreset) -> &'static str {
    match margins {
        MarginPreset::Narrow => "0.5in",
        MarginPreset::Normal => "0.75in",
        MarginPreset::Wide => "1in",
    }
}

fn paper_option(paper: PaperSize) -> &'static str {
    match paper {
        PaperSize::Letter => "letter",
        PaperSize::A4 => "a4",
    }
}

const COLUMN_RULE: &str = "\\setlength{\\columnseprule}{0.4pt}";

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group items by category, in canonical category order.
///
/// Categories with no items are omitted entirely; within a category, items
/// keep their insertion order.
pub fn group_by_category(items: &[SheetItem]) -> Vec<(Category, Vec<&SheetItem>)> {
    Category::all()
        .iter()
        .filter_map(|&category| {
            let grouped: Vec<&SheetItem> = items
                .iter()
                .filter(|item| item.category == category)
                .collect();
            if grouped.is_empty() {
                None
            } else {
                Some((category, grouped))
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Serializable rendering payload built from items and [`LayoutParams`].
///
/// All user text is escaped and all layout lookups resolved before this
/// struct exists, so the template itself is pure substitution.
#[derive(Debug, Clone, Serialize)]
pub struct SheetContext {
    pub base_size: &'static str,
    pub paper_size: &'static str,
    pub margin: &'static str,
    pub column_rule: &'static str,
    pub text_size: &'static str,
    pub title: String,
    pub columns: u8,
    pub body: String,
}

impl SheetContext {
    /// Build the rendering payload from items and layout parameters.
    pub fn new(items: &[SheetItem], params: &LayoutParams) -> Self {
        SheetContext {
            base_size: base_point_size(params.font_size),
            paper_size: paper_option(params.paper_size),
            margin: margin_value(params.margins),
            column_rule: if params.show_borders { COLUMN_RULE } else { "" },
            text_size: text_size_command(params.font_size),
            title: escape(&params.title),
            columns: params.columns.get(),
            body: body(items),
        }
    }
}

/// One row per item: bold escaped label, colon, escaped content; or the
/// escaped content alone when the label is empty.
fn row(item: &SheetItem) -> String {
    if item.label.is_empty() {
        escape(&item.content)
    } else {
        format!("\\textbf{{{}}}: {}", escape(&item.label), escape(&item.content))
    }
}

/// One `\subsection*` block per non-empty category. Rows are joined with a
/// LaTeX line break, sections with a blank line.
fn body(items: &[SheetItem]) -> String {
    group_by_category(items)
        .iter()
        .map(|(category, grouped)| {
            let rows: Vec<String> = grouped.iter().map(|item| row(item)).collect();
            format!("\\subsection*{{{}}}\n{}", category.heading(), rows.join("\\\\\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use cribsheet_core::types::{ColumnCount, ItemId};

    use super::*;

    fn item(id: u64, category: Category, label: &str, content: &str) -> SheetItem {
        SheetItem {
            id: ItemId(id),
            category,
            label: label.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn grouping_follows_category_order_not_insertion_order() {
        let items = vec![
            item(1, Category::Note, "", "remember units"),
            item(2, Category::Formula, "", "a^2 + b^2 = c^2"),
            item(3, Category::Example, "", "3-4-5 triangle"),
        ];
        let groups = group_by_category(&items);
        let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, [Category::Formula, Category::Example, Category::Note]);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let items = vec![item(1, Category::Formula, "", "E = mc^2")];
        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Category::Formula);
    }

    #[test]
    fn insertion_order_is_kept_within_a_category() {
        let items = vec![
            item(1, Category::Formula, "", "first"),
            item(2, Category::Note, "", "interleaved"),
            item(3, Category::Formula, "", "second"),
        ];
        let groups = group_by_category(&items);
        let contents: Vec<&str> = groups[0].1.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[test]
    fn labeled_row_is_bold_label_colon_content() {
        let labeled = item(1, Category::Formula, "Slope", "m = dy/dx");
        assert_eq!(row(&labeled), "\\textbf{Slope}: m = dy/dx");
    }

    #[test]
    fn unlabeled_row_is_content_alone() {
        let unlabeled = item(1, Category::Formula, "", "m = dy/dx");
        assert_eq!(row(&unlabeled), "m = dy/dx");
    }

    #[test]
    fn row_escapes_label_and_content() {
        let hostile = item(1, Category::Note, "100% sure", "costs $5 & up");
        assert_eq!(row(&hostile), "\\textbf{100\\% sure}: costs \\$5 \\& up");
    }

    #[test]
    fn body_joins_rows_and_sections() {
        let items = vec![
            item(1, Category::Formula, "", "one"),
            item(2, Category::Formula, "", "two"),
            item(3, Category::Note, "", "three"),
        ];
        assert_eq!(
            body(&items),
            "\\subsection*{Formulas}\none\\\\\ntwo\n\n\\subsection*{Notes}\nthree"
        );
    }

    #[test]
    fn empty_item_list_gives_empty_body() {
        assert_eq!(body(&[]), "");
    }

    #[test]
    fn tiny_maps_to_both_size_concerns() {
        let mut params = LayoutParams::default();
        params.font_size = FontSize::Tiny;
        let ctx = SheetContext::new(&[], &params);
        assert_eq!(ctx.text_size, "\\tiny");
        assert_eq!(ctx.base_size, "8pt");
    }

    #[test]
    fn small_keeps_the_default_base_size() {
        let mut params = LayoutParams::default();
        params.font_size = FontSize::Small;
        let ctx = SheetContext::new(&[], &params);
        assert_eq!(ctx.text_size, "\\scriptsize");
        assert_eq!(ctx.base_size, "9pt");
    }

    #[test]
    fn margins_and_paper_map_through_their_tables() {
        let mut params = LayoutParams::default();
        params.margins = MarginPreset::Wide;
        params.paper_size = PaperSize::A4;
        let ctx = SheetContext::new(&[], &params);
        assert_eq!(ctx.margin, "1in");
        assert_eq!(ctx.paper_size, "a4");
    }

    #[test]
    fn border_toggle_controls_the_column_rule() {
        let mut params = LayoutParams::default();
        params.show_borders = true;
        assert_eq!(
            SheetContext::new(&[], &params).column_rule,
            "\\setlength{\\columnseprule}{0.4pt}"
        );
        params.show_borders = false;
        assert_eq!(SheetContext::new(&[], &params).column_rule, "");
    }

    #[test]
    fn title_is_escaped() {
        let mut params = LayoutParams::default();
        params.title = "Algebra & Trig #1".to_string();
        let ctx = SheetContext::new(&[], &params);
        assert_eq!(ctx.title, "Algebra \\& Trig \\#1");
    }

    #[test]
    fn columns_carry_through() {
        let mut params = LayoutParams::default();
        params.columns = ColumnCount::try_from(5).unwrap();
        assert_eq!(SheetContext::new(&[], &params).columns, 5);
    }
}
