//! Column type handlers

use crate::text::{child_element_text, text_content, to_lower_case_no_diacritics};
use std::fmt;

/// Computes the filter text and the sort key of table cells of one column type.
pub trait ColumnTypeHandler: Send + Sync + fmt::Debug {
    /// The text matched against a filter, given the inner HTML of a cell.
    fn extract_for_filter(&self, cell_html: &str) -> String;

    /// The key cells are ordered by, given the inner HTML of a cell.
    fn sort_key(&self, cell_html: &str) -> String;
}

/// Columns with plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextColumn;

impl ColumnTypeHandler for TextColumn {
    fn extract_for_filter(&self, cell_html: &str) -> String {
        to_lower_case_no_diacritics(&text_content(cell_html))
    }

    fn sort_key(&self, cell_html: &str) -> String {
        to_lower_case_no_diacritics(&text_content(cell_html))
    }
}

/// Columns holding a div, span or link control. Only the text of the cell's
/// elements counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlColumn;

impl ColumnTypeHandler for ControlColumn {
    fn extract_for_filter(&self, cell_html: &str) -> String {
        to_lower_case_no_diacritics(&child_element_text(cell_html))
    }

    fn sort_key(&self, cell_html: &str) -> String {
        to_lower_case_no_diacritics(&child_element_text(cell_html))
    }
}
