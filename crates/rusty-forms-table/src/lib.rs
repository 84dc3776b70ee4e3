//! Rusty-Forms-Table
//!
//! Column type handlers for overview tables. A handler turns the HTML of a table
//! cell into the text used for filtering and sorting; handlers are looked up by
//! the CSS class of the column.

pub mod handler;
pub mod registry;
pub mod text;

pub use handler::{ColumnTypeHandler, ControlColumn, TextColumn};
pub use registry::{register_control_handlers, ColumnTypeRegistry};
pub use text::{child_element_text, decode_entities, text_content, to_lower_case_no_diacritics};
