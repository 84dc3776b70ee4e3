//! Rusty-Forms-Validation
//!
//! Pure predicates over submitted text. These functions know nothing about form
//! controls; the validators in `rusty-forms-controls` call them and turn a
//! failure into an error message on the control.

pub mod date;
pub mod email;
pub mod numeric;
pub mod string;

pub use date::*;
pub use email::*;
pub use numeric::*;
pub use string::*;
