//! Registry of column type handlers keyed by CSS class

use crate::handler::{ColumnTypeHandler, ControlColumn, TextColumn};
use std::collections::HashMap;
use std::sync::Arc;

/// Column type handlers keyed by the CSS class of a column.
#[derive(Debug, Default, Clone)]
pub struct ColumnTypeRegistry {
    handlers: HashMap<String, Arc<dyn ColumnTypeHandler>>,
}

impl ColumnTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for columns with CSS class `class`, replacing any
    /// handler registered before.
    pub fn register(&mut self, class: &str, handler: Arc<dyn ColumnTypeHandler>) -> &mut Self {
        if self.handlers.insert(class.to_string(), handler).is_some() {
            tracing::debug!(class, "replaced column type handler");
        }
        self
    }

    pub fn get(&self, class: &str) -> Option<&dyn ColumnTypeHandler> {
        self.handlers.get(class).map(|handler| handler.as_ref())
    }

    /// The handler of the first class in a space separated class list that has
    /// a registered handler.
    pub fn handler_for_classes(&self, classes: &str) -> Option<&dyn ColumnTypeHandler> {
        classes.split_whitespace().find_map(|class| self.get(class))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Registers the handler for columns of div, span and link controls and the
/// plain `text` handler.
pub fn register_control_handlers(registry: &mut ColumnTypeRegistry) {
    let control: Arc<dyn ColumnTypeHandler> = Arc::new(ControlColumn);

    registry
        .register("text", Arc::new(TextColumn))
        .register("control-div", control.clone())
        .register("control-span", control.clone())
        .register("control-link", control);
}
