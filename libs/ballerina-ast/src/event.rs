//! # Change Events
//!
//! Typed notifications for subtree mutation. Mutating operations return a
//! [`TreeEvent`] value describing what changed; embedders forward those
//! values to whatever reacts to edits (undo/redo stack, re-render). There is
//! no ambient global channel: observers register explicitly on an
//! [`Observers`] registry owned by the embedding layer.
//!
//! ## Usage
//!
//! ```rust
//! use ballerina_ast::{FunctionInvocationExpression, Observers, SetOptions};
//!
//! let mut observers = Observers::new();
//! observers.subscribe(|event| println!("changed: {}", event.label));
//!
//! let mut node = FunctionInvocationExpression::new();
//! if let Some(event) = node.set_function_name("println", SetOptions::default()) {
//!     observers.emit(&event);
//! }
//! ```

use crate::ast::ExpressionKind;
use std::fmt;

/// What category of change an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEventKind {
    /// Children were added, removed, or reordered.
    Structural,
    /// A single named attribute changed.
    Attribute,
    /// A bulk replacement whose per-attribute notifications were suppressed;
    /// emitted exactly once for the whole re-initialization.
    Custom,
}

/// One subtree-modification notice.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEvent {
    /// Category of the change.
    pub kind: TreeEventKind,
    /// Kind of the node the change originated on.
    pub origin: ExpressionKind,
    /// Attribute name for [`TreeEventKind::Attribute`] events.
    pub attribute: Option<&'static str>,
    /// Human-readable description for diagnostics and undo labels.
    pub label: String,
}

impl TreeEvent {
    /// Event for a single attribute change.
    pub fn attribute(origin: ExpressionKind, attribute: &'static str) -> Self {
        Self {
            kind: TreeEventKind::Attribute,
            origin,
            attribute: Some(attribute),
            label: format!("{} {attribute} modified", origin.as_str()),
        }
    }

    /// Event for a child-list change.
    pub fn structural(origin: ExpressionKind, label: impl Into<String>) -> Self {
        Self {
            kind: TreeEventKind::Structural,
            origin,
            attribute: None,
            label: label.into(),
        }
    }

    /// Coarse-grained event for a bulk replacement.
    pub fn custom(origin: ExpressionKind, label: impl Into<String>) -> Self {
        Self {
            kind: TreeEventKind::Custom,
            origin,
            attribute: None,
            label: label.into(),
        }
    }
}

/// Options accepted by every attribute setter and child mutation.
///
/// `silent` suppresses the change event; used during bulk deserialization so
/// a single coarse-grained event can stand in for the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Suppress the change event for this mutation.
    pub silent: bool,
}

impl SetOptions {
    /// Options that suppress the change event.
    pub fn silently() -> Self {
        Self { silent: true }
    }
}

/// Explicit observer registry.
///
/// Owned by the embedding layer (editor, undo stack); mutation operations
/// never reach into it themselves.
#[derive(Default)]
pub struct Observers {
    subscribers: Vec<Box<dyn FnMut(&TreeEvent)>>,
}

impl Observers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked for every emitted event.
    pub fn subscribe(&mut self, callback: impl FnMut(&TreeEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Delivers one event to every registered callback, in registration
    /// order.
    pub fn emit(&mut self, event: &TreeEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// True when no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_subscriber() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();
        for _ in 0..2 {
            let seen = Rc::clone(&seen);
            observers.subscribe(move |event: &TreeEvent| {
                seen.borrow_mut().push(event.kind);
            });
        }

        observers.emit(&TreeEvent::structural(
            ExpressionKind::FunctionInvocation,
            "argument added",
        ));
        assert_eq!(
            *seen.borrow(),
            vec![TreeEventKind::Structural, TreeEventKind::Structural]
        );
    }

    #[test]
    fn test_attribute_event_carries_name() {
        let event = TreeEvent::attribute(ExpressionKind::FunctionInvocation, "function_name");
        assert_eq!(event.kind, TreeEventKind::Attribute);
        assert_eq!(event.attribute, Some("function_name"));
    }
}
