//! Selector-subscription bindings.
//!
//! A [`Binding`] connects one UI consumer to a [`Store`](crate::Store) through
//! a selector, holding the consumer's locally observed value and re-rendering
//! it only when the projected value actually changes.

mod binding;

pub use binding::{create_binding, Binding};
