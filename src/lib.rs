//! # Tether
//!
//! A minimal external state store for Rust UIs.
//!
//! Tether keeps shared application state outside the UI layer's component
//! tree and hands consumers exactly the slice of it they depend on:
//!
//! ## Store (state container)
//!
//! - `Store<T>` - owns one mutable state value and a listener registry
//! - Writes commit synchronously and notify every listener before returning
//! - `Update<T>` - a write is either `Replace(value)` or `Apply(T -> T)`
//!
//! ## Binding (selector-subscription bridge)
//!
//! - `Binding<T, U>` - projects the state through a selector and holds the
//!   consumer's locally observed value
//! - Invokes the host's re-render hook only when the projected value changes,
//!   so unrelated state changes never re-render the consumer

pub mod binding;
pub mod store;

// Re-export main types for convenience
pub use binding::{create_binding, Binding};
pub use store::{Store, Subscription, Update};
