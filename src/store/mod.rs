//! External state containers.
//!
//! A [`Store`] owns one piece of shared mutable state plus its listener
//! registry, and dispatches synchronous notifications on every committed
//! write.

mod store;

pub use store::{Store, Subscription, Update};
