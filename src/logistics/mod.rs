//! Base storage and the per-craft rearm pass

pub mod craft;
pub mod stores;

pub use craft::{Craft, RearmReport};
pub use stores::ItemStore;
