//! Helper functions shared by the migration pipeline

mod date;
mod slug;

pub use date::*;
pub use slug::*;
