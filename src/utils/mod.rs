//! Utility modules shared by the generator.

pub mod date;
pub mod html;
pub mod plural;
pub mod slug;

pub use plural::plural_count;
