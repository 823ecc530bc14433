//! Domain types with validation

pub mod item;
pub mod validation;

pub use item::{ItemId, ItemName, NewItem, MAX_ITEM_NAME_LEN};
pub use validation::ValidationError;
