//! Todo Models
//!
//! Data structures shared between store, view and controller.

/// A single todo item
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRecord {
    pub id: u32,
    pub task: String,
    pub checked: bool,
}
