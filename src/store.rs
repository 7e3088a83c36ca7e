//! Todo Store (Model)
//!
//! Owns the in-memory todo collection and the id counter.
//! Never talks to the view; callers pass returned records on.

use crate::models::TodoRecord;

/// In-memory todo collection with a monotonic id counter
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<TodoRecord>,
    /// Last assigned id. Never decreases, so ids stay unique even after deletes.
    last_id: u32,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new unchecked todo and return its id.
    /// Task content is not validated here; that is the controller's job.
    pub fn add_todo(&mut self, task: &str) -> u32 {
        self.last_id += 1;
        self.todos.push(TodoRecord {
            id: self.last_id,
            task: task.to_string(),
            checked: false,
        });
        self.last_id
    }

    /// Look up a todo by id
    pub fn get_todo(&self, id: u32) -> Option<&TodoRecord> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Remove a todo by id; no-op when absent
    pub fn remove_todo(&mut self, id: u32) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Set the checked flag on a todo and return it; `None` when absent
    pub fn check_todo(&mut self, id: u32, checked: bool) -> Option<&TodoRecord> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.checked = checked;
        Some(&*todo)
    }

    /// Number of todos currently in the collection
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
