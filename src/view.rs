//! Render Target
//!
//! Output surface the controller draws on, plus the DOM-id scheme
//! shared by rendering and delegated event dispatch. Keeping this a
//! trait lets tests run against a recording fake instead of a browser.

use crate::models::TodoRecord;

/// Element id of the container collecting rendered todos
pub const CONTAINER_ID: &str = "todos";
/// Element id of the task text input
pub const INPUT_ID: &str = "input-form";
/// Element id of the submit form
pub const FORM_ID: &str = "register";

/// Id prefix for a rendered todo's wrapper element
pub const TODO_PREFIX: &str = "todo-";
/// Id prefix for a rendered todo's checkbox
pub const CHECKBOX_PREFIX: &str = "checkbox-";
/// Id prefix for a rendered todo's delete button
pub const BUTTON_PREFIX: &str = "button-";

/// Where todo output is written
///
/// Holds no record data of its own; every call carries the state it needs.
pub trait RenderTarget {
    /// Render a new todo item into the container
    fn add_todo(&self, record: &TodoRecord);
    /// Mark the rendered item as checked
    fn check(&self, id: u32);
    /// Mark the rendered item as unchecked
    fn uncheck(&self, id: u32);
    /// Remove the rendered item
    fn remove_todo(&self, id: u32);
    /// Clear the task input field
    fn reset_input(&self);
    /// Surface a blocking message to the user
    fn notify(&self, message: &str);
}

/// Wrapper element id for a record, e.g. `todo-3`
pub fn todo_dom_id(id: u32) -> String {
    format!("{}{}", TODO_PREFIX, id)
}

/// Checkbox element id for a record, e.g. `checkbox-3`
pub fn checkbox_dom_id(id: u32) -> String {
    format!("{}{}", CHECKBOX_PREFIX, id)
}

/// Delete button element id for a record, e.g. `button-3`
pub fn button_dom_id(id: u32) -> String {
    format!("{}{}", BUTTON_PREFIX, id)
}

/// Recover a record id from a prefixed element id.
/// Returns `None` for foreign elements, so delegated handlers can
/// ignore events that did not originate from a todo item.
pub fn parse_dom_id(dom_id: &str, prefix: &str) -> Option<u32> {
    dom_id.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_id_format() {
        assert_eq!(todo_dom_id(1), "todo-1");
        assert_eq!(checkbox_dom_id(12), "checkbox-12");
        assert_eq!(button_dom_id(7), "button-7");
    }

    #[test]
    fn test_parse_dom_id_roundtrip() {
        assert_eq!(parse_dom_id(&todo_dom_id(3), TODO_PREFIX), Some(3));
        assert_eq!(parse_dom_id(&checkbox_dom_id(42), CHECKBOX_PREFIX), Some(42));
        assert_eq!(parse_dom_id(&button_dom_id(9), BUTTON_PREFIX), Some(9));
    }

    #[test]
    fn test_parse_dom_id_rejects_wrong_prefix() {
        assert_eq!(parse_dom_id("checkbox-3", BUTTON_PREFIX), None);
        assert_eq!(parse_dom_id("todos", TODO_PREFIX), None);
        assert_eq!(parse_dom_id("", CHECKBOX_PREFIX), None);
    }

    #[test]
    fn test_parse_dom_id_rejects_non_numeric() {
        assert_eq!(parse_dom_id("checkbox-abc", CHECKBOX_PREFIX), None);
        assert_eq!(parse_dom_id("button-", BUTTON_PREFIX), None);
    }
}
