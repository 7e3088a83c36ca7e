//! DOM View
//!
//! `web-sys` implementation of [`RenderTarget`] against a pre-existing
//! host document. Lookups expect the host elements to be present; a
//! malformed document is a startup bug, not a runtime condition, so
//! missing elements panic with the element name.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::models::TodoRecord;
use crate::view::{
    button_dom_id, checkbox_dom_id, todo_dom_id, RenderTarget, CONTAINER_ID, FORM_ID, INPUT_ID,
};

const ITEM_CLASS: &str = "todo-item";
const ITEM_CHECKED_CLASS: &str = "todo-item checked";

/// Renders todos into the host document
pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Element {
        self.document
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("Missing element #{}", id))
    }

    /// The container element collecting rendered todos
    pub fn container(&self) -> Element {
        self.element(CONTAINER_ID)
    }

    /// The submit form element
    pub fn form(&self) -> Element {
        self.element(FORM_ID)
    }

    /// The task text input
    pub fn task_input(&self) -> HtmlInputElement {
        self.element(INPUT_ID)
            .dyn_into::<HtmlInputElement>()
            .expect("#input-form should be an <input>")
    }

    fn create(&self, tag: &str) -> Element {
        self.document
            .create_element(tag)
            .expect("Failed to create element")
    }
}

impl RenderTarget for DomView {
    fn add_todo(&self, record: &TodoRecord) {
        let wrapper = self.create("div");
        wrapper.set_id(&todo_dom_id(record.id));
        wrapper.set_class_name(if record.checked { ITEM_CHECKED_CLASS } else { ITEM_CLASS });

        let checkbox = self
            .create("input")
            .dyn_into::<HtmlInputElement>()
            .expect("<input> element");
        checkbox.set_type("checkbox");
        checkbox.set_id(&checkbox_dom_id(record.id));
        checkbox.set_checked(record.checked);

        let text = self.create("span");
        text.set_text_content(Some(&record.task));

        let label = self.create("label");
        label.append_child(&checkbox).expect("Failed to append checkbox");
        label.append_child(&text).expect("Failed to append text");

        let delete = self
            .create("button")
            .dyn_into::<HtmlButtonElement>()
            .expect("<button> element");
        // type=button so the delete control never submits the form
        delete.set_type("button");
        delete.set_id(&button_dom_id(record.id));
        delete.set_text_content(Some("×"));

        wrapper.append_child(&label).expect("Failed to append label");
        wrapper.append_child(&delete).expect("Failed to append delete button");

        self.container()
            .append_child(&wrapper)
            .expect("Failed to append todo");
    }

    fn check(&self, id: u32) {
        self.element(&todo_dom_id(id)).set_class_name(ITEM_CHECKED_CLASS);
    }

    fn uncheck(&self, id: u32) {
        self.element(&todo_dom_id(id)).set_class_name(ITEM_CLASS);
    }

    fn remove_todo(&self, id: u32) {
        self.element(&todo_dom_id(id)).remove();
    }

    fn reset_input(&self) {
        self.task_input().set_value("");
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
