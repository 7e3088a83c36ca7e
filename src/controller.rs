//! Todo Controller
//!
//! Binds UI events to store mutations and mirrors the results to the
//! view. The action methods are plain and headless; only `setup` knows
//! about the browser, so the rest is testable with a fake render target.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom::DomView;
use crate::store::TodoStore;
use crate::view::{parse_dom_id, RenderTarget, BUTTON_PREFIX, CHECKBOX_PREFIX};

/// Message shown when the user submits an empty task
const EMPTY_TASK_MESSAGE: &str = "Please enter a task.";

/// Wires events to the store and the render target
pub struct Controller<V: RenderTarget> {
    store: Rc<RefCell<TodoStore>>,
    view: Rc<V>,
}

impl<V: RenderTarget> Controller<V> {
    pub fn new(store: Rc<RefCell<TodoStore>>, view: Rc<V>) -> Self {
        Self { store, view }
    }

    /// Handle a form submission: validate, insert, render.
    /// Empty input surfaces one notification and changes nothing.
    pub fn submit_task(&self, task: &str) -> Option<u32> {
        if task.is_empty() {
            self.view.notify(EMPTY_TASK_MESSAGE);
            return None;
        }

        let id = self.store.borrow_mut().add_todo(task);
        let record = self.store.borrow().get_todo(id).cloned();
        if let Some(record) = record {
            self.view.add_todo(&record);
        }
        self.view.reset_input();
        Some(id)
    }

    /// Handle a checkbox change: store first, then mirror the stored
    /// state to the view. Unknown ids are ignored.
    pub fn toggle_todo(&self, id: u32, checked: bool) {
        let updated = self.store.borrow_mut().check_todo(id, checked).cloned();
        let Some(record) = updated else { return };

        if record.checked {
            self.view.check(id);
        } else {
            self.view.uncheck(id);
        }
    }

    /// Handle a delete click: remove from the store, then the view.
    /// Runs only inside the click callback, so records live until the
    /// user actually clicks delete.
    pub fn delete_todo(&self, id: u32) {
        self.store.borrow_mut().remove_todo(id);
        self.view.remove_todo(id);
    }
}

impl Controller<DomView> {
    /// Bind all UI listeners: one submit listener on the form and two
    /// delegated listeners on the container, dispatching on element-id
    /// prefixes instead of per-item handlers.
    pub fn setup(self: &Rc<Self>) {
        let ctrl = Rc::clone(self);
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            let task = ctrl.view.task_input().value();
            ctrl.submit_task(&task);
        });
        self.view
            .form()
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .expect("Failed to bind submit listener");
        on_submit.forget();

        let container = self.view.container();

        let ctrl = Rc::clone(self);
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(target) = ev.target() else { return };
            let Some(checkbox) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
            if let Some(id) = parse_dom_id(&checkbox.id(), CHECKBOX_PREFIX) {
                ctrl.toggle_todo(id, checkbox.checked());
            }
        });
        container
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .expect("Failed to bind change listener");
        on_change.forget();

        let ctrl = Rc::clone(self);
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(target) = ev.target() else { return };
            let Some(element) = target.dyn_ref::<web_sys::Element>() else { return };
            if let Some(id) = parse_dom_id(&element.id(), BUTTON_PREFIX) {
                ctrl.delete_todo(id);
            }
        });
        container
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .expect("Failed to bind click listener");
        on_click.forget();

        web_sys::console::log_1(&"[APP] Listeners bound".into());
    }
}
