//! Todo MVC Frontend Entry Point
//!
//! Composition root: builds the store, view and controller explicitly
//! and hands ownership to the event listeners. No global state.

mod controller;
mod dom;
mod models;
mod store;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use controller::Controller;
use dom::DomView;
use store::TodoStore;

fn main() {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");

    let store = Rc::new(RefCell::new(TodoStore::new()));
    let view = Rc::new(DomView::new(document));
    let controller = Rc::new(Controller::new(store, view));
    controller.setup();

    web_sys::console::log_1(&"[APP] Todo list ready".into());
}
