use cards_core::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod touch;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<AppState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_mousemove(&w);
    pointer::wire_click(&w);
    touch::wire_touch(&w);
}
