use super::InputWiring;
use crate::input;
use cards_core::PointerInput;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        w.app.borrow_mut().handle_pointer(
            &PointerInput::MouseMove { x: pos.x, y: pos.y },
            ev.time_stamp(),
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

pub(super) fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        log::debug!("[mouse] click at ({:.0},{:.0})", pos.x, pos.y);
        w.app.borrow_mut().handle_pointer(
            &PointerInput::MouseClick { x: pos.x, y: pos.y },
            ev.time_stamp(),
        );
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
