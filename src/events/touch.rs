use super::InputWiring;
use crate::input;
use cards_core::PointerInput;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Phase {
    Start,
    Move,
    End,
    Cancel,
}

/// Touch listeners are non-passive so the page neither scrolls nor zooms
/// and no compatibility click follows a tap.
pub(super) fn wire_touch(w: &InputWiring) {
    for (name, phase) in [
        ("touchstart", Phase::Start),
        ("touchmove", Phase::Move),
        ("touchend", Phase::End),
        ("touchcancel", Phase::Cancel),
    ] {
        wire_phase(w, name, phase);
    }
}

fn wire_phase(w: &InputWiring, name: &str, phase: Phase) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let touches = input::touch_points(&ev.touches(), &w.canvas);
        let pointer_input = match phase {
            Phase::Start => PointerInput::TouchStart { touches },
            Phase::Move => PointerInput::TouchMove { touches },
            Phase::End => PointerInput::TouchEnd {
                touches,
                changed: input::touch_points(&ev.changed_touches(), &w.canvas),
            },
            Phase::Cancel => PointerInput::TouchCancel,
        };
        w.app
            .borrow_mut()
            .handle_pointer(&pointer_input, ev.time_stamp());
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
