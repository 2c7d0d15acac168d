#![cfg(target_arch = "wasm32")]
use cards_core::{load_cards, AppState, Camera, CardConfig, Tuning, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

static CARDS_JSON: &str = include_str!("../assets/cards.json");

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cards-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let configs = CardConfig::parse_list(CARDS_JSON)?;
    let tuning = Tuning::default();
    let (css_w, css_h) = dom::canvas_css_size(&canvas);
    let app = Rc::new(RefCell::new(AppState::new(
        tuning.clone(),
        Camera::default(),
        Viewport::new(css_w, css_h),
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
    });

    // Cards stream in while the empty scene is already being drawn.
    let registry = assets::ImageRegistry::default();
    let images = registry.clone();
    let app_for_load = app.clone();
    spawn_local(async move {
        let loader = assets::WebAssetLoader::new(registry.clone());
        match load_cards(&configs, &tuning, &loader).await {
            Ok(cards) => {
                log::info!("[load] {} images decoded", registry.len());
                app_for_load.borrow_mut().install_cards(cards);
            }
            Err(e) => log::error!("[load] card loading failed: {}", e),
        }
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas: canvas.clone(),
        gpu: None,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx.clone());

    // The loop animates without a GPU until the adapter is ready.
    let gpu = frame::init_gpu(&canvas, images).await;
    frame_ctx.borrow_mut().gpu = gpu;

    Ok(())
}
