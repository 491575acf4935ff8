#![cfg(target_arch = "wasm32")]
mod camera;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod page;
mod render;
mod reveal;

use constants::{CANVAS_ID, LABEL_LAYER_ID};
use portfolio_core::content::REVEAL_SECTIONS;
use portfolio_core::{Clock, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page shell first so it works even without WebGPU
    page::wire_navigation(&document);
    page::render_work_history(&document)?;
    page::set_footer_year(&document);
    contact::wire_form(&document);
    reveal::wire_sections(&document, &REVEAL_SECTIONS)?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let label_layer: web::HtmlElement = document
        .get_element_by_id(LABEL_LAYER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", LABEL_LAYER_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let scene = Rc::new(RefCell::new(Scene::new(seed)));
    let gpu = frame::init_gpu(&canvas, &scene.borrow()).await;
    if gpu.is_none() {
        log::warn!("[gpu] unavailable; page continues without the scene");
    }

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        labels: labels::LabelLayer::new(&document, label_layer),
        clock: Clock::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
