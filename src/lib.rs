#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use flipbook_core::{BookController, Flipbook, PageError, ParticleTrail};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod leaves;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_trail(document: &web::Document) -> Result<(), PageError> {
    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(document, TRAIL_CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(PageError::WrongElementType(TRAIL_CANVAS_ID))?;

    // Particles keep their old coordinates across resizes
    wire_canvas_resize(&canvas);

    let trail = Rc::new(RefCell::new(ParticleTrail::default()));
    events::wire_pointer_trail(trail.clone());

    let mut trail_frame = frame::TrailFrame { canvas, ctx, trail };
    frame::start_loop(move || trail_frame.frame());
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flipbook-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let audio = match dom::element_by_id::<web::HtmlAudioElement>(&document, AUDIO_ID) {
        Ok(a) => Some(a),
        Err(e) => {
            log::warn!("[audio] {}; background music disabled", e);
            None
        }
    };

    let pages: Vec<web::HtmlElement> = dom::query_all_in_document(&document, PAGE_SELECTOR);
    let page_ids: Vec<String> = pages.iter().map(|p| p.id()).collect();
    let last_page = Flipbook::find_last_page(&page_ids, LAST_PAGE_ID);
    let controller = Rc::new(RefCell::new(BookController::new(pages.len(), last_page)));

    if let Some(a) = &audio {
        events::wire_volume_controls(events::VolumeWiring {
            audio: a.clone(),
            slider: dom::element_by_id(&document, VOLUME_SLIDER_ID).ok(),
            icon: dom::element_by_id(&document, VOLUME_ICON_ID).ok(),
            controller: controller.clone(),
        });
    }

    events::wire_page_clicks(events::PageWiring {
        document: document.clone(),
        pages: Rc::new(pages),
        controller,
        audio,
    });

    if let Err(e) = wire_trail(&document) {
        log::warn!("[trail] {}; cursor trail disabled", e);
    }

    match leaves::spawn_leaves(&document) {
        Ok(n) => log::info!("[leaves] spawned {}", n),
        Err(e) => log::warn!("[leaves] {}; falling leaves disabled", e),
    }

    Ok(())
}
