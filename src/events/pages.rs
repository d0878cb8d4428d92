use crate::audio;
use crate::constants::{FLIPPED_CLASS, LAZY_IMAGE_SELECTOR, LAZY_SRC_ATTR, LOADED_CLASS};
use crate::dom;
use flipbook_core::constants::INITIAL_REVEALED_PAGES;
use flipbook_core::{BookController, BookEffect};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PageWiring {
    pub document: web::Document,
    pub pages: Rc<Vec<web::HtmlElement>>,
    pub controller: Rc<RefCell<BookController>>,
    pub audio: Option<web::HtmlAudioElement>,
}

pub fn wire_page_clicks(w: PageWiring) {
    let mut effects = Vec::new();
    {
        let mut ctl = w.controller.borrow_mut();
        ctl.reveal_initial(INITIAL_REVEALED_PAGES, &mut effects);
        for (index, page) in ctl.book.pages().iter().enumerate() {
            effects.push(BookEffect::SetZIndex {
                index,
                z: page.z_index,
            });
        }
    }
    apply_effects(&w, &effects);

    for (index, page) in w.pages.iter().enumerate() {
        let w = w.clone();
        dom::add_listener(page, "click", move || {
            let mut effects = Vec::new();
            w.controller.borrow_mut().on_page_click(index, &mut effects);
            apply_effects(&w, &effects);
        });
    }
    log::info!("[flipbook] wired {} pages", w.pages.len());
}

fn apply_effects(w: &PageWiring, effects: &[BookEffect]) {
    for effect in effects {
        match *effect {
            BookEffect::StartPlayback => {
                if let Some(a) = &w.audio {
                    audio::start_playback(a, w.controller.clone());
                }
            }
            BookEffect::InitVisualizer => {
                if let Some(a) = &w.audio {
                    audio::init_visualizer(a, &w.document);
                }
            }
            BookEffect::RevealImages(i) => {
                if let Some(page) = w.pages.get(i) {
                    reveal_images(page);
                }
            }
            BookEffect::SetFlipped { index, flipped } => {
                if let Some(page) = w.pages.get(index) {
                    _ = page.class_list().toggle_with_force(FLIPPED_CLASS, flipped);
                }
            }
            BookEffect::SetZIndex { index, z } => {
                if let Some(page) = w.pages.get(index) {
                    dom::set_style(page, "z-index", &z.to_string());
                }
            }
            BookEffect::PauseAudio => {
                if let Some(a) = &w.audio {
                    audio::pause_playback(a);
                }
            }
            BookEffect::ResumeAudio => {
                if let Some(a) = &w.audio {
                    audio::resume_playback(a);
                }
            }
        }
    }
}

// Swap deferred sources in; broken images are left to the browser
fn reveal_images(page: &web::HtmlElement) {
    for img in dom::query_all::<web::HtmlImageElement>(page, LAZY_IMAGE_SELECTOR) {
        let Some(src) = img.get_attribute(LAZY_SRC_ATTR) else {
            continue;
        };
        if src.is_empty() {
            continue;
        }
        let img_loaded = img.clone();
        dom::add_listener(&img, "load", move || {
            _ = img_loaded.class_list().add_1(LOADED_CLASS);
        });
        img.set_src(&src);
        _ = img.remove_attribute(LAZY_SRC_ATTR);
    }
}
