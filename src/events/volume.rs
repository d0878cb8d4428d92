use crate::dom;
use flipbook_core::{slider_to_volume, volume_to_slider, BookController, VolumeIcon};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct VolumeWiring {
    pub audio: web::HtmlAudioElement,
    pub slider: Option<web::HtmlInputElement>,
    pub icon: Option<web::HtmlElement>,
    pub controller: Rc<RefCell<BookController>>,
}

impl VolumeWiring {
    // Mirror the stored volume onto the element, icon and (optionally) slider
    fn sync(&self, icon: VolumeIcon, update_slider: bool) {
        let volume = self.controller.borrow().audio.volume();
        self.audio.set_volume(volume as f64);
        if update_slider {
            if let Some(s) = &self.slider {
                s.set_value(&volume_to_slider(volume));
            }
        }
        if let Some(i) = &self.icon {
            i.set_text_content(Some(icon.glyph()));
        }
    }
}

pub fn wire_volume_controls(w: VolumeWiring) {
    let icon = w.controller.borrow().audio.icon();
    w.sync(icon, true);

    let (Some(slider), Some(icon_el)) = (w.slider.clone(), w.icon.clone()) else {
        log::warn!("[audio] volume controls incomplete; slider and icon not wired");
        return;
    };

    let w_input = w.clone();
    let slider_input = slider.clone();
    dom::add_listener(&slider, "input", move || {
        let Some(volume) = slider_to_volume(&slider_input.value()) else {
            return;
        };
        let icon = w_input.controller.borrow_mut().audio.set_volume(volume);
        w_input.sync(icon, false);
    });

    let w_click = w;
    dom::add_listener(&icon_el, "click", move || {
        let icon = w_click.controller.borrow_mut().audio.toggle_mute();
        w_click.sync(icon, true);
    });
}
