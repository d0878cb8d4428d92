use flipbook_core::ParticleTrail;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_trail(trail: Rc<RefCell<ParticleTrail>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let mut rng = rand::thread_rng();
        trail.borrow_mut().on_pointer_move(x, y, &mut rng);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
