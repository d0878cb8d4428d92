use flipbook_core::constants::HEART_ORIGIN;
use flipbook_core::{Particle, ParticleTrail, PathSegment, HEART_PATH};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct TrailFrame {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub trail: Rc<RefCell<ParticleTrail>>,
}

impl TrailFrame {
    pub fn frame(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let ctx = &self.ctx;
        self.trail.borrow_mut().tick(|p| draw_heart(ctx, p));
    }
}

fn draw_heart(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    ctx.save();
    _ = ctx.translate(p.position.x as f64, p.position.y as f64);
    _ = ctx.rotate(p.rotation as f64);
    let scale = p.scale();
    _ = ctx.scale(scale, scale);
    _ = ctx.translate(-HEART_ORIGIN[0], -HEART_ORIGIN[1]);
    #[allow(deprecated)]
    ctx.set_fill_style(&JsValue::from_str(&p.css_color()));
    ctx.begin_path();
    for seg in HEART_PATH.iter() {
        match *seg {
            PathSegment::MoveTo([x, y]) => ctx.move_to(x, y),
            PathSegment::CubicTo([c1x, c1y], [c2x, c2y], [x, y]) => {
                ctx.bezier_curve_to(c1x, c1y, c2x, c2y, x, y)
            }
        }
    }
    ctx.fill();
    ctx.restore();
}

/// Run `frame` before every repaint for the rest of the page's life.
pub fn start_loop(mut frame: impl FnMut() + 'static) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
