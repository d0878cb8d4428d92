use crate::constants::VISUALIZER_BARS_SELECTOR;
use crate::dom;
use crate::frame;
use flipbook_core::constants::ANALYSER_FFT_SIZE;
use flipbook_core::{bar_height, BookController, PageError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn graph_error(what: &str, e: JsValue) -> PageError {
    PageError::AudioGraph(format!("{}: {:?}", what, e))
}

// "<name>: <message>" for DOMExceptions, debug text otherwise
fn rejection_reason(e: &JsValue) -> String {
    match e.dyn_ref::<web::DomException>() {
        Some(ex) => format!("{}: {}", ex.name(), ex.message()),
        None => format!("{:?}", e),
    }
}

// play() settles asynchronously; `on_reject` runs if the host refuses it
fn play(audio: &web::HtmlAudioElement, on_reject: impl FnOnce(String) + 'static) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                on_reject(rejection_reason(&e));
            }
        }),
        Err(e) => on_reject(rejection_reason(&e)),
    }
}

/// First start of the track. A rejection clears the playing flag so the
/// next page click tries again.
pub fn start_playback(audio: &web::HtmlAudioElement, controller: Rc<RefCell<BookController>>) {
    log::info!("[audio] starting playback");
    play(audio, move |reason| {
        controller.borrow_mut().on_playback_rejected(&reason);
    });
}

pub fn resume_playback(audio: &web::HtmlAudioElement) {
    play(audio, |reason| {
        log::error!("[audio] resume failed: {}", PageError::PlaybackRejected(reason));
    });
}

pub fn pause_playback(audio: &web::HtmlAudioElement) {
    if let Err(e) = audio.pause() {
        log::error!("[audio] pause failed: {:?}", e);
    }
}

pub struct Visualizer {
    // held so the graph stays alive for as long as the loop runs
    _audio_ctx: web::AudioContext,
    _source: web::MediaElementAudioSourceNode,
    analyser: web::AnalyserNode,
    samples: Vec<u8>,
    bars: Vec<web::HtmlElement>,
}

impl Visualizer {
    pub fn new(audio: &web::HtmlAudioElement, document: &web::Document) -> Result<Self, PageError> {
        let audio_ctx = web::AudioContext::new().map_err(|e| graph_error("AudioContext", e))?;
        let source = audio_ctx
            .create_media_element_source(audio)
            .map_err(|e| graph_error("MediaElementSource", e))?;
        let analyser = audio_ctx
            .create_analyser()
            .map_err(|e| graph_error("AnalyserNode", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        _ = source.connect_with_audio_node(&analyser);
        _ = analyser.connect_with_audio_node(&audio_ctx.destination());

        let bins = analyser.frequency_bin_count() as usize;
        let bars = dom::query_all_in_document::<web::HtmlElement>(document, VISUALIZER_BARS_SELECTOR);
        log::info!("[audio] visualizer ready: bins={} bars={}", bins, bars.len());
        Ok(Self {
            _audio_ctx: audio_ctx,
            _source: source,
            analyser,
            samples: vec![0; bins],
            bars,
        })
    }

    pub fn frame(&mut self) {
        self.analyser.get_byte_frequency_data(&mut self.samples);
        for (i, bar) in self.bars.iter().enumerate() {
            let h = bar_height(&self.samples, i);
            dom::set_style(bar, "height", &format!("{:.1}px", h));
        }
    }
}

/// Wire the media element into an analyser and start animating the bars.
/// Must run at most once per page; the controller's latch guarantees that.
pub fn init_visualizer(audio: &web::HtmlAudioElement, document: &web::Document) {
    match Visualizer::new(audio, document) {
        Ok(mut vis) => frame::start_loop(move || vis.frame()),
        Err(e) => log::warn!("[audio] {}; visualizer disabled", e),
    }
}
