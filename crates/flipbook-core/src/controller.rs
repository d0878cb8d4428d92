use crate::audio::AudioState;
use crate::constants::PLAY_INTERRUPTED;
use crate::pages::Flipbook;

/// Side effects a page click asks the frontend to perform, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookEffect {
    StartPlayback,
    InitVisualizer,
    RevealImages(usize),
    SetFlipped { index: usize, flipped: bool },
    SetZIndex { index: usize, z: i32 },
    PauseAudio,
    ResumeAudio,
}

/// Ties the flip state to the background track.
#[derive(Clone, Debug)]
pub struct BookController {
    pub book: Flipbook,
    pub audio: AudioState,
}

impl BookController {
    pub fn new(page_count: usize, last_page: Option<usize>) -> Self {
        Self {
            book: Flipbook::new(page_count, last_page),
            audio: AudioState::default(),
        }
    }

    /// Reveal the images of the first `count` pages; used once at startup.
    pub fn reveal_initial(&mut self, count: usize, out: &mut Vec<BookEffect>) {
        for i in 0..count {
            if self.book.lazy_load(i) {
                out.push(BookEffect::RevealImages(i));
            }
        }
    }

    pub fn on_page_click(&mut self, index: usize, out: &mut Vec<BookEffect>) {
        if index >= self.book.len() {
            log::warn!("[flipbook] click on unknown page {}", index);
            return;
        }

        if self.audio.begin_playback() {
            out.push(BookEffect::StartPlayback);
            if self.audio.init_visualizer() {
                out.push(BookEffect::InitVisualizer);
            }
        }

        for next in Flipbook::look_ahead(index) {
            if self.book.lazy_load(next) {
                out.push(BookEffect::RevealImages(next));
            }
        }

        let Some(flipped) = self.book.toggle(index) else {
            return;
        };
        out.push(BookEffect::SetFlipped { index, flipped });
        for (i, page) in self.book.pages().iter().enumerate() {
            out.push(BookEffect::SetZIndex {
                index: i,
                z: page.z_index,
            });
        }

        if self.book.is_last_page(index) {
            if flipped {
                out.push(BookEffect::PauseAudio);
            } else {
                out.push(BookEffect::ResumeAudio);
            }
        }
    }

    /// `reason` is the DOMException text, `"<name>: <message>"`. An
    /// `AbortError` comes from our own `pause()` superseding the start (first
    /// click on the last page), not from the host; the flag stays set.
    pub fn on_playback_rejected(&mut self, reason: &str) {
        if reason.starts_with(PLAY_INTERRUPTED) {
            log::info!("[audio] playback start interrupted by pause");
            return;
        }
        log::warn!("[audio] playback rejected: {}", reason);
        self.audio.playback_rejected();
    }
}
