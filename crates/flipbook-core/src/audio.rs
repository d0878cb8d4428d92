//! Volume, playback and visualizer state for the background track.
//!
//! Nothing here touches the media element; the web frontend reads this state
//! and mirrors it onto the audio element, slider and icon.

use crate::constants::{BAR_MAX_HEIGHT_PX, DEFAULT_VOLUME, SLIDER_SCALE, VOLUME_HIGH_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    pub fn for_volume(volume: f32) -> Self {
        if volume <= 0.0 {
            VolumeIcon::Muted
        } else if volume < VOLUME_HIGH_THRESHOLD {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "🔇",
            VolumeIcon::Low => "🔉",
            VolumeIcon::High => "🔊",
        }
    }
}

/// One-way latch for wiring the media element into an analyser graph.
/// A media element can only be captured by one graph per page life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualizerState {
    #[default]
    Uninitialized,
    Ready,
}

#[derive(Clone, Debug)]
pub struct AudioState {
    volume: f32,
    last_non_zero_volume: f32,
    playing: bool,
    visualizer: VisualizerState,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            last_non_zero_volume: DEFAULT_VOLUME,
            playing: false,
            visualizer: VisualizerState::Uninitialized,
        }
    }
}

impl AudioState {
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn last_non_zero_volume(&self) -> f32 {
        self.last_non_zero_volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn visualizer(&self) -> VisualizerState {
        self.visualizer
    }

    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::for_volume(self.volume)
    }

    pub fn set_volume(&mut self, volume: f32) -> VolumeIcon {
        let v = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.volume = v;
        if v > 0.0 {
            self.last_non_zero_volume = v;
        }
        VolumeIcon::for_volume(v)
    }

    pub fn toggle_mute(&mut self) -> VolumeIcon {
        if self.volume > 0.0 {
            self.last_non_zero_volume = self.volume;
            self.volume = 0.0;
        } else {
            self.volume = if self.last_non_zero_volume > 0.0 {
                self.last_non_zero_volume
            } else {
                DEFAULT_VOLUME
            };
        }
        VolumeIcon::for_volume(self.volume)
    }

    /// Mark playback as started. Returns `false` when it already was, in which
    /// case the caller should not call `play()` again.
    pub fn begin_playback(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// The host refused to start playback; the next interaction retries.
    pub fn playback_rejected(&mut self) {
        self.playing = false;
    }

    /// Fires exactly once per page life.
    pub fn init_visualizer(&mut self) -> bool {
        match self.visualizer {
            VisualizerState::Uninitialized => {
                self.visualizer = VisualizerState::Ready;
                true
            }
            VisualizerState::Ready => false,
        }
    }
}

/// Parse a slider value (0..=100, integer prefix like `parseInt`) into a volume.
pub fn slider_to_volume(value: &str) -> Option<f32> {
    let s = value.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let n: i32 = s[..end].parse().ok()?;
    Some((n as f32 / SLIDER_SCALE).clamp(0.0, 1.0))
}

pub fn volume_to_slider(volume: f32) -> String {
    format!("{}", (volume * SLIDER_SCALE).round() as i32)
}

/// Height in pixels of visualizer bar `bar`, reading frequency bins cyclically.
pub fn bar_height(samples: &[u8], bar: usize) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let magnitude = samples[bar % samples.len()];
    magnitude as f32 / 255.0 * BAR_MAX_HEIGHT_PX
}
