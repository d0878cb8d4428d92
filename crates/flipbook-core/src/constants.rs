// Shared tuning constants for the flipbook page.

// Flipbook
pub const LOOKAHEAD_PAGES: usize = 2; // pages revealed ahead of a click (two-page spreads)
pub const INITIAL_REVEALED_PAGES: usize = 2; // pages whose images load at startup

// Particle trail
pub const PARTICLES_PER_MOVE: usize = 2;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_MAX: f32 = 7.0; // exclusive
pub const PARTICLE_SPEED_MAX: f32 = 1.5; // per axis, symmetric around zero
pub const PARTICLE_HUE_MIN: f32 = 330.0; // pink/magenta band
pub const PARTICLE_HUE_SPAN: f32 = 20.0;
pub const PARTICLE_ROTATION_SPAN: f32 = 0.5; // initial tilt in radians, centered on zero
pub const PARTICLE_SPIN_SPAN: f32 = 0.02; // radians per frame, centered on zero
pub const PARTICLE_SHRINK_PER_TICK: f32 = 0.1;
pub const PARTICLE_MIN_SIZE: f32 = 0.2; // removed at or below this size
pub const CURSOR_OFFSCREEN: [f32; 2] = [-100.0, -100.0];

// Heart glyph, drawn in a 150x150 design box and scaled by size / HEART_UNIT
pub const HEART_UNIT: f64 = 60.0;
pub const HEART_ORIGIN: [f64; 2] = [75.0, 75.0];

// Audio
pub const DEFAULT_VOLUME: f32 = 0.4;
pub const VOLUME_HIGH_THRESHOLD: f32 = 0.5;
pub const SLIDER_SCALE: f32 = 100.0; // slider reports 0..=100
pub const PLAY_INTERRUPTED: &str = "AbortError"; // play() superseded by pause()

// Visualizer
pub const ANALYSER_FFT_SIZE: u32 = 64;
pub const BAR_MAX_HEIGHT_PX: f32 = 40.0;

// Falling leaves
pub const LEAF_COUNT: usize = 50;
pub const LEAF_HUE: f32 = 330.0;
