// DOM hooks the page markup provides.
//
// Every lookup is optional at runtime: a missing element disables only the
// feature that needs it.

// Audio
pub const AUDIO_ID: &str = "background-music";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";
pub const VOLUME_ICON_ID: &str = "volume-icon";
pub const VISUALIZER_BARS_SELECTOR: &str = ".sound-visualizer .bar";

// Flipbook
pub const PAGE_SELECTOR: &str = ".page";
pub const LAST_PAGE_ID: &str = "page-16";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SRC_ATTR: &str = "data-src";
pub const FLIPPED_CLASS: &str = "flipped";
pub const LOADED_CLASS: &str = "loaded";

// Trail
pub const TRAIL_CANVAS_ID: &str = "sparkle-canvas";

// Leaves
pub const LEAF_CONTAINER_ID: &str = "falling-leaves-container";
pub const LEAF_CLASS: &str = "leaf";
