pub mod pages;
pub mod pointer;
pub mod volume;

pub use pages::{wire_page_clicks, PageWiring};
pub use pointer::wire_pointer_trail;
pub use volume::{wire_volume_controls, VolumeWiring};
