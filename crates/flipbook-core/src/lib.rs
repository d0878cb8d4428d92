pub mod audio;
pub mod constants;
pub mod controller;
pub mod error;
pub mod leaves;
pub mod pages;
pub mod particles;

pub use audio::*;
pub use controller::*;
pub use error::*;
pub use leaves::*;
pub use pages::*;
pub use particles::*;
