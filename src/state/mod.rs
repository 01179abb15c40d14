pub mod config;
pub mod controller;
pub mod gesture;
pub mod pan;
pub mod tween;

pub use config::ViewportConfig;
pub use controller::{ReleaseOutcome, ViewportController};
pub use gesture::{GestureSample, TouchPoint};
pub use pan::PanState;
pub use tween::Tween;
