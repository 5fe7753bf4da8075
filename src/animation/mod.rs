//! Animation module
//!
//! Explicit simulation steps for the door swing and the camera. The host's
//! render loop calls them once per frame with the elapsed time; nothing here
//! depends on a renderer.

pub mod camera;
pub mod door;
pub mod ease;

pub use camera::{camera_target, CameraRig, NavigationMode, Viewpoint};
pub use door::{DoorState, DoorSwing};
pub use ease::{EaseRate, REFERENCE_TICK_RATE, SETTLE_EPSILON};
