//! Camera Module
//!
//! Camera rig state, smoothing math, and the ground probe. This module is
//! scene-graph agnostic - it only deals with rig state and math.

pub mod probe;
pub mod rig;
pub mod smoothing;

pub use probe::{ActorId, GroundHit, GroundProbe, RaycastWorld};
pub use rig::{CameraRig, HEIGHT_PADDING, PITCH_MAX, PITCH_MIN, RigFrame};
pub use smoothing::{exp_interp_to, exp_interp_to_vec3};
