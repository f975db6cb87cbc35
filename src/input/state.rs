//! Input State Module
//!
//! The per-frame input record for the camera rig. Input callbacks write the
//! latest axis values here; the rig update reads them once per frame. Axis
//! setters are last-value-wins, zoom accumulates with clamping, and the
//! free-look flag follows press/release edge events.

use crate::config::RigConfig;

/// Orientation mode of the camera rig, derived from the free-look flag.
///
/// One enum feeds both consumers of the flag: the rig's orientation step
/// (which only runs while `Locked`) and the cursor controller (which hides
/// the cursor while `FreeLook`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationMode {
    /// Default mode: pitch/yaw axis input steers the rig each frame
    #[default]
    Locked,
    /// Free-look held: rig orientation updates are suppressed
    FreeLook,
}

/// Latest input axis values and the free-look flag.
///
/// Owned by the rig controller; mutated only by input-event handlers.
/// `target_zoom` is kept inside the configured zoom range at all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Forward/backward pan axis, typically in [-1, 1]
    pub forward_axis: f32,
    /// Right/left pan axis, typically in [-1, 1]
    pub right_axis: f32,
    /// Yaw rotation axis (continuous for mouse deltas)
    pub yaw_axis: f32,
    /// Pitch rotation axis (continuous for mouse deltas)
    pub pitch_axis: f32,
    /// Spring-arm length the rig zooms toward, within [zoom_min, zoom_max]
    pub target_zoom: f32,
    /// Whether the free-look modifier is currently held
    pub free_look_held: bool,
}

impl InputState {
    /// Create an input state at rest, with the zoom target at the
    /// configured default length.
    pub fn new(config: &RigConfig) -> Self {
        Self {
            forward_axis: 0.0,
            right_axis: 0.0,
            yaw_axis: 0.0,
            pitch_axis: 0.0,
            target_zoom: config.zoom_default,
            free_look_held: false,
        }
    }

    /// Record the forward axis value. Zero means the axis is at rest.
    #[inline]
    pub fn set_forward(&mut self, value: f32) {
        self.forward_axis = value;
    }

    /// Record the right axis value.
    #[inline]
    pub fn set_right(&mut self, value: f32) {
        self.right_axis = value;
    }

    /// Record the yaw axis value.
    #[inline]
    pub fn set_yaw(&mut self, value: f32) {
        self.yaw_axis = value;
    }

    /// Record the pitch axis value.
    #[inline]
    pub fn set_pitch(&mut self, value: f32) {
        self.pitch_axis = value;
    }

    /// Accumulate a zoom delta into the target zoom.
    ///
    /// Adds `zoom_change_rate * value` to the current target and clamps the
    /// result into `[zoom_min, zoom_max]`. Accumulation (not assignment)
    /// lets repeated small scroll inputs integrate across frames.
    pub fn apply_zoom(&mut self, config: &RigConfig, value: f32) {
        let change = config.zoom_change_rate * value;
        self.target_zoom = (self.target_zoom + change).clamp(config.zoom_min, config.zoom_max);
    }

    /// Record the free-look flag from a press (`true`) or release (`false`)
    /// edge event.
    #[inline]
    pub fn set_free_look(&mut self, held: bool) {
        self.free_look_held = held;
    }

    /// Current orientation mode implied by the free-look flag.
    #[inline]
    pub fn orientation_mode(&self) -> OrientationMode {
        if self.free_look_held {
            OrientationMode::FreeLook
        } else {
            OrientationMode::Locked
        }
    }
}
