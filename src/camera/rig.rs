//! Camera Rig Module
//!
//! The per-frame camera update pipeline for the top-down rig: speed scaling
//! from zoom, horizontal pan smoothing, spring-arm zoom interpolation,
//! ground-following height resolution via the vertical probe, and pitch/yaw
//! orientation while the camera is locked.
//!
//! The rig is scene-graph agnostic - it owns its own transform state and the
//! host mirrors it into whatever actor or node represents the camera anchor.

use glam::Vec3;

use crate::camera::probe::{GroundProbe, RaycastWorld};
use crate::camera::smoothing::{exp_interp_to, exp_interp_to_vec3};
use crate::config::RigConfig;
use crate::input::state::{InputState, OrientationMode};

/// Clearance kept between the detected surface and the rig anchor, on top
/// of the followed mesh's bounds height.
pub const HEIGHT_PADDING: f32 = 50.0;

/// Pitch limit constant: 30 degrees in radians
pub const PITCH_MIN: f32 = 30.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: 89 degrees in radians
pub const PITCH_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Translation smoothing convergence rate (1/s)
const TRANSLATION_RATE: f32 = 100.0;
/// Spring-arm zoom convergence rate (1/s)
const ZOOM_RATE: f32 = 10.0;
/// Ground-following height convergence rate (1/s)
const HEIGHT_RATE: f32 = 5.0;

/// Bounds for the zoom-derived pan speed modifier
const SPEED_MODIFIER_MIN: f32 = 0.6;
const SPEED_MODIFIER_MAX: f32 = 3.6;

/// Frame deltas above this are clamped to avoid huge catch-up jumps
const MAX_FRAME_DT: f32 = 0.1;

/// Snapshot of the rig transform after one update, consumed by the frame
/// driver to push each outbound host call exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigFrame {
    /// Anchor world position
    pub position: Vec3,
    /// Current spring-arm length
    pub arm_length: f32,
    /// Look-down pitch in radians, within [PITCH_MIN, PITCH_MAX]
    pub pitch: f32,
    /// Accumulated facing yaw in radians
    pub yaw: f32,
    /// Whether the ground probe found no surface this frame
    pub probe_missed: bool,
}

/// Camera rig state machine.
///
/// Owns the anchor position, spring-arm length, and orientation, and drives
/// them from the per-frame [`InputState`]. Orientation has two modes,
/// `Locked` (axis input steers pitch/yaw) and `FreeLook` (orientation
/// frozen); position, zoom and height update unconditionally in both.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: RigConfig,
    probe: GroundProbe,
    /// Anchor world position (the point the spring arm pivots around)
    position: Vec3,
    /// Current spring-arm length, smoothed toward the input target zoom
    arm_length: f32,
    /// Look-down pitch in radians
    pitch: f32,
    /// Facing yaw in radians, accumulated via relative rotation
    yaw: f32,
    /// Height of the followed mesh's bounds above its origin
    mesh_top: f32,
}

impl CameraRig {
    /// Create a rig at the origin with the spring arm at its resting length
    /// and a 60 degree look-down pitch.
    pub fn new(config: RigConfig) -> Self {
        Self {
            arm_length: config.zoom_default,
            config,
            probe: GroundProbe::new(),
            position: Vec3::ZERO,
            pitch: 60.0_f32.to_radians(),
            yaw: 0.0,
            mesh_top: 0.0,
        }
    }

    /// Create a rig with a custom ground probe, e.g. scaled extents for a
    /// world in different units.
    pub fn with_probe(config: RigConfig, probe: GroundProbe) -> Self {
        Self {
            probe,
            ..Self::new(config)
        }
    }

    /// Anchor world position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the anchor. Smoothing resumes from the new position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Current spring-arm length.
    #[inline]
    pub fn arm_length(&self) -> f32 {
        self.arm_length
    }

    /// Look-down pitch in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch directly; the value is clamped into the pitch limits.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Facing yaw in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the facing yaw directly.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set the followed mesh's bounds height, used for ground clearance.
    pub fn set_mesh_top(&mut self, mesh_top: f32) {
        self.mesh_top = mesh_top;
    }

    /// The configuration this rig was built with.
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Planar forward direction of the anchor, derived from yaw.
    ///
    /// Pan movement is always horizontal; pitch lives on the spring arm and
    /// never tilts the motion basis.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Planar right direction of the anchor.
    #[inline]
    pub fn right(&self) -> Vec3 {
        let forward = self.forward();
        forward.cross(Vec3::Y)
    }

    /// Current transform snapshot without advancing the simulation.
    pub fn frame(&self) -> RigFrame {
        RigFrame {
            position: self.position,
            arm_length: self.arm_length,
            pitch: self.pitch,
            yaw: self.yaw,
            probe_missed: false,
        }
    }

    /// Advance the rig by one frame.
    ///
    /// Runs the full pipeline: zoom-scaled pan speed, horizontal intent and
    /// smoothing, spring-arm interpolation, vertical resolution against the
    /// ground probe (holding the last height when nothing is hit), and the
    /// orientation step while locked.
    ///
    /// # Arguments
    /// * `dt` - Elapsed time in seconds; non-positive values change nothing
    /// * `input` - Input state with all of this frame's callbacks applied
    /// * `world` - Ray-intersection oracle, `None` if the backend is down
    /// * `focus_active` - Whether the host has an active input-focus
    ///   controller; orientation is skipped without one
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        world: Option<&dyn RaycastWorld>,
        focus_active: bool,
    ) -> RigFrame {
        if dt <= 0.0 {
            return self.frame();
        }
        let dt = dt.min(MAX_FRAME_DT);

        // Pan faster when zoomed out, slower when zoomed in, within bounds.
        let speed_modifier = (input.target_zoom.abs() / self.config.zoom_default)
            .clamp(SPEED_MODIFIER_MIN, SPEED_MODIFIER_MAX);
        let effective_speed = self.config.movement_speed * speed_modifier;

        // Horizontal intent from the anchor's planar basis.
        let motion =
            (self.forward() * input.forward_axis + self.right() * input.right_axis)
                * effective_speed
                * dt;
        let raw_target = self.position + motion;

        // Translation smoothing toward the raw target.
        let smoothed = exp_interp_to_vec3(self.position, raw_target, dt, TRANSLATION_RATE);

        // Spring-arm zoom smoothing.
        self.arm_length = exp_interp_to(self.arm_length, input.target_zoom, dt, ZOOM_RATE);

        // Vertical resolution: probe straight down through the flattened
        // target position for the highest surface.
        let probe_origin = Vec3::new(smoothed.x, 0.0, smoothed.z);
        let mut probe_missed = false;

        match self.probe.probe(world, probe_origin) {
            Some(hit) => {
                let clearance = Vec3::Y * (self.mesh_top + HEIGHT_PADDING);
                self.position = exp_interp_to_vec3(smoothed, hit.point + clearance, dt, HEIGHT_RATE);
            }
            None => {
                // Hold the last height rather than falling indefinitely.
                probe_missed = true;
                log::warn!(
                    "camera ground probe found no surface at ({:.1}, {:.1}); holding height",
                    probe_origin.x,
                    probe_origin.z
                );
                self.position = smoothed;
            }
        }

        // Orientation: only while locked, and only when the host actually
        // has an input-focus controller to rotate for.
        if input.orientation_mode() == OrientationMode::Locked && focus_active {
            let rotation_speed = self.config.rotation_speed.to_radians();
            self.pitch =
                (self.pitch + input.pitch_axis * rotation_speed * dt).clamp(PITCH_MIN, PITCH_MAX);
            self.yaw += input.yaw_axis * rotation_speed * dt;
        }

        RigFrame {
            position: self.position,
            arm_length: self.arm_length,
            pitch: self.pitch,
            yaw: self.yaw,
            probe_missed,
        }
    }
}
