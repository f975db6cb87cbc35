//! Frame Driver Module
//!
//! The per-frame entry point tying the pieces together. The host's scheduler
//! calls [`FrameDriver::on_tick`] once per simulation tick; the driver runs
//! the camera rig update first and the cursor controller second, then pushes
//! the results to the host through the [`RigHost`] and [`CursorHost`] traits,
//! at most one call per outbound value per frame.

use glam::Vec3;

use crate::camera::probe::{GroundProbe, RaycastWorld};
use crate::camera::rig::{CameraRig, RigFrame};
use crate::config::RigConfig;
use crate::input::bindings::{
    AxisBindings, EdgeKind, dispatch_axis, dispatch_edge,
};
use crate::input::cursor::{CursorController, InputMode};
use crate::input::state::InputState;

/// Host-side camera anchor the driver mirrors the rig transform into.
pub trait RigHost {
    /// Place the camera anchor in the world.
    fn set_world_position(&mut self, position: Vec3);

    /// Orient the camera anchor (radians).
    fn set_world_rotation(&mut self, pitch: f32, yaw: f32, roll: f32);

    /// Set the spring-arm length between anchor and camera.
    fn set_spring_arm_length(&mut self, length: f32);

    /// Whether an input-focus controller is currently active. Orientation
    /// updates are skipped while this reports `false`.
    fn input_focus_active(&self) -> bool {
        true
    }
}

/// Host-side cursor and input-capture surface.
pub trait CursorHost {
    /// Show or hide the OS cursor.
    fn set_cursor_visible(&mut self, visible: bool);

    /// Select which layers receive input.
    fn set_input_mode(&mut self, mode: InputMode);
}

/// Owns the input state and camera rig and drives them each frame.
///
/// Input callbacks (axis values, free-look edges) may arrive at any point
/// before a tick; the tick then consumes the accumulated state. All methods
/// are synchronous and run to completion within the frame.
pub struct FrameDriver {
    config: RigConfig,
    bindings: AxisBindings,
    input: InputState,
    rig: CameraRig,
    cursor: CursorController,
}

impl FrameDriver {
    /// Create a driver with the stock bindings and probe extents.
    pub fn new(config: RigConfig) -> Self {
        Self {
            config,
            bindings: AxisBindings::new(),
            input: InputState::new(&config),
            rig: CameraRig::new(config),
            cursor: CursorController::new(),
        }
    }

    /// Create a driver with custom bindings and probe extents.
    pub fn with_parts(config: RigConfig, bindings: AxisBindings, probe: GroundProbe) -> Self {
        Self {
            config,
            bindings,
            input: InputState::new(&config),
            rig: CameraRig::with_probe(config, probe),
            cursor: CursorController::new(),
        }
    }

    /// Axis callback from the host input system, keyed by bound name.
    ///
    /// Unbound names are ignored; the host decides which of its axes feed
    /// the rig by what it registers in the binding table.
    pub fn on_axis(&mut self, name: &str, value: f32) {
        if let Some(action) = self.bindings.resolve_axis(name) {
            dispatch_axis(action, value, &mut self.input, &self.config);
        }
    }

    /// Press/release callback from the host input system.
    pub fn on_edge(&mut self, name: &str, kind: EdgeKind) {
        if let Some(action) = self.bindings.resolve_edge(name) {
            dispatch_edge(action, kind, &mut self.input);
        }
    }

    /// Per-frame update: rig first, cursor second.
    ///
    /// `dt` is the elapsed time in seconds and is expected to be positive;
    /// a non-positive delta leaves all smoothed state untouched but still
    /// re-applies the cursor mode (which is idempotent).
    pub fn on_tick(
        &mut self,
        dt: f32,
        world: Option<&dyn RaycastWorld>,
        rig_host: &mut dyn RigHost,
        cursor_host: &mut dyn CursorHost,
    ) -> RigFrame {
        let frame = self
            .rig
            .update(dt, &self.input, world, rig_host.input_focus_active());

        rig_host.set_world_position(frame.position);
        rig_host.set_world_rotation(frame.pitch, frame.yaw, 0.0);
        rig_host.set_spring_arm_length(frame.arm_length);

        let cursor_state = self.cursor.update(self.input.orientation_mode());
        cursor_host.set_cursor_visible(cursor_state.visible);
        cursor_host.set_input_mode(cursor_state.mode);

        frame
    }

    /// The rig, for direct inspection or teleporting.
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable rig access for host-side setup (teleport, mesh bounds).
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// The accumulated input state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The binding table, for remapping at setup time.
    pub fn bindings_mut(&mut self) -> &mut AxisBindings {
        &mut self.bindings
    }

    /// The cursor controller, for inspecting the pending-change flag.
    pub fn cursor(&self) -> &CursorController {
        &self.cursor
    }

    /// Mutable cursor access. Hosts that batch OS cursor calls check
    /// [`CursorController::is_dirty`] after a tick and clear it themselves
    /// once the change is applied.
    pub fn cursor_mut(&mut self) -> &mut CursorController {
        &mut self.cursor
    }
}
