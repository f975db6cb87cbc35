//! Input Bindings Module
//!
//! Maps host-side axis and action names to logical rig inputs. The name
//! lookup happens once at setup when the host registers its input system;
//! after that, dispatch is keyed by enum and routes straight into the
//! [`InputState`] setters with no per-frame string matching.

use std::collections::HashMap;

use crate::config::RigConfig;
use crate::input::state::InputState;

/// Logical analog axes the rig consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisAction {
    /// Pan forward/backward (default name: "Movement_Forward")
    MoveForward,
    /// Pan right/left (default name: "Movement_Right")
    MoveRight,
    /// Spring-arm zoom delta (default name: "Camera_Zoom")
    CameraZoom,
    /// Yaw rotation (default name: "Camera_Yaw")
    CameraYaw,
    /// Pitch rotation (default name: "Camera_Pitch")
    CameraPitch,
}

/// Logical press/release actions the rig consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAction {
    /// Free-look modifier (default name: "Camera_RotateMouseShow")
    FreeLook,
}

/// Which edge of a button event occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Pressed,
    Released,
}

/// Maps host action names to logical rig inputs, supporting remapping.
///
/// Both directions are kept so hosts can resolve names at setup and display
/// the current binding for an action.
#[derive(Debug, Clone)]
pub struct AxisBindings {
    name_to_axis: HashMap<String, AxisAction>,
    axis_to_name: HashMap<AxisAction, String>,
    name_to_edge: HashMap<String, EdgeAction>,
    edge_to_name: HashMap<EdgeAction, String>,
}

impl Default for AxisBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisBindings {
    /// Create bindings using the stock action names:
    /// - "Movement_Forward" = MoveForward
    /// - "Movement_Right" = MoveRight
    /// - "Camera_Zoom" = CameraZoom
    /// - "Camera_Yaw" = CameraYaw
    /// - "Camera_Pitch" = CameraPitch
    /// - "Camera_RotateMouseShow" = FreeLook
    pub fn new() -> Self {
        let mut bindings = Self {
            name_to_axis: HashMap::new(),
            axis_to_name: HashMap::new(),
            name_to_edge: HashMap::new(),
            edge_to_name: HashMap::new(),
        };

        bindings.bind_axis("Movement_Forward", AxisAction::MoveForward);
        bindings.bind_axis("Movement_Right", AxisAction::MoveRight);
        bindings.bind_axis("Camera_Zoom", AxisAction::CameraZoom);
        bindings.bind_axis("Camera_Yaw", AxisAction::CameraYaw);
        bindings.bind_axis("Camera_Pitch", AxisAction::CameraPitch);
        bindings.bind_edge("Camera_RotateMouseShow", EdgeAction::FreeLook);

        bindings
    }

    /// Bind a host name to an analog axis, replacing any previous binding
    /// of either the name or the axis.
    pub fn bind_axis(&mut self, name: &str, axis: AxisAction) {
        if let Some(old_axis) = self.name_to_axis.remove(name) {
            self.axis_to_name.remove(&old_axis);
        }
        if let Some(old_name) = self.axis_to_name.remove(&axis) {
            self.name_to_axis.remove(&old_name);
        }
        self.name_to_axis.insert(name.to_owned(), axis);
        self.axis_to_name.insert(axis, name.to_owned());
    }

    /// Bind a host name to an edge action, replacing any previous binding
    /// of either the name or the action.
    pub fn bind_edge(&mut self, name: &str, edge: EdgeAction) {
        if let Some(old_edge) = self.name_to_edge.remove(name) {
            self.edge_to_name.remove(&old_edge);
        }
        if let Some(old_name) = self.edge_to_name.remove(&edge) {
            self.name_to_edge.remove(&old_name);
        }
        self.name_to_edge.insert(name.to_owned(), edge);
        self.edge_to_name.insert(edge, name.to_owned());
    }

    /// Resolve a host axis name to its logical axis, if bound.
    pub fn resolve_axis(&self, name: &str) -> Option<AxisAction> {
        self.name_to_axis.get(name).copied()
    }

    /// Resolve a host action name to its logical edge action, if bound.
    pub fn resolve_edge(&self, name: &str) -> Option<EdgeAction> {
        self.name_to_edge.get(name).copied()
    }

    /// Current name bound to an axis (for display/remap UIs).
    pub fn axis_name(&self, axis: AxisAction) -> Option<&str> {
        self.axis_to_name.get(&axis).map(String::as_str)
    }

    /// Current name bound to an edge action.
    pub fn edge_name(&self, edge: EdgeAction) -> Option<&str> {
        self.edge_to_name.get(&edge).map(String::as_str)
    }
}

/// Route an analog axis value into the input state.
pub fn dispatch_axis(
    action: AxisAction,
    value: f32,
    input: &mut InputState,
    config: &RigConfig,
) {
    match action {
        AxisAction::MoveForward => input.set_forward(value),
        AxisAction::MoveRight => input.set_right(value),
        AxisAction::CameraZoom => input.apply_zoom(config, value),
        AxisAction::CameraYaw => input.set_yaw(value),
        AxisAction::CameraPitch => input.set_pitch(value),
    }
}

/// Route a press/release event into the input state.
pub fn dispatch_edge(action: EdgeAction, kind: EdgeKind, input: &mut InputState) {
    match action {
        EdgeAction::FreeLook => input.set_free_look(kind == EdgeKind::Pressed),
    }
}
