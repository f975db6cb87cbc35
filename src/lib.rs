//! Top-Down Camera Rig Engine
//!
//! An engine-agnostic third-person/top-down camera rig controller. Raw
//! player input becomes smoothed camera position, zoom and orientation each
//! frame, with a vertical raycast probe keeping the camera grounded against
//! uneven terrain.
//!
//! The crate owns no window, scene graph or physics backend. The host
//! supplies a ray-intersection oracle ([`RaycastWorld`]) and receives the
//! computed transform through the [`RigHost`] and [`CursorHost`] traits.
//!
//! # Modules
//!
//! - [`camera`] - The rig state machine, smoothing math, and ground probe
//! - [`input`] - Input state, binding table, and cursor/input-mode control
//! - [`config`] - Tunable parameters, loadable from JSON
//! - [`driver`] - The per-frame entry point and host-facing traits
//!
//! # Example
//!
//! ```
//! use td_camera_engine::{FrameDriver, RigConfig, EdgeKind};
//! use td_camera_engine::driver::{RigHost, CursorHost};
//! use td_camera_engine::input::InputMode;
//! use glam::Vec3;
//!
//! struct Anchor { position: Vec3 }
//! struct Window { cursor_visible: bool }
//!
//! impl RigHost for Anchor {
//!     fn set_world_position(&mut self, position: Vec3) { self.position = position; }
//!     fn set_world_rotation(&mut self, _pitch: f32, _yaw: f32, _roll: f32) {}
//!     fn set_spring_arm_length(&mut self, _length: f32) {}
//! }
//!
//! impl CursorHost for Window {
//!     fn set_cursor_visible(&mut self, visible: bool) { self.cursor_visible = visible; }
//!     fn set_input_mode(&mut self, _mode: InputMode) {}
//! }
//!
//! let mut driver = FrameDriver::new(RigConfig::default());
//! let mut anchor = Anchor { position: Vec3::ZERO };
//! let mut window = Window { cursor_visible: true };
//!
//! // Input callbacks arrive before the tick...
//! driver.on_axis("Movement_Forward", 1.0);
//! driver.on_edge("Camera_RotateMouseShow", EdgeKind::Pressed);
//!
//! // ...then the scheduler ticks the frame. No collision backend here,
//! // so the probe fails soft and the camera holds its height.
//! let frame = driver.on_tick(1.0 / 60.0, None, &mut anchor, &mut window);
//! assert!(frame.probe_missed);
//! assert!(!window.cursor_visible);
//! ```

pub mod camera;
pub mod config;
pub mod driver;
pub mod input;

// Re-export the types most hosts touch at crate level for convenience
pub use camera::{ActorId, CameraRig, GroundHit, GroundProbe, RaycastWorld, RigFrame};
pub use config::{ConfigError, RigConfig};
pub use driver::{CursorHost, FrameDriver, RigHost};
pub use input::{AxisBindings, CursorController, EdgeKind, InputMode, InputState, OrientationMode};
