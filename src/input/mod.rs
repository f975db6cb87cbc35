//! Input Module
//!
//! Input state for the camera rig, the name-to-action binding table, and
//! the cursor/input-mode controller. Decoupled from any specific windowing
//! or engine input system: the host resolves its action names once at setup
//! and then feeds plain values in.

pub mod bindings;
pub mod cursor;
pub mod state;

pub use bindings::{AxisAction, AxisBindings, EdgeAction, EdgeKind};
pub use cursor::{CursorController, CursorState, InputMode};
pub use state::{InputState, OrientationMode};
