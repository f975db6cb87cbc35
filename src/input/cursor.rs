//! Cursor Controller Module
//!
//! Derives mouse-cursor visibility and the host input-capture mode from the
//! rig's orientation mode. While the camera is locked the cursor stays
//! visible and both game and UI receive input; holding free-look hides the
//! cursor and captures input for the game alone.
//!
//! The controller is a pure function of the current mode and safe to
//! re-apply every frame; dirty tracking is offered for hosts that only want
//! to touch the window when something changed.

use crate::input::state::OrientationMode;

/// Host input-capture mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Input reaches both the game and UI layers
    #[default]
    GameAndUi,
    /// Input is captured by the game only
    GameOnly,
}

/// Desired cursor visibility and input mode for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// Whether the OS cursor should be shown
    pub visible: bool,
    /// Which layers receive input
    pub mode: InputMode,
}

impl CursorState {
    fn for_mode(mode: OrientationMode) -> Self {
        match mode {
            OrientationMode::Locked => Self {
                visible: true,
                mode: InputMode::GameAndUi,
            },
            OrientationMode::FreeLook => Self {
                visible: false,
                mode: InputMode::GameOnly,
            },
        }
    }
}

/// Tracks the cursor state applied to the host.
#[derive(Debug, Clone)]
pub struct CursorController {
    current: CursorState,
    state_dirty: bool,
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorController {
    /// Create a controller in the locked-camera state (cursor visible,
    /// game + UI input). The initial state is dirty so hosts apply it once
    /// at startup.
    pub fn new() -> Self {
        Self {
            current: CursorState::for_mode(OrientationMode::Locked),
            state_dirty: true,
        }
    }

    /// Recompute the cursor state for the given orientation mode.
    ///
    /// Idempotent: calling repeatedly with the same mode returns the same
    /// state and only marks dirty on an actual change.
    pub fn update(&mut self, mode: OrientationMode) -> CursorState {
        let next = CursorState::for_mode(mode);
        if next != self.current {
            log::debug!(
                "cursor mode change: visible={} input={:?}",
                next.visible,
                next.mode
            );
            self.current = next;
            self.state_dirty = true;
        }
        self.current
    }

    /// The most recently computed cursor state.
    pub fn state(&self) -> CursorState {
        self.current
    }

    /// Whether the state changed since the last [`Self::clear_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying the state to the host.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }
}
