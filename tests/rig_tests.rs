//! Rig Tests - Full Pipeline Through the Frame Driver
//!
//! Integration tests for the camera rig: input callbacks through the frame
//! driver, ground probing, smoothing convergence, and cursor/input-mode
//! coupling.

use glam::Vec3;
use td_camera_engine::camera::{ActorId, GroundHit, GroundProbe, PITCH_MAX, PITCH_MIN};
use td_camera_engine::driver::{CursorHost, RigHost};
use td_camera_engine::input::{EdgeKind, InputMode};
use td_camera_engine::{FrameDriver, RaycastWorld, RigConfig};

const DT: f32 = 1.0 / 60.0;

/// Route `log` output through the test harness so probe-miss warnings show
/// up with `--nocapture`.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Flat-plane oracle at a fixed height.
struct FlatWorld {
    height: f32,
}

impl RaycastWorld for FlatWorld {
    fn raycast(&self, start: Vec3, end: Vec3, _ignore: Option<ActorId>) -> Option<GroundHit> {
        let crosses = (start.y - self.height) * (end.y - self.height) <= 0.0;
        crosses.then(|| GroundHit::new(Vec3::new(start.x, self.height, start.z)))
    }
}

/// Captures every outbound rig call.
#[derive(Default)]
struct Anchor {
    position: Vec3,
    rotation: (f32, f32, f32),
    arm_length: f32,
    call_counts: (usize, usize, usize),
    focus: bool,
}

impl RigHost for Anchor {
    fn set_world_position(&mut self, position: Vec3) {
        self.position = position;
        self.call_counts.0 += 1;
    }
    fn set_world_rotation(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.rotation = (pitch, yaw, roll);
        self.call_counts.1 += 1;
    }
    fn set_spring_arm_length(&mut self, length: f32) {
        self.arm_length = length;
        self.call_counts.2 += 1;
    }
    fn input_focus_active(&self) -> bool {
        self.focus
    }
}

/// Captures cursor/input-mode state.
struct Window {
    cursor_visible: bool,
    input_mode: InputMode,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            cursor_visible: true,
            input_mode: InputMode::GameAndUi,
        }
    }
}

impl CursorHost for Window {
    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
    fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }
}

fn focused_anchor() -> Anchor {
    Anchor {
        focus: true,
        ..Default::default()
    }
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_target_zoom_stays_in_bounds_under_any_sequence() {
    let config = RigConfig::default();
    let mut driver = FrameDriver::new(config);

    // Alternating bursts of maximal deltas in both directions.
    for burst in 0..40 {
        let value = if burst % 2 == 0 { 1.0 } else { -1.0 };
        for _ in 0..500 {
            driver.on_axis("Camera_Zoom", value);
            let zoom = driver.input().target_zoom;
            assert!(zoom >= config.zoom_min, "zoom {} below min", zoom);
            assert!(zoom <= config.zoom_max, "zoom {} above max", zoom);
        }
    }
}

#[test]
fn test_arm_length_converges_without_overshoot() {
    let config = RigConfig::default();
    let mut driver = FrameDriver::new(config);
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    for _ in 0..1000 {
        driver.on_axis("Camera_Zoom", 1.0);
    }
    let target = driver.input().target_zoom;
    assert_eq!(target, config.zoom_max);

    let mut prev_dist = (target - driver.rig().arm_length()).abs();
    for _ in 0..2000 {
        let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
        let dist = (target - frame.arm_length).abs();
        assert!(frame.arm_length <= target, "arm length overshot target");
        assert!(dist <= prev_dist, "arm length diverged from target");
        prev_dist = dist;
    }
    assert!(prev_dist < 0.1);
}

// ============================================================================
// Degenerate time
// ============================================================================

#[test]
fn test_zero_dt_changes_no_smoothed_state() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 50.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    // Put the rig somewhere non-trivial first.
    driver.on_axis("Movement_Forward", 1.0);
    for _ in 0..30 {
        driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    }

    let before = driver.rig().position();
    let arm_before = driver.rig().arm_length();
    let pitch_before = driver.rig().pitch();

    let frame = driver.on_tick(0.0, Some(&world), &mut anchor, &mut window);

    assert_eq!(frame.position, before);
    assert_eq!(frame.arm_length, arm_before);
    assert_eq!(frame.pitch, pitch_before);
}

// ============================================================================
// Ground following
// ============================================================================

#[test]
fn test_probe_miss_keeps_smoothed_height_exactly() {
    init_logging();
    let mut driver = FrameDriver::new(RigConfig::default());
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    driver.rig_mut().set_position(Vec3::new(0.0, 77.5, 0.0));
    driver.on_axis("Movement_Forward", 1.0);

    for _ in 0..100 {
        let frame = driver.on_tick(DT, None, &mut anchor, &mut window);
        assert!(frame.probe_missed);
        assert_eq!(frame.position.y, 77.5);
    }
    // The pan itself still happened.
    assert!(driver.rig().position().z < 0.0);
}

#[test]
fn test_probe_hit_converges_to_surface_plus_clearance() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 100.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    driver.rig_mut().set_mesh_top(50.0);

    for _ in 0..5000 {
        driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    }

    // impact 100 + mesh top 50 + padding 50 = 200
    assert!((driver.rig().position().y - 200.0).abs() < 0.1);
}

#[test]
fn test_hole_then_ground_recovers() {
    init_logging();
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 20.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    // Start over a hole: height holds at the initial value.
    driver.rig_mut().set_position(Vec3::new(0.0, 500.0, 0.0));
    for _ in 0..50 {
        let frame = driver.on_tick(DT, None, &mut anchor, &mut window);
        assert_eq!(frame.position.y, 500.0);
    }

    // Ground reappears: the rig descends toward clearance height.
    for _ in 0..5000 {
        driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    }
    assert!((driver.rig().position().y - 70.0).abs() < 0.1);
}

#[test]
fn test_scaled_probe_extents() {
    init_logging();
    // Probe scaled down tenfold for a small world.
    let probe = GroundProbe::with_extents(300.0, 100.0);
    let mut driver = FrameDriver::with_parts(
        RigConfig::default(),
        td_camera_engine::AxisBindings::new(),
        probe,
    );
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    // Surface at 500 is above the scaled probe's reach from y=0.
    let world = FlatWorld { height: 500.0 };
    let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    assert!(frame.probe_missed);
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_pitch_clamped_across_frames() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    driver.on_axis("Camera_Pitch", 1.0);
    for _ in 0..20_000 {
        let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
        assert!(frame.pitch >= PITCH_MIN);
        assert!(frame.pitch <= PITCH_MAX);
    }
    assert!((driver.rig().pitch() - PITCH_MAX).abs() < 1e-5);
}

#[test]
fn test_free_look_freezes_then_resumes_orientation() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    driver.on_axis("Camera_Yaw", 1.0);
    driver.on_axis("Camera_Pitch", -1.0);

    // Establish some motion first.
    driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    let yaw_at_press = driver.rig().yaw();
    let pitch_at_press = driver.rig().pitch();

    driver.on_edge("Camera_RotateMouseShow", EdgeKind::Pressed);
    for _ in 0..100 {
        let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
        assert_eq!(frame.yaw, yaw_at_press);
        assert_eq!(frame.pitch, pitch_at_press);
    }

    driver.on_edge("Camera_RotateMouseShow", EdgeKind::Released);
    let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    assert!(frame.yaw > yaw_at_press);
    assert!(frame.pitch < pitch_at_press);
}

#[test]
fn test_rotation_requires_focus_controller() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = Anchor::default(); // focus = false
    let mut window = Window::default();

    driver.on_axis("Camera_Yaw", 1.0);
    let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    assert_eq!(frame.yaw, 0.0);
}

// ============================================================================
// Cursor / input mode
// ============================================================================

#[test]
fn test_cursor_follows_free_look_flag() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    driver.on_edge("Camera_RotateMouseShow", EdgeKind::Pressed);
    driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    assert!(!window.cursor_visible);
    assert_eq!(window.input_mode, InputMode::GameOnly);

    driver.on_edge("Camera_RotateMouseShow", EdgeKind::Released);
    driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
    assert!(window.cursor_visible);
    assert_eq!(window.input_mode, InputMode::GameAndUi);
}

#[test]
fn test_cursor_reapplied_every_frame() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    for _ in 0..5 {
        driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
        assert!(window.cursor_visible);
        assert_eq!(window.input_mode, InputMode::GameAndUi);
    }
}

// ============================================================================
// Driver plumbing
// ============================================================================

#[test]
fn test_outbound_calls_exactly_once_per_frame() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    for expected in 1..=10 {
        driver.on_tick(DT, Some(&world), &mut anchor, &mut window);
        assert_eq!(anchor.call_counts, (expected, expected, expected));
    }
}

#[test]
fn test_host_mirrors_rig_state() {
    let mut driver = FrameDriver::new(RigConfig::default());
    let world = FlatWorld { height: 0.0 };
    let mut anchor = focused_anchor();
    let mut window = Window::default();

    driver.on_axis("Movement_Right", 1.0);
    driver.on_axis("Camera_Yaw", 1.0);
    let frame = driver.on_tick(DT, Some(&world), &mut anchor, &mut window);

    assert_eq!(anchor.position, frame.position);
    assert_eq!(anchor.arm_length, frame.arm_length);
    assert_eq!(anchor.rotation, (frame.pitch, frame.yaw, 0.0));
}

#[test]
fn test_rebound_axis_name() {
    let mut driver = FrameDriver::new(RigConfig::default());
    driver
        .bindings_mut()
        .bind_axis("Pan_Forward", td_camera_engine::input::AxisAction::MoveForward);

    driver.on_axis("Movement_Forward", 1.0); // old name, now unbound
    assert_eq!(driver.input().forward_axis, 0.0);

    driver.on_axis("Pan_Forward", 1.0);
    assert_eq!(driver.input().forward_axis, 1.0);
}

#[test]
fn test_config_from_json_drives_the_rig() {
    let config = RigConfig::from_json(
        r#"{"zoom_min": 100.0, "zoom_default": 300.0, "zoom_max": 900.0}"#,
    )
    .unwrap();
    let driver = FrameDriver::new(config);
    assert_eq!(driver.input().target_zoom, 300.0);
    assert_eq!(driver.rig().arm_length(), 300.0);
}
