//! Ground Probe Module
//!
//! Wraps the vertical ray query that keeps the camera anchored to terrain
//! height. The actual intersection test lives behind the [`RaycastWorld`]
//! trait so the rig stays decoupled from any specific collision backend;
//! the probe only decides where the ray goes and what a miss means.

use glam::Vec3;

/// A single ray intersection against world geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    /// World-space impact point
    pub point: Vec3,
}

impl GroundHit {
    /// Create a hit at the given impact point.
    pub fn new(point: Vec3) -> Self {
        Self { point }
    }
}

/// Opaque identifier for a host-side actor.
///
/// The probe passes this through to the oracle so the camera's own
/// collision body never blocks its traces. The crate does not interpret
/// the value; it is whatever handle the host's collision backend keys
/// actors by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(u64);

impl ActorId {
    /// Wrap a host actor handle.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The wrapped host handle.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Ray-intersection oracle supplied by the host.
///
/// Implementors query their collision backend for blocking geometry along
/// the segment from `start` to `end`. When `ignore` is `Some`, the
/// implementor must exclude that actor's geometry from the query - this is
/// how the probe keeps the rig's own collision body from blocking its
/// traces. Queries are synchronous and read-only.
pub trait RaycastWorld {
    /// Return the first (closest to `start`) blocking hit along the segment,
    /// or `None` if no geometry intersects it.
    fn raycast(&self, start: Vec3, end: Vec3, ignore: Option<ActorId>) -> Option<GroundHit>;

    /// Return every blocking hit along the segment, ordered from `start`.
    ///
    /// Backends without multi-hit support can fall back to the single-hit
    /// query, which this default does.
    fn raycast_multi(&self, start: Vec3, end: Vec3, ignore: Option<ActorId>) -> Vec<GroundHit> {
        self.raycast(start, end, ignore).into_iter().collect()
    }
}

/// Vertical ray probe for ground following.
///
/// Constructs a segment reaching `up_extent` above and `down_extent` below
/// the probe origin and asks the oracle for the topmost surface along it.
/// Tracing top-down means the first hit is the highest geometry under the
/// camera, so stacked terrain (bridges, roofs) resolves to its top surface.
#[derive(Clone, Copy, Debug)]
pub struct GroundProbe {
    /// Distance the segment reaches above the probe origin
    pub up_extent: f32,
    /// Distance the segment reaches below the probe origin
    pub down_extent: f32,
    /// Actor excluded from every query, normally the rig's own body
    pub ignored_actor: Option<ActorId>,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            up_extent: 3000.0,
            down_extent: 1000.0,
            ignored_actor: None,
        }
    }
}

impl GroundProbe {
    /// Create a probe with the stock extents (3000 up, 1000 down).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe with custom extents, e.g. for worlds at another scale.
    pub fn with_extents(up_extent: f32, down_extent: f32) -> Self {
        Self {
            up_extent,
            down_extent,
            ..Self::default()
        }
    }

    /// Exclude an actor from every query this probe makes.
    ///
    /// Hosts whose collision backend would otherwise see the rig's own
    /// collision body pass its handle here.
    pub fn ignoring(mut self, actor: ActorId) -> Self {
        self.ignored_actor = Some(actor);
        self
    }

    /// Probe straight down through `origin` for the highest surface.
    ///
    /// Returns `None` when no geometry intersects the segment (over a hole,
    /// outside level bounds) or when no oracle is available. Both are
    /// expected outcomes the caller handles by holding its last height;
    /// neither aborts the frame.
    pub fn probe(&self, world: Option<&dyn RaycastWorld>, origin: Vec3) -> Option<GroundHit> {
        let Some(world) = world else {
            log::warn!("ground probe skipped: no raycast backend available");
            return None;
        };

        let start = origin + Vec3::Y * self.up_extent;
        let end = origin - Vec3::Y * self.down_extent;
        world.raycast(start, end, self.ignored_actor)
    }

    /// Probe along an arbitrary segment, collecting every hit.
    ///
    /// Not part of the per-frame pipeline; hosts use it for horizontal
    /// sweeps such as picking everything between the camera and its anchor.
    pub fn probe_multi(
        &self,
        world: Option<&dyn RaycastWorld>,
        start: Vec3,
        end: Vec3,
    ) -> Vec<GroundHit> {
        let Some(world) = world else {
            log::warn!("ground probe skipped: no raycast backend available");
            return Vec::new();
        };

        world.raycast_multi(start, end, self.ignored_actor)
    }
}
