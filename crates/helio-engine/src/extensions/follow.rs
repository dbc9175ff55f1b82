// extensions/follow.rs
//
// Camera follow rig — a two-state machine blending the camera toward either
// a fixed overview pose or an offset pose relative to a followed entity.
// Decoupled from Scene: callers resolve the followed entity's position and
// pass it in each tick.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::extensions::easing::lerp_vec3;
use crate::renderer::camera::Camera3D;

/// Which pose the camera is blending toward. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowMode {
    /// Default pose showing the whole scene.
    #[default]
    Overview,
    /// Tracking a single selected entity.
    Following(EntityId),
}

/// The fixed overview pose and its per-tick blend fraction.
#[derive(Debug, Clone, Copy)]
pub struct OverviewPose {
    pub position: Vec3,
    pub target: Vec3,
    /// Fraction of the remaining distance closed per tick.
    pub blend: f32,
}

impl Default for OverviewPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 80.0, 200.0),
            target: Vec3::ZERO,
            blend: 0.05,
        }
    }
}

/// Follow-pose parameters: camera offset from the tracked entity and the
/// per-tick blend fractions for position and look-target.
#[derive(Debug, Clone, Copy)]
pub struct FollowParams {
    /// Camera offset from the followed entity's position.
    pub offset: Vec3,
    /// Fraction per tick for the camera position.
    pub position_blend: f32,
    /// Fraction per tick for the look-target.
    pub target_blend: f32,
}

impl Default for FollowParams {
    fn default() -> Self {
        Self {
            offset: Vec3::new(50.0, 30.0, 70.0),
            position_blend: 0.02,
            target_blend: 0.05,
        }
    }
}

/// Camera follow rig.
///
/// Click-driven: `toggle` is evaluated once per click and flips between
/// Overview and Following. There is no timeout and no cancellation path —
/// the mode only changes on the next toggle.
#[derive(Debug, Default)]
pub struct FollowRig {
    mode: FollowMode,
    pub overview: OverviewPose,
    pub params: FollowParams,
}

impl FollowRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overview(mut self, overview: OverviewPose) -> Self {
        self.overview = overview;
        self
    }

    pub fn with_params(mut self, params: FollowParams) -> Self {
        self.params = params;
        self
    }

    /// Current mode.
    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    /// Toggle following of `id`.
    ///
    /// Following(id) when not already following it — including when following
    /// a different entity (the switch is direct, never via Overview).
    /// Toggling the currently-followed entity returns to Overview.
    /// Returns the new mode.
    pub fn toggle(&mut self, id: EntityId) -> FollowMode {
        self.mode = if self.mode == FollowMode::Following(id) {
            FollowMode::Overview
        } else {
            FollowMode::Following(id)
        };
        self.mode
    }

    /// Drop back to Overview unconditionally.
    pub fn clear(&mut self) {
        self.mode = FollowMode::Overview;
    }

    /// Advance the camera one tick toward the active pose.
    ///
    /// `target` is the followed entity's world position, or None when the
    /// entity cannot be resolved — in which case the overview blend applies
    /// (covers Overview mode and a despawned follow target alike).
    pub fn update(&mut self, camera: &mut Camera3D, target: Option<Vec3>) {
        match (self.mode, target) {
            (FollowMode::Following(_), Some(pos)) => {
                camera.position =
                    lerp_vec3(camera.position, pos + self.params.offset, self.params.position_blend);
                camera.target = lerp_vec3(camera.target, pos, self.params.target_blend);
            }
            _ => {
                camera.position =
                    lerp_vec3(camera.position, self.overview.position, self.overview.blend);
                camera.target = lerp_vec3(camera.target, self.overview.target, self.overview.blend);
            }
        }
    }
}
