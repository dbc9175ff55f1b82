// extensions/mod.rs
//
// Optional extension modules. Decoupled from core Entity/Scene;
// scenes opt in by creating these systems.

pub mod easing;
pub mod follow;
pub mod transform;

pub use easing::{lerp, lerp_vec3};
pub use follow::{FollowMode, FollowParams, FollowRig, OverviewPose};
pub use transform::{LocalTransform, TransformGraph};
