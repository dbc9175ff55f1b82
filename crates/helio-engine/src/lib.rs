pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape, MeshColor};
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, SceneClock};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{MeshInstance, MeshBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{SceneManifest, BodyDescriptor, RingDescriptor, ManifestError};
pub use assets::registry::BodyRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_mesh_buffer;

// Extensions — decoupled optional systems
pub use extensions::{
    lerp, lerp_vec3,
    TransformGraph, LocalTransform,
    FollowRig, FollowMode, OverviewPose, FollowParams,
};
