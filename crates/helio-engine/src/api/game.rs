use crate::core::scene::Scene;
use crate::api::types::{EntityId, GameEvent};
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in pixels (sets the camera aspect ratio).
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub z_near: f32,
    /// Far clip plane distance.
    pub z_far: f32,
    /// Maximum number of mesh instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_degrees: 60.0,
            z_near: 0.1,
            z_far: 5000.0,
            max_instances: 512,
            max_events: 32,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-tick update. Advance positions, move the camera, emit events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional hook for a host-supplied scene manifest (JSON).
    /// Called when the host pushes a new body catalog at runtime.
    fn load_manifest(&mut self, _json: &str, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a context with the camera configured from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut ctx = Self::new();
        ctx.camera = Camera3D::new(
            config.fov_y_degrees.to_radians(),
            config.viewport_width / config.viewport_height,
            config.z_near,
            config.z_far,
        );
        ctx
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
