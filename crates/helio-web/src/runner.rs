use helio_engine::{
    build_mesh_buffer, CameraUniform, EngineContext, FixedTimestep, Game, GameConfig, InputEvent,
    InputQueue, MeshBuffer, ProtocolLayout,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene (e.g., `orrery`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    mesh_buffer: MeshBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Camera uniform snapshot, refreshed after each tick for host reads.
    camera_uniform: CameraUniform,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let mesh_buffer = MeshBuffer::with_capacity(config.max_instances);
        let ctx = EngineContext::from_config(&config);
        let camera_uniform = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            mesh_buffer,
            timestep,
            config,
            layout,
            initialized: false,
            camera_uniform,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.game.init(&mut self.ctx);
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Hand a host-supplied scene manifest (JSON) to the game.
    pub fn load_manifest(&mut self, json: &str) {
        self.game.load_manifest(json, &mut self.ctx);
    }

    /// Run one frame tick: update the scene, rebuild buffers, refresh the camera.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        // Build the instance buffer from entities
        build_mesh_buffer(self.ctx.scene.iter(), &mut self.mesh_buffer);

        // Snapshot the camera for host reads
        self.camera_uniform = self.ctx.camera.uniform();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.mesh_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.mesh_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.config.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn camera_floats(&self) -> u32 {
        CameraUniform::FLOATS as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helio_engine::{Entity, MeshColor, MeshComponent};

    /// Minimal scene: one sphere that steps +1 on X per tick.
    struct Slider {
        id: Option<helio_engine::EntityId>,
    }

    impl Game for Slider {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id).with_mesh(MeshComponent::sphere(1.0, MeshColor::default())),
            );
            self.id = Some(id);
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            if let Some(id) = self.id {
                if let Some(e) = ctx.scene.get_mut(id) {
                    e.pos.x += 1.0;
                }
            }
        }
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = GameRunner::new(Slider { id: None });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn tick_runs_fixed_steps_and_rebuilds_buffer() {
        let mut runner = GameRunner::new(Slider { id: None });
        runner.init();

        // Two frames' worth of time → two update steps
        runner.tick(2.0 / 60.0);
        assert_eq!(runner.instance_count(), 1);

        let floats =
            unsafe { std::slice::from_raw_parts(runner.instances_ptr(), 1) };
        assert!((floats[0] - 2.0).abs() < 1e-6, "x = {}", floats[0]);
    }

    #[test]
    fn camera_uniform_is_exposed() {
        let mut runner = GameRunner::new(Slider { id: None });
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.camera_floats(), 20);
        let floats = unsafe { std::slice::from_raw_parts(runner.camera_ptr(), 20) };
        // w component of the camera position is always 1
        assert_eq!(floats[19], 1.0);
    }
}
