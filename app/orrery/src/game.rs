/// Orrery — animated solar-system scene with camera-follow controls.
///
/// Planets ride circular orbits recomputed from the scene clock each tick;
/// the camera blends toward either a fixed overview pose or a selected
/// planet. Selection arrives as custom events from the host page's buttons.

use helio_engine::*;
use glam::Vec3;

use crate::bodies;
use crate::orbit;

/// Fixed update rate; matches GameConfig::fixed_dt.
const FIXED_DT: f32 = 1.0 / 60.0;

// ── Custom event kinds from the host page ────────────────────────────

/// Planet button click (a = body index in manifest order).
const SELECT_BODY: u32 = 1;
/// Viewport resize (a = width, b = height).
const RESIZE: u32 = 99;

// ── Scene event kinds to the host page ───────────────────────────────

/// Current selection (a = body index, or -1 in overview).
const EVENT_SELECTION: f32 = 1.0;
/// Scene clock (a = elapsed seconds).
const EVENT_TIME: f32 = 2.0;

pub struct Orrery {
    /// Body catalog (built-in, replaceable via manifest).
    manifest: SceneManifest,
    /// Elapsed scene time; all orbit positions derive from it.
    clock: SceneClock,
    /// Camera state machine.
    rig: FollowRig,
    /// Owning parent/child tree: planets under the sun pivot, rings under
    /// their planet, belt rocks under the belt pivot.
    graph: TransformGraph,
    /// Body name → entity lookup for selection.
    registry: BodyRegistry,

    sun_id: Option<EntityId>,
    belt_pivot: Option<EntityId>,
    /// Planet entities in manifest order.
    planet_ids: Vec<EntityId>,
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            manifest: bodies::default_manifest(),
            clock: SceneClock::new(),
            rig: FollowRig::new(),
            graph: TransformGraph::new(),
            registry: BodyRegistry::new(),
            sun_id: None,
            belt_pivot: None,
            planet_ids: Vec::new(),
        }
    }

    /// Spawn the full scene: sun, planets, orbit paths, Saturn's ring,
    /// asteroid belt, starfield. Also called on manifest reload.
    fn build_scene(&mut self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        self.graph.clear();
        self.registry.clear();
        self.planet_ids.clear();

        let t = self.clock.elapsed();

        // ── Sun ──────────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id).with_tag("sun").with_mesh(
                MeshComponent::sphere(
                    bodies::SUN_RADIUS,
                    MeshColor::new(bodies::SUN_COLOR.0, bodies::SUN_COLOR.1, bodies::SUN_COLOR.2),
                )
                .with_emissive(bodies::SUN_EMISSIVE),
            ),
        );
        self.graph.register(sun_id);
        self.sun_id = Some(sun_id);

        // ── Planets, orbit paths, body rings ─────────────────────────
        for body in &self.manifest.bodies {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id).with_tag(body.name.clone()).with_mesh(
                    MeshComponent::sphere(
                        body.radius,
                        MeshColor::new(body.color[0], body.color[1], body.color[2]),
                    )
                    .with_shininess(16.0),
                ),
            );
            self.graph.register_with(
                id,
                LocalTransform::new().with_offset(orbit::orbit_position(
                    t,
                    body.angular_speed,
                    body.orbit_distance,
                )),
            );
            self.graph.set_parent(id, Some(sun_id));
            self.registry.insert(body.name.clone(), id);
            self.planet_ids.push(id);

            if body.orbit_distance > 0.0 {
                let path_id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(path_id).with_tag("orbit-path").with_mesh(
                        MeshComponent::ring(
                            body.orbit_distance - bodies::ORBIT_RING_HALF_WIDTH,
                            body.orbit_distance + bodies::ORBIT_RING_HALF_WIDTH,
                            MeshColor::new(
                                bodies::ORBIT_RING_COLOR.0,
                                bodies::ORBIT_RING_COLOR.1,
                                bodies::ORBIT_RING_COLOR.2,
                            ),
                        )
                        .with_alpha(bodies::ORBIT_RING_ALPHA),
                    ),
                );
            }

            if let Some(ring) = &body.ring {
                let ring_id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(ring_id).with_tag(format!("{}-ring", body.name)).with_mesh(
                        MeshComponent::ring(
                            ring.inner,
                            ring.outer,
                            MeshColor::new(ring.color[0], ring.color[1], ring.color[2]),
                        )
                        .with_alpha(ring.alpha),
                    ),
                );
                // Ring rides its planet
                self.graph.register(ring_id);
                self.graph.set_parent(ring_id, Some(id));
            }
        }

        // ── Asteroid belt ────────────────────────────────────────────
        let pivot = ctx.next_id();
        ctx.scene.spawn(Entity::new(pivot).with_tag("belt"));
        self.graph.register(pivot);
        self.belt_pivot = Some(pivot);

        for i in 0..bodies::BELT_COUNT {
            let angle = bodies::scatter_frac(i as u32 * 7 + 31) * std::f32::consts::TAU;
            let r = bodies::BELT_RADIUS_MIN
                + bodies::scatter_frac(i as u32 * 13 + 97)
                    * (bodies::BELT_RADIUS_MAX - bodies::BELT_RADIUS_MIN);
            let y = (bodies::scatter_frac(i as u32 * 19 + 151) - 0.5) * bodies::BELT_THICKNESS;
            let rock_r = 0.3
                + bodies::scatter_frac(i as u32 * 23 + 211)
                    * (bodies::BELT_ROCK_RADIUS_MAX - 0.3);
            let grey = 0.3 + bodies::scatter_frac(i as u32 * 29 + 277) * 0.3;

            let rock_id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(rock_id).with_tag("asteroid").with_mesh(
                    MeshComponent::sphere(rock_r, MeshColor::new(grey, grey * 0.95, grey * 0.9))
                        .with_shininess(8.0),
                ),
            );
            self.graph.register_with(
                rock_id,
                LocalTransform::new().with_offset(orbit::circle_point(angle, r) + Vec3::Y * y),
            );
            self.graph.set_parent(rock_id, Some(pivot));
        }

        // ── Starfield ────────────────────────────────────────────────
        // Static far shell; not part of the transform graph.
        for i in 0..bodies::STAR_COUNT {
            let theta = bodies::scatter_frac(i as u32 * 37 + 11) * std::f32::consts::TAU;
            let cos_phi = bodies::scatter_frac(i as u32 * 41 + 59) * 2.0 - 1.0;
            let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
            let pos = Vec3::new(
                sin_phi * theta.cos(),
                cos_phi,
                sin_phi * theta.sin(),
            ) * bodies::STAR_SHELL_RADIUS;
            let star_r = bodies::STAR_RADIUS_MIN
                + bodies::scatter_frac(i as u32 * 43 + 101)
                    * (bodies::STAR_RADIUS_MAX - bodies::STAR_RADIUS_MIN);

            let star_id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(star_id).with_tag("star").with_pos(pos).with_mesh(
                    MeshComponent::sphere(star_r, MeshColor::new(0.95, 0.95, 1.0))
                        .with_emissive(1.5),
                ),
            );
        }

        // Place everything at the current clock
        self.graph.propagate(&mut ctx.scene);
    }

    /// Planet button click: index → name → entity. Anything that fails to
    /// resolve is silently ignored.
    fn handle_select(&mut self, index: i32) {
        if index < 0 {
            return;
        }
        let Some(body) = self.manifest.bodies.get(index as usize) else {
            return;
        };
        let Some(id) = self.registry.get(&body.name) else {
            return;
        };
        self.rig.toggle(id);
    }

    /// Index of the currently-followed body in manifest order, or -1.
    fn selection_index(&self) -> f32 {
        match self.rig.mode() {
            FollowMode::Following(id) => self
                .planet_ids
                .iter()
                .position(|&p| p == id)
                .map(|i| i as f32)
                .unwrap_or(-1.0),
            FollowMode::Overview => -1.0,
        }
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_degrees: 60.0,
            z_near: 0.1,
            z_far: 5000.0,
            max_instances: 1024,
            max_events: 32,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.build_scene(ctx);
        ctx.camera.look_at(self.rig.overview.position, self.rig.overview.target);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            if let InputEvent::Custom { kind, a, b, .. } = event {
                match *kind {
                    SELECT_BODY => self.handle_select(*a as i32),
                    RESIZE => ctx.camera.resize(*a, *b),
                    _ => {}
                }
            }
        }

        // ── Advance the clock; re-derive every orbit position from it ─
        let t = self.clock.advance(FIXED_DT);

        for (i, body) in self.manifest.bodies.iter().enumerate() {
            let Some(local) = self.graph.get_local_mut(self.planet_ids[i]) else {
                continue;
            };
            if body.orbit_distance > 0.0 {
                local.offset = orbit::orbit_position(t, body.angular_speed, body.orbit_distance);
            }
            // Axial spin accumulates per tick (decorative, frame-rate coupled)
            local.spin += body.spin_speed;
        }

        if let Some(pivot) = self.belt_pivot {
            if let Some(local) = self.graph.get_local_mut(pivot) {
                local.spin += bodies::BELT_SPIN_PER_TICK;
            }
        }

        self.graph.propagate(&mut ctx.scene);

        // ── Camera ───────────────────────────────────────────────────
        let target = match self.rig.mode() {
            FollowMode::Following(id) => ctx.scene.get(id).map(|e| e.pos),
            FollowMode::Overview => None,
        };
        self.rig.update(&mut ctx.camera, target);

        // ── Scene events for the host UI ─────────────────────────────
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: self.selection_index(),
            b: 0.0,
            c: 0.0,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_TIME,
            a: t,
            b: 0.0,
            c: 0.0,
        });
    }

    fn load_manifest(&mut self, json: &str, ctx: &mut EngineContext) {
        match SceneManifest::from_json(json) {
            Ok(manifest) => {
                self.manifest = manifest;
                self.rig.clear();
                self.build_scene(ctx);
                log::info!("orrery: manifest loaded, {} bodies", self.manifest.bodies.len());
            }
            Err(err) => {
                log::warn!("orrery: manifest rejected: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, MARS, PLANET_COUNT};

    fn setup() -> (Orrery, EngineContext) {
        let mut orrery = Orrery::new();
        let mut ctx = EngineContext::from_config(&orrery.config());
        orrery.init(&mut ctx);
        (orrery, ctx)
    }

    fn tick(orrery: &mut Orrery, ctx: &mut EngineContext) {
        ctx.clear_frame_data();
        let input = InputQueue::new();
        orrery.update(ctx, &input);
    }

    fn click(orrery: &mut Orrery, ctx: &mut EngineContext, index: i32) {
        ctx.clear_frame_data();
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: SELECT_BODY, a: index as f32, b: 0.0, c: 0.0 });
        orrery.update(ctx, &input);
    }

    #[test]
    fn init_spawns_full_scene() {
        let (orrery, ctx) = setup();
        assert!(ctx.scene.find_by_tag("sun").is_some());
        assert_eq!(orrery.planet_ids.len(), PLANET_COUNT);
        assert_eq!(ctx.scene.find_all_by_tag("orbit-path").len(), PLANET_COUNT);
        assert_eq!(ctx.scene.find_all_by_tag("asteroid").len(), bodies::BELT_COUNT);
        assert_eq!(ctx.scene.find_all_by_tag("star").len(), bodies::STAR_COUNT);
        assert!(ctx.scene.find_by_tag("saturn-ring").is_some());
    }

    #[test]
    fn planets_start_on_positive_x_axis() {
        let (orrery, ctx) = setup();
        for (i, body) in orrery.manifest.bodies.iter().enumerate() {
            let planet = ctx.scene.get(orrery.planet_ids[i]).unwrap();
            assert!((planet.pos.x - body.orbit_distance).abs() < 1e-3, "{}", body.name);
            assert!(planet.pos.y.abs() < 1e-3);
            assert!(planet.pos.z.abs() < 1e-3, "{}: z = {}", body.name, planet.pos.z);
        }
    }

    #[test]
    fn orbit_radius_is_preserved_over_time() {
        let (mut orrery, mut ctx) = setup();
        for _ in 0..500 {
            tick(&mut orrery, &mut ctx);
        }
        for (i, body) in orrery.manifest.bodies.iter().enumerate() {
            let planet = ctx.scene.get(orrery.planet_ids[i]).unwrap();
            assert!(
                (planet.pos.length() - body.orbit_distance).abs() < 1e-2,
                "{}: |pos| = {}",
                body.name,
                planet.pos.length()
            );
        }
    }

    #[test]
    fn saturn_ring_tracks_saturn() {
        let (mut orrery, mut ctx) = setup();
        for _ in 0..200 {
            tick(&mut orrery, &mut ctx);
        }
        let saturn = ctx.scene.find_by_tag("saturn").unwrap().pos;
        let ring = ctx.scene.find_by_tag("saturn-ring").unwrap().pos;
        assert!(saturn.distance(ring) < 1e-3);
    }

    #[test]
    fn clicking_same_planet_twice_toggles_back_to_overview() {
        let (mut orrery, mut ctx) = setup();
        let earth = orrery.planet_ids[EARTH];

        click(&mut orrery, &mut ctx, EARTH as i32);
        assert_eq!(orrery.rig.mode(), FollowMode::Following(earth));

        click(&mut orrery, &mut ctx, EARTH as i32);
        assert_eq!(orrery.rig.mode(), FollowMode::Overview);

        // Identical pair again
        click(&mut orrery, &mut ctx, EARTH as i32);
        assert_eq!(orrery.rig.mode(), FollowMode::Following(earth));
    }

    #[test]
    fn switching_planets_goes_direct_never_via_overview() {
        let (mut orrery, mut ctx) = setup();

        click(&mut orrery, &mut ctx, EARTH as i32);
        click(&mut orrery, &mut ctx, MARS as i32);
        assert_eq!(orrery.rig.mode(), FollowMode::Following(orrery.planet_ids[MARS]));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let (mut orrery, mut ctx) = setup();

        click(&mut orrery, &mut ctx, 99);
        assert_eq!(orrery.rig.mode(), FollowMode::Overview);

        click(&mut orrery, &mut ctx, EARTH as i32);
        click(&mut orrery, &mut ctx, -3);
        assert_eq!(orrery.rig.mode(), FollowMode::Following(orrery.planet_ids[EARTH]));
    }

    #[test]
    fn camera_settles_near_followed_planet() {
        let (mut orrery, mut ctx) = setup();
        click(&mut orrery, &mut ctx, EARTH as i32);

        for _ in 0..2000 {
            tick(&mut orrery, &mut ctx);
        }

        let earth = ctx.scene.get(orrery.planet_ids[EARTH]).unwrap().pos;
        // Blends chase a moving target, so allow a steady-state lag
        assert!(
            ctx.camera.target.distance(earth) < 20.0,
            "look-target lag: {}",
            ctx.camera.target.distance(earth)
        );
        let follow_pose = earth + orrery.rig.params.offset;
        assert!(
            ctx.camera.position.distance(follow_pose) < 60.0,
            "position lag: {}",
            ctx.camera.position.distance(follow_pose)
        );
    }

    #[test]
    fn overview_camera_returns_to_default_pose() {
        let (mut orrery, mut ctx) = setup();
        click(&mut orrery, &mut ctx, EARTH as i32);
        for _ in 0..300 {
            tick(&mut orrery, &mut ctx);
        }
        click(&mut orrery, &mut ctx, EARTH as i32);
        for _ in 0..800 {
            tick(&mut orrery, &mut ctx);
        }
        assert!(ctx.camera.position.distance(orrery.rig.overview.position) < 0.5);
        assert!(ctx.camera.target.distance(orrery.rig.overview.target) < 0.5);
    }

    #[test]
    fn resize_event_updates_projection_only() {
        let (mut orrery, mut ctx) = setup();
        let pos = ctx.camera.position;

        ctx.clear_frame_data();
        let mut input = InputQueue::new();
        input.push(InputEvent::Custom { kind: RESIZE, a: 1600.0, b: 800.0, c: 0.0 });
        orrery.update(&mut ctx, &input);

        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
        // Position only moved by the overview blend, not snapped by resize
        assert!(ctx.camera.position.distance(pos) < 1.0);
    }

    #[test]
    fn selection_event_reports_followed_index() {
        let (mut orrery, mut ctx) = setup();
        click(&mut orrery, &mut ctx, MARS as i32);

        let selection = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_SELECTION)
            .expect("selection event emitted");
        assert_eq!(selection.a, MARS as f32);
    }

    #[test]
    fn manifest_reload_rebuilds_scene() {
        let (mut orrery, mut ctx) = setup();
        click(&mut orrery, &mut ctx, EARTH as i32);

        let json = r#"{
            "bodies": [
                { "name": "kerbin", "color": [0.3, 0.6, 0.3], "radius": 3.0,
                  "orbit_distance": 50.0, "angular_speed": 0.5 }
            ]
        }"#;
        orrery.load_manifest(json, &mut ctx);

        assert_eq!(orrery.planet_ids.len(), 1);
        assert!(ctx.scene.find_by_tag("kerbin").is_some());
        assert!(ctx.scene.find_by_tag("earth").is_none());
        // Follow state cannot outlive the old scene
        assert_eq!(orrery.rig.mode(), FollowMode::Overview);
    }

    #[test]
    fn invalid_manifest_is_ignored() {
        let (mut orrery, mut ctx) = setup();
        let before = ctx.scene.len();

        orrery.load_manifest("{ not json", &mut ctx);
        orrery.load_manifest(
            r#"{ "bodies": [ { "name": "x", "color": [1,1,1], "radius": 1.0,
                 "orbit_distance": -2.0, "angular_speed": 0.1 } ] }"#,
            &mut ctx,
        );

        assert_eq!(ctx.scene.len(), before);
        assert_eq!(orrery.manifest.bodies.len(), PLANET_COUNT);
    }
}
