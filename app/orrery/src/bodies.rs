/// Body catalog — the built-in planet set plus starfield and belt parameters.
///
/// Distances and speeds are exaggerated for readability (to scale, the outer
/// planets would be invisible and motionless). The host may replace the
/// planet set with its own manifest at runtime.

use helio_engine::{BodyDescriptor, RingDescriptor, SceneManifest};

/// Planet index constants (manifest order — UI buttons index by these).
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 14.0;
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.85, 0.4);
pub const SUN_EMISSIVE: f32 = 3.0;

// ── Orbit rings ──────────────────────────────────────────────────────

/// Half-width of each painted orbit path.
pub const ORBIT_RING_HALF_WIDTH: f32 = 0.25;
pub const ORBIT_RING_COLOR: (f32, f32, f32) = (0.5, 0.5, 0.6);
pub const ORBIT_RING_ALPHA: f32 = 0.25;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 400;
/// Distance of the background star shell from the origin.
pub const STAR_SHELL_RADIUS: f32 = 1400.0;
pub const STAR_RADIUS_MIN: f32 = 0.6;
pub const STAR_RADIUS_MAX: f32 = 1.8;

// ── Asteroid belt ────────────────────────────────────────────────────

pub const BELT_COUNT: usize = 120;
/// Belt radius range, between Mars and Jupiter.
pub const BELT_RADIUS_MIN: f32 = 84.0;
pub const BELT_RADIUS_MAX: f32 = 96.0;
pub const BELT_ROCK_RADIUS_MAX: f32 = 0.9;
/// Vertical scatter of belt rocks.
pub const BELT_THICKNESS: f32 = 3.0;
/// Per-tick spin of the belt pivot, in radians.
pub const BELT_SPIN_PER_TICK: f32 = 0.0004;

/// The built-in planet catalog.
pub fn default_manifest() -> SceneManifest {
    SceneManifest {
        bodies: vec![
            BodyDescriptor {
                name: "mercury".into(),
                color: [0.60, 0.55, 0.50],
                radius: 2.0,
                orbit_distance: 28.0,
                angular_speed: 0.80,
                spin_speed: 0.004,
                ring: None,
            },
            BodyDescriptor {
                name: "venus".into(),
                color: [0.90, 0.75, 0.40],
                radius: 3.2,
                orbit_distance: 44.0,
                angular_speed: 0.55,
                spin_speed: 0.002,
                ring: None,
            },
            BodyDescriptor {
                name: "earth".into(),
                color: [0.20, 0.40, 0.80],
                radius: 3.5,
                orbit_distance: 62.0,
                angular_speed: 0.40,
                spin_speed: 0.02,
                ring: None,
            },
            BodyDescriptor {
                name: "mars".into(),
                color: [0.80, 0.30, 0.15],
                radius: 2.8,
                orbit_distance: 78.0,
                angular_speed: 0.30,
                spin_speed: 0.018,
                ring: None,
            },
            BodyDescriptor {
                name: "jupiter".into(),
                color: [0.80, 0.70, 0.50],
                radius: 9.0,
                orbit_distance: 110.0,
                angular_speed: 0.16,
                spin_speed: 0.04,
                ring: None,
            },
            BodyDescriptor {
                name: "saturn".into(),
                color: [0.85, 0.75, 0.50],
                radius: 8.0,
                orbit_distance: 138.0,
                angular_speed: 0.12,
                spin_speed: 0.036,
                ring: Some(RingDescriptor {
                    inner: 10.0,
                    outer: 16.0,
                    color: [0.80, 0.70, 0.50],
                    alpha: 0.6,
                }),
            },
            BodyDescriptor {
                name: "uranus".into(),
                color: [0.50, 0.75, 0.85],
                radius: 5.5,
                orbit_distance: 170.0,
                angular_speed: 0.08,
                spin_speed: 0.028,
                ring: None,
            },
            BodyDescriptor {
                name: "neptune".into(),
                color: [0.25, 0.35, 0.80],
                radius: 5.2,
                orbit_distance: 200.0,
                angular_speed: 0.06,
                spin_speed: 0.026,
                ring: None,
            },
        ],
    }
}

/// Deterministic hash for star/belt scattering (no external rand crate).
pub fn scatter_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Hash-derived fraction in [0, 1).
pub fn scatter_frac(seed: u32) -> f32 {
    (scatter_hash(seed) as f64 / u32::MAX as f64) as f32
}
