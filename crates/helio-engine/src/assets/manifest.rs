use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scene manifest describing the body catalog for an orrery.
/// Loaded from a JSON string at runtime; the host may replace the built-in
/// catalog by pushing a new manifest through the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Orbiting bodies, in display order (UI buttons index into this list).
    pub bodies: Vec<BodyDescriptor>,
}

/// Describes a single orbiting body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Unique name (e.g., "earth"). DOM buttons reference bodies by name.
    pub name: String,
    /// Base color, linear RGB.
    pub color: [f32; 3],
    /// Visual sphere radius in world units.
    pub radius: f32,
    /// Fixed radius of the circular orbit around the origin. Must be ≥ 0;
    /// a body at distance 0 sits at the origin and never moves.
    pub orbit_distance: f32,
    /// Orbital angular speed in radians per second of scene time.
    pub angular_speed: f32,
    /// Axial spin increment per tick, in radians (frame-rate coupled).
    #[serde(default)]
    pub spin_speed: f32,
    /// Optional flat ring around the body (Saturn).
    #[serde(default)]
    pub ring: Option<RingDescriptor>,
}

/// Describes a flat ring around a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingDescriptor {
    pub inner: f32,
    pub outer: f32,
    pub color: [f32; 3],
    #[serde(default = "default_ring_alpha")]
    pub alpha: f32,
}

fn default_ring_alpha() -> f32 {
    0.6
}

/// Validation failures for a scene manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("body {name:?} has negative orbit distance {distance}")]
    NegativeOrbitDistance { name: String, distance: f32 },
    #[error("duplicate body name {0:?}")]
    DuplicateName(String),
    #[error("ring on {name:?} has inner radius {inner} >= outer radius {outer}")]
    DegenerateRing { name: String, inner: f32, outer: f32 },
}

impl SceneManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check manifest invariants: orbit distances non-negative, body names
    /// unique, rings non-degenerate.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            if body.orbit_distance < 0.0 {
                return Err(ManifestError::NegativeOrbitDistance {
                    name: body.name.clone(),
                    distance: body.orbit_distance,
                });
            }
            if seen.contains(&body.name.as_str()) {
                return Err(ManifestError::DuplicateName(body.name.clone()));
            }
            seen.push(&body.name);
            if let Some(ring) = &body.ring {
                if ring.inner >= ring.outer {
                    return Err(ManifestError::DegenerateRing {
                        name: body.name.clone(),
                        inner: ring.inner,
                        outer: ring.outer,
                    });
                }
            }
        }
        Ok(())
    }

    /// Find a body by name.
    pub fn body(&self, name: &str) -> Option<&BodyDescriptor> {
        self.bodies.iter().find(|b| b.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "bodies": [
                {
                    "name": "earth",
                    "color": [0.2, 0.4, 0.8],
                    "radius": 4.0,
                    "orbit_distance": 62.0,
                    "angular_speed": 0.4,
                    "spin_speed": 0.02
                }
            ]
        }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        assert_eq!(manifest.bodies.len(), 1);
        let earth = manifest.body("earth").unwrap();
        assert_eq!(earth.orbit_distance, 62.0);
        assert!(earth.ring.is_none());
    }

    #[test]
    fn parse_manifest_with_ring() {
        let json = r#"{
            "bodies": [
                {
                    "name": "saturn",
                    "color": [0.85, 0.75, 0.5],
                    "radius": 10.0,
                    "orbit_distance": 138.0,
                    "angular_speed": 0.05,
                    "ring": { "inner": 12.0, "outer": 20.0, "color": [0.8, 0.7, 0.5] }
                }
            ]
        }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        let ring = manifest.body("saturn").unwrap().ring.as_ref().unwrap();
        assert_eq!(ring.outer, 20.0);
        assert_eq!(ring.alpha, 0.6); // default
    }

    #[test]
    fn negative_orbit_distance_is_rejected() {
        let json = r#"{
            "bodies": [
                {
                    "name": "bad",
                    "color": [1.0, 1.0, 1.0],
                    "radius": 1.0,
                    "orbit_distance": -5.0,
                    "angular_speed": 0.1
                }
            ]
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::NegativeOrbitDistance { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"{
            "bodies": [
                { "name": "x", "color": [1,1,1], "radius": 1.0, "orbit_distance": 10.0, "angular_speed": 0.1 },
                { "name": "x", "color": [1,1,1], "radius": 1.0, "orbit_distance": 20.0, "angular_speed": 0.1 }
            ]
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateName(_)));
    }

    #[test]
    fn degenerate_ring_is_rejected() {
        let json = r#"{
            "bodies": [
                {
                    "name": "saturn",
                    "color": [1,1,1],
                    "radius": 10.0,
                    "orbit_distance": 100.0,
                    "angular_speed": 0.1,
                    "ring": { "inner": 20.0, "outer": 12.0, "color": [1,1,1] }
                }
            ]
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::DegenerateRing { .. }));
    }
}
