/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Mesh shape primitive.
#[derive(Debug, Clone, Copy)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus in the entity's local XZ plane.
    Ring { inner: f32, outer: f32 },
}

/// Component for instanced meshes (raymarched spheres and flat rings).
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// Opacity (default: 1.0; instances below 1.0 are drawn in the blend pass).
    pub alpha: f32,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// HDR glow multiplier (default: 0.0, values > 0 push into EDR range).
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 10.0 },
            color: MeshColor::default(),
            alpha: 1.0,
            shininess: 32.0,
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: MeshColor) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Ring { inner, outer }, color)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
