use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera for 3D rendering.
/// Produces a view-projection matrix mapping world units to clip space.
pub struct Camera3D {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up vector (normally +Y).
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane.
    pub z_near: f32,
    /// Far clip plane.
    pub z_far: f32,
}

/// GPU-side uniform data for the camera.
/// View-projection matrix plus world position (w unused, kept for alignment).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Camera3D {
    pub fn new(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 50.0, 150.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y,
            aspect,
            z_near,
            z_far,
        }
    }

    /// Build the view matrix (right-handed look-at).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Build the perspective projection matrix. Z in [0, 1] for WebGPU.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            position: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }

    /// Resize the viewport (e.g. on window resize).
    /// Only the projection aspect changes; position and target are untouched.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Snap the camera to a pose instantly.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 5000.0)
    }
}
