use bytemuck::{Pod, Zeroable};

/// Shape kind written into the instance record.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_RING: f32 = 1.0;

/// Per-instance mesh render data for the host WebGPU pipeline.
/// Written to SharedArrayBuffer for the TypeScript renderer.
/// 16 floats = 64 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// SHAPE_SPHERE or SHAPE_RING.
    pub kind: f32,
    /// Sphere radius, or ring inner radius.
    pub radius: f32,
    /// Ring outer radius (unused for spheres).
    pub extent: f32,
    /// Axial spin about +Y, in radians.
    pub spin: f32,
    /// Uniform scale multiplier.
    pub scale: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub emissive: f32,
    pub shininess: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of mesh instances, rebuilt each frame from the scene.
pub struct MeshBuffer {
    instances: Vec<MeshInstance>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), 64);
        assert_eq!(MeshInstance::FLOATS, 16);
    }

    #[test]
    fn mesh_buffer_push_and_count() {
        let mut buf = MeshBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
    }
}
