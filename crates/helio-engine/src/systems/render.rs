use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::renderer::instance::{MeshBuffer, MeshInstance, SHAPE_RING, SHAPE_SPHERE};

/// Build the mesh instance buffer from a set of entities.
/// Opaque instances come first, then alpha-blended ones, so the host
/// renderer can draw the blend pass after the depth pass.
pub fn build_mesh_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut MeshBuffer) {
    buffer.clear();

    let mut opaque: Vec<MeshInstance> = Vec::new();
    let mut blended: Vec<MeshInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let (kind, radius, extent) = match mesh.shape {
            MeshShape::Sphere { radius } => (SHAPE_SPHERE, radius, 0.0),
            MeshShape::Ring { inner, outer } => (SHAPE_RING, inner, outer),
        };

        let instance = MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            kind,
            radius,
            extent,
            spin: entity.spin,
            scale: entity.scale,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            a: mesh.alpha,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            _pad0: 0.0,
            _pad1: 0.0,
        };

        if mesh.alpha < 1.0 {
            blended.push(instance);
        } else {
            opaque.push(instance);
        }
    }

    for inst in opaque {
        buffer.push(inst);
    }
    for inst in blended {
        buffer.push(inst);
    }
}
