use crate::capacity::VertexCapacity;
use crate::error::{CapacityError, Result};
use crate::field::coerce::{to_index_lists, to_points3, to_scalar};
use crate::field::FieldReader;
use crate::record::{make_poly3d_data, make_poly3d_verts, ShapeRecord};

use super::attributes::Attributes;
use super::{read_flags, PackContext, Packed, ShapeKind};

/// Packs convex polyhedra and spheropolyhedra into the integrator's
/// fixed-capacity layout.
pub(super) fn pack_convex(
    kind: ShapeKind,
    reader: &mut FieldReader<'_>,
    ctx: &PackContext,
) -> Result<Packed> {
    let vertices = to_points3("vertices", reader.required("vertices")?)?;
    let sweep_radius = match kind {
        ShapeKind::ConvexSpheropolyhedron => reader
            .optional("sweep_radius")
            .map(|v| to_scalar("sweep_radius", v))
            .transpose()?
            .unwrap_or(0.0),
        _ => 0.0,
    };
    let ignore = read_flags(reader);
    reader.finish()?;

    if vertices.len() > ctx.max_verts() {
        return Err(CapacityError::CapacityExceeded {
            field: "vertices",
            max: ctx.max_verts(),
            found: vertices.len(),
        }
        .into());
    }
    let Some(capacity) = ctx.capacity() else {
        return Err(CapacityError::NoSuitableCapacity {
            requested: ctx.max_verts(),
            largest: VertexCapacity::V128.get(),
        }
        .into());
    };

    let verts = make_poly3d_verts(capacity, vertices, sweep_radius, ignore)?;
    let record = match kind {
        ShapeKind::ConvexSpheropolyhedron => ShapeRecord::ConvexSpheropolyhedron(verts),
        _ => ShapeRecord::ConvexPolyhedron(verts),
    };
    Ok(record.into())
}

pub(super) fn describe_convex(kind: ShapeKind, attrs: &Attributes) -> String {
    match kind {
        ShapeKind::ConvexSpheropolyhedron => format!(
            "{kind}(sweep radius = {}, vertices = {})",
            attrs.get("sweep_radius"),
            attrs.get("vertices")
        ),
        _ => format!("{kind}(vertices = {})", attrs.get("vertices")),
    }
}

/// Packs a general polyhedron given as vertices and faces. Edges are derived
/// from the faces and cannot be supplied.
pub(super) fn pack_mesh(reader: &mut FieldReader<'_>) -> Result<Packed> {
    let vertices = to_points3("vertices", reader.required("vertices")?)?;
    let faces = to_index_lists("faces", reader.required("faces")?)?;
    let ignore = read_flags(reader);
    reader.finish()?;
    Ok(ShapeRecord::Polyhedron(make_poly3d_data(vertices, faces, ignore)?).into())
}

pub(super) fn describe_mesh(attrs: &Attributes) -> String {
    format!(
        "polyhedron(vertices = {}, faces = {}, edges = {})",
        attrs.get("vertices"),
        attrs.get("faces"),
        attrs.get("edges")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FieldError, HpmcError};
    use crate::field::{FieldValue, ShapeFields};

    fn cube() -> Vec<[f64; 3]> {
        let mut verts = Vec::new();
        for x in [-0.5, 0.5] {
            for y in [-0.5, 0.5] {
                for z in [-0.5, 0.5] {
                    verts.push([x, y, z]);
                }
            }
        }
        verts
    }

    fn ctx(max_verts: usize) -> PackContext {
        PackContext::new(ShapeKind::ConvexPolyhedron, max_verts).unwrap()
    }

    #[test]
    fn cube_fits_eight_vertices() {
        let fields = ShapeFields::new().with("vertices", cube());
        let mut reader = FieldReader::new("convex polyhedron", &fields);
        let packed = pack_convex(ShapeKind::ConvexPolyhedron, &mut reader, &ctx(8)).unwrap();
        match packed.record {
            ShapeRecord::ConvexPolyhedron(p) => {
                assert_eq!(p.capacity(), VertexCapacity::V8);
                assert_eq!(p.vertices().len(), 8);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn max_verts_is_enforced_below_capacity() {
        // max_verts = 10 resolves to the 16-vertex layout but still rejects 11.
        let fields = ShapeFields::new().with("vertices", vec![[0.0, 0.0, 0.0]; 11]);
        let mut reader = FieldReader::new("convex polyhedron", &fields);
        let err = pack_convex(ShapeKind::ConvexPolyhedron, &mut reader, &ctx(10)).unwrap_err();
        assert!(matches!(
            err,
            HpmcError::Capacity(CapacityError::CapacityExceeded { max: 10, found: 11, .. })
        ));
    }

    #[test]
    fn context_of_another_kind_has_no_layout() {
        let sphere_ctx = PackContext::new(ShapeKind::Sphere, 64).unwrap();
        let fields = ShapeFields::new().with("vertices", cube());
        let mut reader = FieldReader::new("convex polyhedron", &fields);
        assert!(matches!(
            pack_convex(ShapeKind::ConvexPolyhedron, &mut reader, &sphere_ctx),
            Err(HpmcError::Capacity(CapacityError::NoSuitableCapacity { requested: 64, .. }))
        ));
    }

    #[test]
    fn spheropolyhedron_sweep_radius() {
        let fields = ShapeFields::new()
            .with("vertices", vec![[0.0, 0.0, 0.0]])
            .with("sweep_radius", 0.5);
        let mut reader = FieldReader::new("convex spheropolyhedron", &fields);
        let packed =
            pack_convex(ShapeKind::ConvexSpheropolyhedron, &mut reader, &ctx(64)).unwrap();
        match packed.record {
            ShapeRecord::ConvexSpheropolyhedron(p) => {
                assert_eq!(p.sweep_radius(), 0.5);
                assert_eq!(p.diameter(), 1.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn mesh_edges_are_derived() {
        let fields = ShapeFields::new()
            .with("vertices", vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
            .with("faces", vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]]);
        let mut reader = FieldReader::new("polyhedron", &fields);
        let packed = pack_mesh(&mut reader).unwrap();
        let mut attrs = Attributes::declare(&ShapeKind::Polyhedron.keys());
        attrs.refresh(packed.record.attributes().unwrap());
        match attrs.get("edges") {
            FieldValue::List(edges) => assert_eq!(edges.len(), 6),
            other => panic!("unexpected {other:?}"),
        }
        assert!(describe_mesh(&attrs).starts_with("polyhedron(vertices = [[0, 0, 0]"));
    }

    #[test]
    fn mesh_rejects_explicit_edges() {
        let fields = ShapeFields::new()
            .with("vertices", vec![[0.0, 0.0, 0.0]])
            .with("faces", Vec::<Vec<i64>>::new())
            .with("edges", Vec::<Vec<i64>>::new());
        let mut reader = FieldReader::new("polyhedron", &fields);
        assert!(matches!(
            pack_mesh(&mut reader),
            Err(HpmcError::Field(FieldError::UnknownField { .. }))
        ));
    }
}
