use crate::error::Result;
use crate::field::coerce::{to_points2, to_scalar};
use crate::field::FieldReader;
use crate::record::{make_poly2d_verts, ShapeRecord};

use super::attributes::Attributes;
use super::{read_flags, Packed, ShapeKind};

/// Packs convex polygons, convex spheropolygons and simple polygons, which
/// share one native vertex layout. Only spheropolygons accept `sweep_radius`.
pub(super) fn pack(kind: ShapeKind, reader: &mut FieldReader<'_>) -> Result<Packed> {
    let vertices = to_points2("vertices", reader.required("vertices")?)?;
    let sweep_radius = match kind {
        ShapeKind::ConvexSpheropolygon => reader
            .optional("sweep_radius")
            .map(|v| to_scalar("sweep_radius", v))
            .transpose()?
            .unwrap_or(0.0),
        _ => 0.0,
    };
    let ignore = read_flags(reader);
    reader.finish()?;

    let verts = make_poly2d_verts(vertices, sweep_radius, ignore)?;
    let record = match kind {
        ShapeKind::ConvexSpheropolygon => ShapeRecord::ConvexSpheropolygon(verts),
        ShapeKind::SimplePolygon => ShapeRecord::SimplePolygon(verts),
        _ => ShapeRecord::ConvexPolygon(verts),
    };
    Ok(record.into())
}

pub(super) fn describe(kind: ShapeKind, attrs: &Attributes) -> String {
    match kind {
        ShapeKind::ConvexSpheropolygon => format!(
            "{kind}(sweep radius = {}, vertices = {})",
            attrs.get("sweep_radius"),
            attrs.get("vertices")
        ),
        _ => format!("{kind}(vertices = {})", attrs.get("vertices")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FieldError, HpmcError};
    use crate::field::ShapeFields;
    use nalgebra::DMatrix;

    fn triangle() -> ShapeFields {
        ShapeFields::new().with("vertices", vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])
    }

    #[test]
    fn convex_polygon_has_no_sweep_radius() {
        let fields = triangle().with("sweep_radius", 0.1);
        let mut reader = FieldReader::new("convex polygon", &fields);
        let err = pack(ShapeKind::ConvexPolygon, &mut reader).unwrap_err();
        assert!(matches!(
            err,
            HpmcError::Field(FieldError::UnknownField { ref field, .. }) if field == "sweep_radius"
        ));
    }

    #[test]
    fn spheropolygon_sweep_radius() {
        let fields = triangle().with("sweep_radius", 0.1);
        let mut reader = FieldReader::new("convex spheropolygon", &fields);
        match pack(ShapeKind::ConvexSpheropolygon, &mut reader).unwrap().record {
            ShapeRecord::ConvexSpheropolygon(p) => assert_eq!(p.sweep_radius(), 0.1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn accepts_dense_array_vertices() {
        let m = DMatrix::from_row_slice(3, 2, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        let fields = ShapeFields::new().with("vertices", m);
        let mut reader = FieldReader::new("simple polygon", &fields);
        let record = pack(ShapeKind::SimplePolygon, &mut reader).unwrap().record;
        assert_eq!(record.kind(), ShapeKind::SimplePolygon);
        let listed = triangle();
        let mut other = FieldReader::new("simple polygon", &listed);
        let from_list = pack(ShapeKind::SimplePolygon, &mut other).unwrap().record;
        assert_eq!(record, from_list);
    }

    #[test]
    fn describe_spheropolygon() {
        let mut attrs = Attributes::declare(&ShapeKind::ConvexSpheropolygon.keys());
        let fields = ShapeFields::new()
            .with("vertices", vec![[0.0, 0.0], [1.0, 0.0]])
            .with("sweep_radius", 0.5);
        let mut reader = FieldReader::new("convex spheropolygon", &fields);
        attrs.refresh(pack(ShapeKind::ConvexSpheropolygon, &mut reader).unwrap().record.attributes().unwrap());
        assert_eq!(
            describe(ShapeKind::ConvexSpheropolygon, &attrs),
            "convex spheropolygon(sweep radius = 0.5, vertices = [[0, 0], [1, 0]])"
        );
    }
}
