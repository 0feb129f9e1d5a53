use std::fmt::Write as _;

use crate::error::{FieldError, Result};
use crate::field::coerce::{to_points3, to_scalars};
use crate::field::FieldReader;
use crate::math::Quaternion;
use crate::record::{make_sph_params, make_sphere_union_params, IgnoreFlags, ShapeRecord};

use super::attributes::Attributes;
use super::sphinx::read_colors;
use super::{read_flags, Packed};

/// Packs a union of spheres. Every member is packed as its own sphere record
/// with cleared ignore flags, and placed with the identity orientation.
pub(super) fn pack(reader: &mut FieldReader<'_>) -> Result<Packed> {
    let diameters = to_scalars("diameters", reader.required("diameters")?)?;
    let centers = to_points3("centers", reader.required("centers")?)?;
    let colors = read_colors(reader)?;
    let ignore = read_flags(reader);
    reader.finish()?;

    if centers.len() != diameters.len() {
        return Err(FieldError::LengthMismatch {
            field: "centers",
            found: centers.len(),
            other: "diameters",
            expected: diameters.len(),
        }
        .into());
    }
    let members = diameters
        .iter()
        .map(|d| make_sph_params(d / 2.0, IgnoreFlags::default()))
        .collect();
    let orientations = vec![Quaternion::identity(); diameters.len()];

    let params = make_sphere_union_params(members, centers, orientations, ignore)?;
    Ok(Packed {
        record: ShapeRecord::SphereUnion(params),
        colors,
    })
}

pub(super) fn describe(attrs: &Attributes) -> String {
    let mut out = format!(
        "sphere union(centers = {}, orientations = {}, diameter = {})",
        attrs.get("centers"),
        attrs.get("orientations"),
        attrs.get("diameter")
    );
    let diameters = to_scalars("diameters", attrs.get("diameters")).unwrap_or_default();
    for (i, d) in diameters.iter().enumerate() {
        let _ = write!(out, "\nsphere-{i}(r = {})", d / 2.0);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HpmcError;
    use crate::field::{FieldValue, ShapeFields};
    use crate::shape::ShapeKind;

    fn dimer() -> ShapeFields {
        ShapeFields::new()
            .with("diameters", vec![1.0, 1.0])
            .with("centers", vec![[-0.5, 0.0, 0.0], [0.5, 0.0, 0.0]])
    }

    #[test]
    fn members_have_cleared_flags() {
        let fields = dimer().with("ignore_overlaps", true);
        let mut reader = FieldReader::new("sphere union", &fields);
        match pack(&mut reader).unwrap().record {
            ShapeRecord::SphereUnion(u) => {
                assert!(u.ignore().overlaps);
                assert!(u.members().iter().all(|m| m.ignore() == IgnoreFlags::default()));
                assert!(u.orientations().iter().all(|q| *q == Quaternion::identity()));
                assert_eq!(u.members()[0].radius(), 0.5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn length_mismatch() {
        let fields = ShapeFields::new()
            .with("diameters", vec![1.0, 2.0])
            .with("centers", vec![[0.0, 0.0, 0.0]]);
        let mut reader = FieldReader::new("sphere union", &fields);
        match pack(&mut reader) {
            Err(HpmcError::Field(FieldError::LengthMismatch {
                field,
                found,
                other,
                expected,
            })) => {
                assert_eq!((field, found, other, expected), ("centers", 1, "diameters", 2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn orientations_are_not_settable() {
        let fields = dimer().with("orientations", vec![[1.0, 0.0, 0.0, 0.0]; 2]);
        let mut reader = FieldReader::new("sphere union", &fields);
        assert!(matches!(
            pack(&mut reader),
            Err(HpmcError::Field(FieldError::UnknownField { .. }))
        ));
    }

    #[test]
    fn describe_lists_members() {
        let fields = dimer();
        let mut reader = FieldReader::new("sphere union", &fields);
        let mut attrs = Attributes::declare(&ShapeKind::SphereUnion.keys());
        attrs.refresh(pack(&mut reader).unwrap().record.attributes().unwrap());
        assert_eq!(attrs.get("diameters"), &FieldValue::from(vec![1.0, 1.0]));
        let text = describe(&attrs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "sphere union(centers = [[-0.5, 0, 0], [0.5, 0, 0]], \
             orientations = [[1, 0, 0, 0], [1, 0, 0, 0]], diameter = 2)"
        );
        assert_eq!(lines[2], "sphere-1(r = 0.5)");
    }
}
