use crate::error::Result;
use crate::field::coerce::{to_points3, to_scalar, to_scalars};
use crate::field::{normalize_sequence, FieldReader, FieldValue};
use crate::record::{make_sphinx3d_params, ShapeRecord};

use super::attributes::Attributes;
use super::{read_flags, Packed};

/// Normalizes an optional `colors` field. Colors are kept for rendering only.
pub(super) fn read_colors(reader: &mut FieldReader<'_>) -> Result<Option<FieldValue>> {
    match reader.optional("colors") {
        None | Some(FieldValue::None) => Ok(None),
        Some(colors) => Ok(Some(FieldValue::List(normalize_sequence("colors", colors)?))),
    }
}

pub(super) fn pack(reader: &mut FieldReader<'_>) -> Result<Packed> {
    let diameters = to_scalars("diameters", reader.required("diameters")?)?;
    let centers = to_points3("centers", reader.required("centers")?)?;
    let diameter = reader
        .optional("diameter")
        .map(|v| to_scalar("diameter", v))
        .transpose()?;
    let colors = read_colors(reader)?;
    let ignore = read_flags(reader);
    reader.finish()?;

    let params = make_sphinx3d_params(diameters, centers, diameter, ignore)?;
    Ok(Packed {
        record: ShapeRecord::Sphinx(params),
        colors,
    })
}

pub(super) fn describe(attrs: &Attributes) -> String {
    format!(
        "sphinx(centers = {}, diameters = {}, diameter = {})",
        attrs.get("centers"),
        attrs.get("diameters"),
        attrs.get("diameter")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::field::ShapeFields;

    fn dimple() -> ShapeFields {
        ShapeFields::new()
            .with("diameters", vec![1.0, -0.8])
            .with("centers", vec![[0.0, 0.0, 0.0], [0.0, 0.0, 0.5]])
    }

    #[test]
    fn colors_stay_out_of_the_record() {
        let plain = dimple();
        let colored = dimple().with("colors", vec!["red", "blue"]);

        let mut reader = FieldReader::new("sphinx", &plain);
        let a = pack(&mut reader).unwrap();
        let mut reader = FieldReader::new("sphinx", &colored);
        let b = pack(&mut reader).unwrap();

        assert_eq!(a.record, b.record);
        assert!(a.colors.is_none());
        assert_eq!(b.colors, Some(FieldValue::from(vec!["red", "blue"])));
    }

    #[test]
    fn explicit_none_colors() {
        let fields = dimple().with("colors", FieldValue::None);
        let mut reader = FieldReader::new("sphinx", &fields);
        assert!(pack(&mut reader).unwrap().colors.is_none());
    }

    #[test]
    fn describe_reports_derived_diameter() {
        let fields = dimple();
        let mut reader = FieldReader::new("sphinx", &fields);
        let mut attrs = Attributes::declare(&crate::shape::ShapeKind::Sphinx.keys());
        attrs.refresh(pack(&mut reader).unwrap().record.attributes().unwrap());
        assert_eq!(
            describe(&attrs),
            "sphinx(centers = [[0, 0, 0], [0, 0, 0.5]], diameters = [1, -0.8], diameter = 1)"
        );
    }
}
