use crate::error::FieldError;
use crate::math::{Point2, Point3, Vector3};

use super::FieldValue;

fn coercion_error(field: &str, expected: &'static str, value: &FieldValue) -> FieldError {
    FieldError::TypeCoercion {
        field: field.to_owned(),
        expected,
        found: value.type_name().to_owned(),
    }
}

/// Converts any ordered collection into a canonical list of plain values.
///
/// Lists are returned item by item, dense vectors become a list of floats,
/// and dense arrays become one list of floats per row.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] if the value is not a collection.
pub fn normalize_sequence(field: &str, value: &FieldValue) -> Result<Vec<FieldValue>, FieldError> {
    match value {
        FieldValue::List(items) => Ok(items.clone()),
        FieldValue::Vector(v) => Ok(v.iter().copied().map(FieldValue::Float).collect()),
        FieldValue::Array(m) => Ok(m
            .row_iter()
            .map(|row| FieldValue::List(row.iter().copied().map(FieldValue::Float).collect()))
            .collect()),
        other => Err(coercion_error(field, "a sequence", other)),
    }
}

/// Coerces a value to a floating point scalar.
///
/// Accepts floats, integers, booleans and numeric strings.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] for anything else.
#[allow(clippy::cast_precision_loss)]
pub fn to_scalar(field: &str, value: &FieldValue) -> Result<f64, FieldError> {
    match value {
        FieldValue::Float(x) => Ok(*x),
        FieldValue::Int(i) => Ok(*i as f64),
        FieldValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        FieldValue::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| coercion_error(field, "a number", value)),
        other => Err(coercion_error(field, "a number", other)),
    }
}

/// Coerces a value to a boolean using truthiness.
#[must_use]
pub fn to_bool(value: &FieldValue) -> bool {
    match value {
        FieldValue::None => false,
        FieldValue::Bool(b) => *b,
        FieldValue::Int(i) => *i != 0,
        FieldValue::Float(x) => *x != 0.0,
        FieldValue::Str(s) => !s.is_empty(),
        FieldValue::List(items) => !items.is_empty(),
        FieldValue::Vector(v) => !v.is_empty(),
        FieldValue::Array(m) => !m.is_empty(),
    }
}

/// Coerces a sequence to a list of scalars.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] if the value is not a sequence of numbers.
pub fn to_scalars(field: &str, value: &FieldValue) -> Result<Vec<f64>, FieldError> {
    normalize_sequence(field, value)?
        .iter()
        .map(|item| to_scalar(field, item))
        .collect()
}

/// Coerces a value to exactly `N` scalar components.
fn to_components<const N: usize>(
    field: &str,
    expected: &'static str,
    value: &FieldValue,
) -> Result<[f64; N], FieldError> {
    let items = normalize_sequence(field, value).map_err(|_| coercion_error(field, expected, value))?;
    if items.len() != N {
        return Err(FieldError::TypeCoercion {
            field: field.to_owned(),
            expected,
            found: format!("{} components", items.len()),
        });
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(&items) {
        *slot = to_scalar(field, item)?;
    }
    Ok(out)
}

/// Coerces a single 3D point.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] unless the value holds exactly three numbers.
pub fn to_point3(field: &str, value: &FieldValue) -> Result<Point3, FieldError> {
    let [x, y, z] = to_components::<3>(field, "a 3D point", value)?;
    Ok(Point3::new(x, y, z))
}

/// Coerces a sequence of 2D points.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] unless every item holds exactly two numbers.
pub fn to_points2(field: &str, value: &FieldValue) -> Result<Vec<Point2>, FieldError> {
    normalize_sequence(field, value)?
        .iter()
        .map(|item| {
            let [x, y] = to_components::<2>(field, "a 2D point", item)?;
            Ok(Point2::new(x, y))
        })
        .collect()
}

/// Coerces a sequence of 3D points.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] unless every item holds exactly three numbers.
pub fn to_points3(field: &str, value: &FieldValue) -> Result<Vec<Point3>, FieldError> {
    normalize_sequence(field, value)?
        .iter()
        .map(|item| to_point3(field, item))
        .collect()
}

/// Coerces a sequence of 3D vectors.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] unless every item holds exactly three numbers.
pub fn to_vectors3(field: &str, value: &FieldValue) -> Result<Vec<Vector3>, FieldError> {
    Ok(to_points3(field, value)?.into_iter().map(|p| p.coords).collect())
}

/// Coerces a non-negative integral value to an index.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_index(field: &str, value: &FieldValue) -> Result<usize, FieldError> {
    match value {
        FieldValue::Int(i) => usize::try_from(*i).map_err(|_| coercion_error(field, "a vertex index", value)),
        FieldValue::Float(x) if x.fract() == 0.0 && *x >= 0.0 => Ok(*x as usize),
        other => Err(coercion_error(field, "a vertex index", other)),
    }
}

/// Coerces a sequence of index lists, e.g. polyhedron faces.
///
/// # Errors
///
/// Returns [`FieldError::TypeCoercion`] unless every item is a sequence of
/// non-negative integers.
pub fn to_index_lists(field: &str, value: &FieldValue) -> Result<Vec<Vec<usize>>, FieldError> {
    normalize_sequence(field, value)?
        .iter()
        .map(|item| {
            normalize_sequence(field, item)?
                .iter()
                .map(|i| to_index(field, i))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    #[test]
    fn normalize_list_passes_items_through() {
        let v = FieldValue::from(vec![1.0, 2.0]);
        let items = normalize_sequence("x", &v).unwrap();
        assert_eq!(items, vec![FieldValue::Float(1.0), FieldValue::Float(2.0)]);
    }

    #[test]
    fn normalize_dense_vector() {
        let v = FieldValue::from(DVector::from_vec(vec![0.5, 1.5, 2.5]));
        let items = normalize_sequence("offsets", &v).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], FieldValue::Float(2.5));
    }

    #[test]
    fn normalize_dense_array_by_rows() {
        let m = DMatrix::from_row_slice(2, 3, &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        let items = normalize_sequence("vertices", &FieldValue::from(m)).unwrap();
        assert_eq!(items[1], FieldValue::from([1.0, 2.0, 3.0]));
    }

    #[test]
    fn normalize_rejects_scalars() {
        let err = normalize_sequence("vertices", &FieldValue::Float(1.0)).unwrap_err();
        assert!(matches!(err, FieldError::TypeCoercion { ref field, .. } if field == "vertices"));
    }

    #[test]
    fn scalar_from_int_bool_and_string() {
        assert_eq!(to_scalar("d", &FieldValue::Int(2)).unwrap(), 2.0);
        assert_eq!(to_scalar("d", &FieldValue::Bool(true)).unwrap(), 1.0);
        assert_eq!(to_scalar("d", &FieldValue::from(" 1.25 ")).unwrap(), 1.25);
        assert!(to_scalar("d", &FieldValue::from("wide")).is_err());
        assert!(to_scalar("d", &FieldValue::None).is_err());
    }

    #[test]
    fn truthiness() {
        assert!(!to_bool(&FieldValue::None));
        assert!(!to_bool(&FieldValue::Int(0)));
        assert!(to_bool(&FieldValue::Float(0.5)));
        assert!(!to_bool(&FieldValue::List(vec![])));
    }

    #[test]
    fn points_require_exact_arity() {
        let good = FieldValue::from(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_eq!(to_points3("vertices", &good).unwrap().len(), 2);

        let bad = FieldValue::from(vec![vec![0.0, 0.0], vec![1.0, 0.0]]);
        assert!(matches!(
            to_points3("vertices", &bad),
            Err(FieldError::TypeCoercion { .. })
        ));
        assert_eq!(to_points2("vertices", &bad).unwrap()[1], Point2::new(1.0, 0.0));
    }

    #[test]
    fn index_lists_accept_integral_floats() {
        let faces = FieldValue::from(vec![vec![0.0, 1.0, 2.0]]);
        assert_eq!(to_index_lists("faces", &faces).unwrap(), vec![vec![0, 1, 2]]);

        let negative = FieldValue::from(vec![vec![0, -1, 2]]);
        assert!(to_index_lists("faces", &negative).is_err());

        let fractional = FieldValue::from(vec![vec![0.5, 1.0, 2.0]]);
        assert!(to_index_lists("faces", &fractional).is_err());
    }
}
