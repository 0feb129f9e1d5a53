use std::fmt;

use nalgebra::{DMatrix, DVector};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::math::{Point2, Point3, Quaternion};

/// A dynamically-typed shape field value.
///
/// Shape fields arrive in many forms: plain scalars, nested lists of
/// coordinates, or dense numeric arrays. `FieldValue` carries any of them
/// until a packer coerces it into the typed form a record needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Absent value; reported by unset proxies.
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered, possibly nested, collection.
    List(Vec<FieldValue>),
    /// Dense one-dimensional numeric array.
    Vector(DVector<f64>),
    /// Dense two-dimensional numeric array; each row is one item.
    Array(DMatrix<f64>),
}

impl FieldValue {
    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Vector(_) => "vector",
            Self::Array(_) => "array",
        }
    }

    /// Returns `true` for [`FieldValue::None`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => write_list(f, items.iter()),
            Self::Vector(v) => write_list(f, v.iter()),
            Self::Array(m) => {
                write!(f, "[")?;
                for (i, row) in m.row_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_list(f, row.iter())?;
                }
                write!(f, "]")
            }
        }
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Str(s) => serializer.serialize_str(s),
            Self::List(items) => serializer.collect_seq(items),
            Self::Vector(v) => serializer.collect_seq(v.iter()),
            Self::Array(m) => {
                let mut seq = serializer.serialize_seq(Some(m.nrows()))?;
                for row in m.row_iter() {
                    let row: Vec<f64> = row.iter().copied().collect();
                    seq.serialize_element(&row)?;
                }
                seq.end()
            }
        }
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for FieldValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl TryFrom<usize> for FieldValue {
    type Error = std::num::TryFromIntError;

    fn try_from(i: usize) -> Result<Self, Self::Error> {
        i64::try_from(i).map(Self::Int)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>, const N: usize> From<[T; N]> for FieldValue {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<DVector<f64>> for FieldValue {
    fn from(v: DVector<f64>) -> Self {
        Self::Vector(v)
    }
}

impl From<DMatrix<f64>> for FieldValue {
    fn from(m: DMatrix<f64>) -> Self {
        Self::Array(m)
    }
}

impl From<Point2> for FieldValue {
    fn from(p: Point2) -> Self {
        [p.x, p.y].into()
    }
}

impl From<Point3> for FieldValue {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z].into()
    }
}

impl From<Quaternion> for FieldValue {
    fn from(q: Quaternion) -> Self {
        [q.w, q.i, q.j, q.k].into()
    }
}
