pub mod coerce;
mod fields;
mod value;

pub(crate) use fields::FieldReader;
pub use fields::ShapeFields;
pub use value::FieldValue;

pub use coerce::normalize_sequence;
