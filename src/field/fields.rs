use crate::error::FieldError;

use super::FieldValue;

/// Named field values passed to a shape `set` call.
///
/// Insertion order is preserved; inserting an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeFields {
    entries: Vec<(String, FieldValue)>,
}

impl ShapeFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the updated set.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a field, replacing any previous value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Consumes fields by name on behalf of a packer.
///
/// Every field must be claimed by [`FieldReader::required`] or
/// [`FieldReader::optional`] before [`FieldReader::finish`]; leftovers are
/// reported as unknown fields of the shape.
pub(crate) struct FieldReader<'a> {
    shape: &'static str,
    fields: &'a ShapeFields,
    claimed: Vec<bool>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(shape: &'static str, fields: &'a ShapeFields) -> Self {
        Self {
            shape,
            fields,
            claimed: vec![false; fields.len()],
        }
    }

    fn claim(&mut self, name: &str) -> Option<&'a FieldValue> {
        let fields = self.fields;
        let i = fields.entries.iter().position(|(n, _)| n == name)?;
        self.claimed[i] = true;
        Some(&fields.entries[i].1)
    }

    pub(crate) fn required(&mut self, name: &'static str) -> Result<&'a FieldValue, FieldError> {
        self.claim(name).ok_or(FieldError::MissingField {
            shape: self.shape,
            field: name,
        })
    }

    pub(crate) fn optional(&mut self, name: &'static str) -> Option<&'a FieldValue> {
        self.claim(name)
    }

    pub(crate) fn finish(&self) -> Result<(), FieldError> {
        match self.claimed.iter().position(|c| !c) {
            Some(i) => Err(FieldError::UnknownField {
                shape: self.shape,
                field: self.fields.entries[i].0.clone(),
            }),
            None => Ok(()),
        }
    }
}
