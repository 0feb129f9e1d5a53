use std::collections::BTreeMap;
use std::fmt;

use crate::engine::OverlapEngine;
use crate::error::{FieldError, Result};
use crate::field::{FieldValue, ShapeFields};

use super::attributes::Attributes;
use super::{PackContext, ShapeKind};

/// Shape parameters of one particle type.
///
/// A proxy validates user fields, packs them into a record and installs the
/// record in the overlap engine. It also keeps the most recently installed
/// values as read-only-by-convention attributes for introspection. Only the
/// attributes declared by the shape kind exist; writing any other name fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeParam {
    kind: ShapeKind,
    type_index: usize,
    type_name: String,
    is_set: bool,
    attrs: Attributes,
}

impl ShapeParam {
    /// Creates an unset proxy for the given particle type.
    #[must_use]
    pub fn new(kind: ShapeKind, type_index: usize, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_index,
            type_name: type_name.into(),
            is_set: false,
            attrs: Attributes::declare(&kind.keys()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the index of the particle type this proxy belongs to.
    #[must_use]
    pub fn type_index(&self) -> usize {
        self.type_index
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `true` once a record has been packed for this type.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Returns the declared attribute names, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attrs.keys()
    }

    /// Returns the current value of a declared attribute.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] if the shape does not declare `name`.
    pub fn get(&self, name: &str) -> Result<&FieldValue> {
        self.attrs.lookup(name).ok_or_else(|| self.unknown_field(name).into())
    }

    /// Overwrites a declared attribute on the proxy.
    ///
    /// This does not repack or reinstall the record.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] if the shape does not declare `name`.
    pub fn set_attr(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        if self.attrs.assign(name, value.into()) {
            Ok(())
        } else {
            Err(self.unknown_field(name).into())
        }
    }

    fn unknown_field(&self, name: &str) -> FieldError {
        FieldError::UnknownField {
            shape: self.kind.name(),
            field: name.to_owned(),
        }
    }

    /// Converts an ordered collection into a canonical list of plain values.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::TypeCoercion`] if `value` is not a collection.
    pub fn normalize_sequence(&self, value: &FieldValue) -> Result<Vec<FieldValue>> {
        Ok(crate::field::normalize_sequence("value", value)?)
    }

    /// Packs `fields` into a new record and installs it for this type.
    ///
    /// The proxy is marked set as soon as packing succeeds, before the engine
    /// install. An install failure therefore leaves the proxy set while its
    /// attributes still show the previous record.
    ///
    /// # Errors
    ///
    /// Returns the packer's validation error, or the engine's install error.
    pub(crate) fn set(
        &mut self,
        engine: &mut dyn OverlapEngine,
        ctx: &PackContext,
        fields: &ShapeFields,
    ) -> Result<()> {
        let packed = self.kind.pack(fields, ctx)?;
        let attributes = packed.record.attributes()?;
        self.is_set = true;

        if let Err(err) = engine.set_param(self.type_index, packed.record) {
            tracing::warn!(
                type_name = %self.type_name,
                type_index = self.type_index,
                error = %err,
                "shape parameter install failed"
            );
            return Err(err.into());
        }

        self.attrs.refresh(attributes);
        if self.kind.has_colors() {
            self.attrs
                .assign("colors", packed.colors.unwrap_or(FieldValue::None));
        }
        tracing::debug!(
            type_name = %self.type_name,
            type_index = self.type_index,
            kind = %self.kind,
            "installed shape parameters"
        );
        Ok(())
    }

    /// Returns a human-readable rendering of the shape.
    #[must_use]
    pub fn describe(&self) -> String {
        self.kind.describe(&self.attrs)
    }

    /// Returns a snapshot of every declared attribute.
    #[must_use]
    pub fn metadata(&self) -> BTreeMap<String, FieldValue> {
        self.attrs
            .iter()
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect()
    }
}

impl fmt::Display for ShapeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
