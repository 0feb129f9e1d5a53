//! Shape parameter proxies and their per-kind packers.

mod attributes;
mod ellipsoid;
mod faceted_sphere;
mod kind;
mod polygon;
mod polyhedron;
mod proxy;
mod sphere;
mod sphere_union;
mod sphinx;

pub use kind::ShapeKind;
pub use proxy::ShapeParam;

use crate::capacity::VertexCapacity;
use crate::error::CapacityError;
use crate::field::coerce::to_bool;
use crate::field::{FieldReader, FieldValue};
use crate::record::{IgnoreFlags, ShapeRecord};

/// Integrator settings a packer needs, fixed at integrator construction.
///
/// Only a registry builds one, so every proxy of an integrator packs with the
/// same vertex limit and layout capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackContext {
    max_verts: usize,
    capacity: Option<VertexCapacity>,
}

impl PackContext {
    /// Resolves the layout capacity of `kind` for `max_verts`.
    pub(crate) fn new(kind: ShapeKind, max_verts: usize) -> Result<Self, CapacityError> {
        Ok(Self {
            max_verts,
            capacity: kind.resolve_capacity(max_verts)?,
        })
    }

    /// Returns the maximum vertex count accepted for sized shapes.
    #[must_use]
    pub fn max_verts(&self) -> usize {
        self.max_verts
    }

    /// Returns the record layout capacity, `None` for kinds without one.
    #[must_use]
    pub fn capacity(&self) -> Option<VertexCapacity> {
        self.capacity
    }
}

/// Output of a packer: the record plus proxy-only data.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Packed {
    pub(crate) record: ShapeRecord,
    /// Rendering colors; stored on the proxy, never in the record.
    pub(crate) colors: Option<FieldValue>,
}

impl From<ShapeRecord> for Packed {
    fn from(record: ShapeRecord) -> Self {
        Self {
            record,
            colors: None,
        }
    }
}

fn read_flags(reader: &mut FieldReader<'_>) -> IgnoreFlags {
    IgnoreFlags {
        overlaps: reader.optional("ignore_overlaps").is_some_and(to_bool),
        statistics: reader.optional("ignore_statistics").is_some_and(to_bool),
    }
}
