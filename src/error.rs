use thiserror::Error;

use crate::shape::ShapeKind;

/// Top-level error type for shape parameter handling.
#[derive(Debug, Error)]
pub enum HpmcError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors related to particle type lookup in the shape registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{name} is not a known particle type")]
    UnknownType { name: String },

    #[error("could not create shape parameter proxy for type {name}")]
    ProxyCreation { name: String },

    #[error("shape parameters must be set for all particle types before running, missing: {}", .missing.join(", "))]
    IncompleteShapeSpecification { missing: Vec<String> },
}

/// Errors related to shape fields and their coercion.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("{shape} has no field {field:?}")]
    UnknownField { shape: &'static str, field: String },

    #[error("{shape} requires field {field:?}")]
    MissingField {
        shape: &'static str,
        field: &'static str,
    },

    #[error("field {field:?} expects {expected}, got {found}")]
    TypeCoercion {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("field {field:?} has {found} entries but {other:?} has {expected}; they must be equal length")]
    LengthMismatch {
        field: &'static str,
        found: usize,
        other: &'static str,
        expected: usize,
    },

    #[error("face {face} of field {field:?} has {len} vertices, but at least 3 are required")]
    DegenerateFace {
        field: &'static str,
        face: usize,
        len: usize,
    },

    #[error("field {field:?} references index {index}, but only {len} vertices are defined")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },
}

/// Errors related to fixed-capacity record layouts.
#[derive(Debug, Error)]
pub enum CapacityError {
    #[error("field {field:?} accepts up to {max} entries, but {found} are provided")]
    CapacityExceeded {
        field: &'static str,
        max: usize,
        found: usize,
    },

    #[error("no vertex capacity covers max_verts = {requested} (largest available is {largest})")]
    NoSuitableCapacity { requested: usize, largest: usize },
}

/// Errors reported by the overlap engine when installing a record.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("type index {type_index} expects {expected} parameters, got {found}")]
    KindMismatch {
        type_index: usize,
        expected: ShapeKind,
        found: ShapeKind,
    },

    #[error("type index {type_index} is out of range for {n_types} particle types")]
    TypeIndexOutOfRange { type_index: usize, n_types: usize },
}

/// Convenience type alias for results using [`HpmcError`].
pub type Result<T> = std::result::Result<T, HpmcError>;
