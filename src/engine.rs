//! Seams to the simulation collaborators: the overlap engine that consumes
//! records, and the particle data that owns the particle types.

use std::cell::RefCell;

use crate::error::EngineError;
use crate::record::ShapeRecord;
use crate::shape::ShapeKind;

/// Per-type shape parameter table of an overlap engine.
pub trait OverlapEngine {
    /// Installs `record` for `type_index`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot accept the record.
    fn set_param(&mut self, type_index: usize, record: ShapeRecord) -> Result<(), EngineError>;

    /// Returns the record installed for `type_index`, if any.
    fn param(&self, type_index: usize) -> Option<&ShapeRecord>;

    /// Makes room for `n_types` particle types, keeping existing records.
    fn resize(&mut self, n_types: usize);
}

/// In-memory parameter table for a single shape kind, one slot per type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamTable {
    kind: ShapeKind,
    records: Vec<Option<ShapeRecord>>,
}

impl ParamTable {
    /// Creates an empty table for `n_types` particle types.
    #[must_use]
    pub fn new(kind: ShapeKind, n_types: usize) -> Self {
        Self {
            kind,
            records: vec![None; n_types],
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn n_types(&self) -> usize {
        self.records.len()
    }
}

impl OverlapEngine for ParamTable {
    fn set_param(&mut self, type_index: usize, record: ShapeRecord) -> Result<(), EngineError> {
        if record.kind() != self.kind {
            return Err(EngineError::KindMismatch {
                type_index,
                expected: self.kind,
                found: record.kind(),
            });
        }
        let n_types = self.records.len();
        let slot = self
            .records
            .get_mut(type_index)
            .ok_or(EngineError::TypeIndexOutOfRange {
                type_index,
                n_types,
            })?;
        *slot = Some(record);
        Ok(())
    }

    fn param(&self, type_index: usize) -> Option<&ShapeRecord> {
        self.records.get(type_index).and_then(Option::as_ref)
    }

    fn resize(&mut self, n_types: usize) {
        if n_types > self.records.len() {
            self.records.resize(n_types, None);
        }
    }
}

/// Read access to the live set of particle types.
///
/// The set may grow between calls, so callers must not cache it.
pub trait ParticleData {
    /// Returns the number of particle types.
    fn n_types(&self) -> usize;

    /// Returns the name of the type with index `type_index`.
    fn name_by_type(&self, type_index: usize) -> String;

    /// Returns all type names, in index order.
    fn type_names(&self) -> Vec<String> {
        (0..self.n_types()).map(|i| self.name_by_type(i)).collect()
    }
}

/// A growable list of particle type names.
///
/// Types can be added through a shared reference so the list can be shared
/// with an integrator while the simulation defines more types.
#[derive(Debug, Default)]
pub struct ParticleTypes {
    names: RefCell<Vec<String>>,
}

impl ParticleTypes {
    /// Creates a type list from names, indexed in order.
    #[must_use]
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: RefCell::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Adds a type and returns its index. Existing names are not duplicated.
    pub fn add_type(&self, name: impl Into<String>) -> usize {
        let name = name.into();
        let mut names = self.names.borrow_mut();
        if let Some(i) = names.iter().position(|n| *n == name) {
            return i;
        }
        names.push(name);
        names.len() - 1
    }
}

impl ParticleData for ParticleTypes {
    fn n_types(&self) -> usize {
        self.names.borrow().len()
    }

    fn name_by_type(&self, type_index: usize) -> String {
        self.names
            .borrow()
            .get(type_index)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{make_ell_params, make_sph_params, IgnoreFlags};

    fn sphere() -> ShapeRecord {
        ShapeRecord::Sphere(make_sph_params(0.5, IgnoreFlags::default()))
    }

    #[test]
    fn install_replaces_record() {
        let mut table = ParamTable::new(ShapeKind::Sphere, 2);
        table.set_param(1, sphere()).unwrap();
        let bigger = ShapeRecord::Sphere(make_sph_params(2.0, IgnoreFlags::default()));
        table.set_param(1, bigger.clone()).unwrap();
        assert_eq!(table.param(1), Some(&bigger));
        assert!(table.param(0).is_none());
    }

    #[test]
    fn rejects_wrong_kind_and_index() {
        let mut table = ParamTable::new(ShapeKind::Sphere, 1);
        let ell = ShapeRecord::Ellipsoid(make_ell_params(1.0, 1.0, 1.0, IgnoreFlags::default()));
        assert!(matches!(
            table.set_param(0, ell),
            Err(EngineError::KindMismatch { .. })
        ));
        assert!(matches!(
            table.set_param(3, sphere()),
            Err(EngineError::TypeIndexOutOfRange { type_index: 3, n_types: 1 })
        ));
        table.resize(4);
        table.set_param(3, sphere()).unwrap();
        assert_eq!(table.n_types(), 4);
    }

    #[test]
    fn particle_types_grow() {
        let types = ParticleTypes::new(["A"]);
        assert_eq!(types.add_type("B"), 1);
        assert_eq!(types.add_type("A"), 0);
        assert_eq!(types.type_names(), ["A", "B"]);
        assert_eq!(types.name_by_type(5), "");
    }
}
