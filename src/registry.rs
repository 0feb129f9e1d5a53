//! Per-type shape parameter registry.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::engine::{OverlapEngine, ParticleData};
use crate::error::{RegistryError, Result};
use crate::field::ShapeFields;
use crate::shape::{PackContext, ShapeKind, ShapeParam};

slotmap::new_key_type! {
    /// Identifier of a proxy in the registry arena.
    pub struct ProxyId;
}

/// One or more particle type names addressed by a `set` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSelection<'a> {
    One(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> TypeSelection<'a> {
    /// Returns the selected names in call order.
    #[must_use]
    pub fn names(&self) -> &[&'a str] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl<'a> From<&'a str> for TypeSelection<'a> {
    fn from(name: &'a str) -> Self {
        Self::One(name)
    }
}

impl<'a> From<&'a String> for TypeSelection<'a> {
    fn from(name: &'a String) -> Self {
        Self::One(name)
    }
}

impl<'a> From<&'a [&'a str]> for TypeSelection<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Self::Many(names.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for TypeSelection<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        Self::Many(names)
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for TypeSelection<'a> {
    fn from(names: [&'a str; N]) -> Self {
        Self::Many(names.to_vec())
    }
}

impl<'a> From<&'a [String]> for TypeSelection<'a> {
    fn from(names: &'a [String]) -> Self {
        Self::Many(names.iter().map(String::as_str).collect())
    }
}

/// Maps particle type names to their shape parameter proxies.
///
/// Valid keys are exactly the type names the particle data reports at the
/// time of each lookup. Proxies are created lazily: looking up a known type
/// without a proxy materializes proxies for every known type that lacks one.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    kind: ShapeKind,
    ctx: PackContext,
    proxies: SlotMap<ProxyId, ShapeParam>,
    by_name: HashMap<String, ProxyId>,
}

impl ShapeRegistry {
    /// Creates an empty registry for `kind`, resolving the vertex capacity
    /// once for sized shapes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CapacityError::NoSuitableCapacity`] if a sized
    /// kind cannot hold `max_verts` vertices.
    pub fn new(kind: ShapeKind, max_verts: usize) -> Result<Self> {
        let ctx = PackContext::new(kind, max_verts)?;
        Ok(Self {
            kind,
            ctx,
            proxies: SlotMap::with_key(),
            by_name: HashMap::new(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the settings every packer of this registry runs with.
    #[must_use]
    pub fn pack_context(&self) -> PackContext {
        self.ctx
    }

    /// Returns the number of proxies created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Iterates over existing proxies in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeParam> {
        self.proxies.values()
    }

    /// Returns the proxy for `name` if it was already created.
    #[must_use]
    pub fn proxy(&self, name: &str) -> Option<&ShapeParam> {
        self.by_name.get(name).and_then(|&id| self.proxies.get(id))
    }

    /// Creates proxies for every current particle type that lacks one.
    ///
    /// Returns the number of proxies created.
    pub fn reconcile(&mut self, particles: &dyn ParticleData) -> usize {
        let mut created = 0;
        for type_index in 0..particles.n_types() {
            let name = particles.name_by_type(type_index);
            if self.by_name.contains_key(&name) {
                continue;
            }
            let id = self
                .proxies
                .insert(ShapeParam::new(self.kind, type_index, name.clone()));
            self.by_name.insert(name, id);
            created += 1;
        }
        if created > 0 {
            tracing::debug!(created, kind = %self.kind, "created shape parameter proxies");
        }
        created
    }

    fn ensure_known(particles: &dyn ParticleData, name: &str) -> Result<()> {
        if particles.type_names().iter().any(|n| n == name) {
            Ok(())
        } else {
            Err(RegistryError::UnknownType {
                name: name.to_owned(),
            }
            .into())
        }
    }

    /// Returns the live proxy for `name`, creating missing proxies first.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] if `name` is not a current
    /// particle type, or [`RegistryError::ProxyCreation`] if no proxy exists
    /// for it even after reconciliation.
    pub fn get(&mut self, particles: &dyn ParticleData, name: &str) -> Result<&mut ShapeParam> {
        tracing::trace!(name, "shape parameter lookup");
        Self::ensure_known(particles, name)?;
        if !self.by_name.contains_key(name) {
            self.reconcile(particles);
        }
        let proxy_creation = || RegistryError::ProxyCreation {
            name: name.to_owned(),
        };
        let id = *self.by_name.get(name).ok_or_else(proxy_creation)?;
        Ok(self.proxies.get_mut(id).ok_or_else(proxy_creation)?)
    }

    /// Sets the same shape fields on one or more particle types.
    ///
    /// Every name is checked against the current particle types before any
    /// proxy is touched. Packing then proceeds type by type and is not
    /// atomic: if packing fails for one type, the types before it keep
    /// their new records.
    ///
    /// # Errors
    ///
    /// Returns the first lookup, validation or install error encountered.
    pub fn set<'t>(
        &mut self,
        particles: &dyn ParticleData,
        engine: &mut dyn OverlapEngine,
        types: impl Into<TypeSelection<'t>>,
        fields: &ShapeFields,
    ) -> Result<()> {
        let types = types.into();
        for name in types.names() {
            Self::ensure_known(particles, name)?;
        }
        engine.resize(particles.n_types());
        let ctx = self.ctx;
        for name in types.names() {
            self.get(particles, name)?.set(engine, &ctx, fields)?;
        }
        Ok(())
    }

    /// Verifies that every current particle type has its shape set.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IncompleteShapeSpecification`] listing every
    /// type without a set shape.
    pub fn check_complete(&self, particles: &dyn ParticleData) -> Result<()> {
        let missing: Vec<String> = particles
            .type_names()
            .into_iter()
            .filter(|name| !self.proxy(name).is_some_and(ShapeParam::is_set))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::IncompleteShapeSpecification { missing }.into())
        }
    }
}
