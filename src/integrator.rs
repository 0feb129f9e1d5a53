use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::engine::{OverlapEngine, ParamTable, ParticleData};
use crate::error::Result;
use crate::field::ShapeFields;
use crate::registry::{ShapeRegistry, TypeSelection};
use crate::shape::{ShapeKind, ShapeParam};

/// Default vertex limit for polyhedron shapes.
pub const DEFAULT_MAX_VERTS: usize = 64;

fn default_max_verts() -> usize {
    DEFAULT_MAX_VERTS
}

/// Integrator settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Shape family shared by all particle types.
    pub kind: ShapeKind,
    /// Maximum number of vertices per polyhedron shape.
    #[serde(default = "default_max_verts")]
    pub max_verts: usize,
}

impl IntegratorConfig {
    /// Creates a configuration with the default vertex limit.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            max_verts: DEFAULT_MAX_VERTS,
        }
    }

    /// Sets the maximum number of vertices per polyhedron shape.
    #[must_use]
    pub fn with_max_verts(mut self, max_verts: usize) -> Self {
        self.max_verts = max_verts;
        self
    }
}

/// Owner of the shape registry for one hard-particle Monte Carlo integrator.
pub struct HpmcIntegrator<E: OverlapEngine = ParamTable> {
    config: IntegratorConfig,
    particles: Rc<dyn ParticleData>,
    engine: E,
    registry: ShapeRegistry,
}

impl HpmcIntegrator<ParamTable> {
    /// Creates an integrator backed by an in-memory parameter table.
    ///
    /// # Errors
    ///
    /// Returns an error if no vertex capacity covers `config.max_verts`.
    pub fn with_param_table(config: IntegratorConfig, particles: Rc<dyn ParticleData>) -> Result<Self> {
        let engine = ParamTable::new(config.kind, particles.n_types());
        Self::new(config, particles, engine)
    }
}

impl<E: OverlapEngine> HpmcIntegrator<E> {
    /// Creates an integrator.
    ///
    /// # Errors
    ///
    /// Returns an error if no vertex capacity covers `config.max_verts`.
    pub fn new(config: IntegratorConfig, particles: Rc<dyn ParticleData>, engine: E) -> Result<Self> {
        let registry = ShapeRegistry::new(config.kind, config.max_verts)?;
        Ok(Self {
            config,
            particles,
            engine,
            registry,
        })
    }

    #[must_use]
    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Returns the per-type shape parameter dictionary.
    pub fn shape_param(&mut self) -> ShapeParamDict<'_> {
        ShapeParamDict {
            registry: &mut self.registry,
            particles: self.particles.as_ref(),
            engine: &mut self.engine,
        }
    }

    /// Creates shape proxies for any particle types defined since the last call.
    pub fn initialize_shape_params(&mut self) -> usize {
        self.registry.reconcile(self.particles.as_ref())
    }

    /// Checks that the integrator is ready to run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RegistryError::IncompleteShapeSpecification`]
    /// if any particle type has no shape set.
    pub fn prepare_run(&self) -> Result<()> {
        self.registry.check_complete(self.particles.as_ref())
    }
}

/// Borrowed view of an integrator's shape parameters, keyed by type name.
pub struct ShapeParamDict<'a> {
    registry: &'a mut ShapeRegistry,
    particles: &'a dyn ParticleData,
    engine: &'a mut dyn OverlapEngine,
}

impl ShapeParamDict<'_> {
    /// Returns the live proxy of a particle type.
    ///
    /// # Errors
    ///
    /// See [`ShapeRegistry::get`].
    pub fn get(&mut self, type_name: &str) -> Result<&mut ShapeParam> {
        self.registry.get(self.particles, type_name)
    }

    /// Sets shape fields on one or more particle types.
    ///
    /// # Errors
    ///
    /// See [`ShapeRegistry::set`].
    pub fn set<'t>(&mut self, types: impl Into<TypeSelection<'t>>, fields: &ShapeFields) -> Result<()> {
        self.registry.set(self.particles, self.engine, types, fields)
    }
}
