pub mod capacity;
pub mod engine;
pub mod error;
pub mod field;
pub mod integrator;
pub mod math;
pub mod record;
pub mod registry;
pub mod shape;

pub use capacity::VertexCapacity;
pub use engine::{OverlapEngine, ParamTable, ParticleData, ParticleTypes};
pub use error::{HpmcError, Result};
pub use field::{FieldValue, ShapeFields};
pub use integrator::{HpmcIntegrator, IntegratorConfig, ShapeParamDict};
pub use record::ShapeRecord;
pub use registry::{ShapeRegistry, TypeSelection};
pub use shape::{ShapeKind, ShapeParam};
