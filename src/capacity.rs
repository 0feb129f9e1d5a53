use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CapacityError;

/// Fixed vertex capacity of a polyhedron record layout.
///
/// Polyhedron-family records reserve storage for a fixed number of vertices
/// so the overlap engine can bound per-shape memory. Each integrator picks one
/// capacity when it is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VertexCapacity {
    V8,
    V16,
    V32,
    V64,
    V128,
}

impl VertexCapacity {
    /// All available capacities, smallest first.
    pub const ALL: [Self; 5] = [Self::V8, Self::V16, Self::V32, Self::V64, Self::V128];

    /// Returns the number of vertices this layout can hold.
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            Self::V8 => 8,
            Self::V16 => 16,
            Self::V32 => 32,
            Self::V64 => 64,
            Self::V128 => 128,
        }
    }

    /// Returns the smallest capacity that holds `max_verts` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::NoSuitableCapacity`] if `max_verts` exceeds the
    /// largest layout.
    pub fn resolve(max_verts: usize) -> Result<Self, CapacityError> {
        let resolved = Self::ALL
            .into_iter()
            .find(|c| c.get() >= max_verts)
            .ok_or(CapacityError::NoSuitableCapacity {
                requested: max_verts,
                largest: Self::V128.get(),
            })?;
        tracing::debug!(max_verts, capacity = resolved.get(), "resolved vertex capacity");
        Ok(resolved)
    }
}

impl fmt::Display for VertexCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_capacity() {
        assert_eq!(VertexCapacity::resolve(8).unwrap(), VertexCapacity::V8);
        assert_eq!(VertexCapacity::resolve(64).unwrap(), VertexCapacity::V64);
        assert_eq!(VertexCapacity::resolve(128).unwrap(), VertexCapacity::V128);
    }

    #[test]
    fn resolves_next_larger_capacity() {
        assert_eq!(VertexCapacity::resolve(0).unwrap(), VertexCapacity::V8);
        assert_eq!(VertexCapacity::resolve(9).unwrap(), VertexCapacity::V16);
        assert_eq!(VertexCapacity::resolve(100).unwrap(), VertexCapacity::V128);
    }

    #[test]
    fn rejects_oversized_request() {
        match VertexCapacity::resolve(129) {
            Err(CapacityError::NoSuitableCapacity { requested, largest }) => {
                assert_eq!(requested, 129);
                assert_eq!(largest, 128);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn capacities_are_sorted() {
        let sizes: Vec<usize> = VertexCapacity::ALL.iter().map(|c| c.get()).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }
}
