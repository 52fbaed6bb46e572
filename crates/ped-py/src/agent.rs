//! Python class for the pedestrian entity.

use pyo3::prelude::*;

use ped_agent::Agent;

use crate::geometry::PyCoordinate;

/// A pedestrian with a unique id and a read/write position.
///
/// Equality is id equality, as for the Rust entity: two agents constructed
/// at the same coordinate are distinct.
#[pyclass(name = "Agent", eq)]
pub struct PyAgent {
    pub(crate) inner: Agent,
}

#[pymethods]
impl PyAgent {
    #[new]
    fn new(pos: PyCoordinate) -> Self {
        Self {
            inner: Agent::new(pos.inner),
        }
    }

    /// The process-unique pedestrian id (read-only).
    #[getter]
    fn id(&self) -> u64 {
        self.inner.id().value()
    }

    #[getter]
    fn pos(&self) -> PyCoordinate {
        PyCoordinate {
            inner: self.inner.pos,
        }
    }

    #[setter]
    fn set_pos(&mut self, pos: PyCoordinate) {
        self.inner.pos = pos.inner;
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

impl PartialEq for PyAgent {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
