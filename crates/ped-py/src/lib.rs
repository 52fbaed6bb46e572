//! `ped-py` — the `pedcore` Python extension module.
//!
//! A pure adapter over `ped-core`, `ped-geometry`, and `ped-agent`: every
//! Python class is a thin wrapper struct holding its Rust counterpart **by
//! value**, constructors mirror the Rust constructors one-to-one, and
//! `str`/`repr` forward to the `Display` impls.  No invariant lives here.
//!
//! ```python
//! from pedcore import Agent, Coordinate, LengthUnit, Level, Units
//!
//! c = Coordinate(LengthUnit(1, Units.m), LengthUnit(2, Units.m), Level(3))
//! a = Agent(c)
//! print(a)          # PED 1:((1.0000 m, 2.0000 m, 3))
//! a.pos = Coordinate(LengthUnit(0.5, Units.m), LengthUnit(2, Units.m), Level(3))
//! ```

use pyo3::prelude::*;

mod agent;
mod geometry;

pub use agent::PyAgent;
pub use geometry::{
    PyArea, PyCoordinate, PyLengthUnit, PyLevel, PyLineSegment, PySpatialVector, PySpecialArea,
    PyUnits,
};


/// The `pedcore` module: core value types of the pedestrian simulator.
#[pymodule]
fn pedcore(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyUnits>()?;
    m.add_class::<PyLengthUnit>()?;
    m.add_class::<PyLevel>()?;
    m.add_class::<PySpatialVector>()?;
    m.add_class::<PyCoordinate>()?;
    m.add_class::<PyLineSegment>()?;
    m.add_class::<PyArea>()?;
    m.add_class::<PySpecialArea>()?;
    m.add_class::<PyAgent>()?;
    Ok(())
}
