//! Python classes for the geometric value types.

use pyo3::prelude::*;

use ped_core::{Identified, Length, Units};
use ped_geometry::{Area, Coordinate, Level, LineSegment, SpatialVector, SpecialArea};

// ── Units ─────────────────────────────────────────────────────────────────────

/// Length units, int-valued as their decimal exponent relative to meter.
#[pyclass(name = "Units", eq, eq_int)]
#[derive(Copy, Clone, PartialEq)]
pub enum PyUnits {
    #[pyo3(name = "um")]
    Micrometer = -6,
    #[pyo3(name = "mm")]
    Millimeter = -3,
    #[pyo3(name = "cm")]
    Centimeter = -2,
    #[pyo3(name = "dm")]
    Decimeter = -1,
    #[pyo3(name = "m")]
    Meter = 0,
    #[pyo3(name = "km")]
    Kilometer = 3,
}

impl From<PyUnits> for Units {
    fn from(unit: PyUnits) -> Units {
        match unit {
            PyUnits::Micrometer => Units::Micrometer,
            PyUnits::Millimeter => Units::Millimeter,
            PyUnits::Centimeter => Units::Centimeter,
            PyUnits::Decimeter => Units::Decimeter,
            PyUnits::Meter => Units::Meter,
            PyUnits::Kilometer => Units::Kilometer,
        }
    }
}

// ── LengthUnit ────────────────────────────────────────────────────────────────

/// A unit-tagged length quantity.
#[pyclass(name = "LengthUnit", eq, ord)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct PyLengthUnit {
    pub(crate) inner: Length,
}

#[pymethods]
impl PyLengthUnit {
    #[new]
    fn new(quantity: f64, unit: PyUnits) -> Self {
        Self {
            inner: Length::from_f64(quantity, unit.into()),
        }
    }

    /// The magnitude in meters, as a float.
    #[getter]
    fn m(&self) -> f64 {
        self.inner.as_meters()
    }

    /// The magnitude expressed in `unit`, truncated toward zero.
    #[pyo3(signature = (unit = PyUnits::Micrometer))]
    fn get_in(&self, unit: PyUnits) -> i64 {
        self.inner.get_in(unit.into())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── Level ─────────────────────────────────────────────────────────────────────

/// A floor identifier; defaults to the ground floor.
#[pyclass(name = "Level", eq, ord)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct PyLevel {
    pub(crate) inner: Level,
}

#[pymethods]
impl PyLevel {
    #[new]
    #[pyo3(signature = (id = 1))]
    fn new(id: i32) -> Self {
        Self {
            inner: Level::new(id),
        }
    }

    #[getter]
    fn id(&self) -> i32 {
        self.inner.id
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── SpatialVector ─────────────────────────────────────────────────────────────

/// A planar (x, y) displacement.
#[pyclass(name = "SpatialVector", eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct PySpatialVector {
    pub(crate) inner: SpatialVector,
}

#[pymethods]
impl PySpatialVector {
    #[new]
    fn new(x: PyLengthUnit, y: PyLengthUnit) -> Self {
        Self {
            inner: SpatialVector::new(x.inner, y.inner),
        }
    }

    #[getter]
    fn x(&self) -> PyLengthUnit {
        PyLengthUnit {
            inner: self.inner.x,
        }
    }

    #[getter]
    fn y(&self) -> PyLengthUnit {
        PyLengthUnit {
            inner: self.inner.y,
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── Coordinate ────────────────────────────────────────────────────────────────

/// An (x, y, level) position.
#[pyclass(name = "Coordinate", eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct PyCoordinate {
    pub(crate) inner: Coordinate,
}

#[pymethods]
impl PyCoordinate {
    #[new]
    fn new(x: PyLengthUnit, y: PyLengthUnit, lvl: PyLevel) -> Self {
        Self {
            inner: Coordinate::new(x.inner, y.inner, lvl.inner),
        }
    }

    #[getter]
    fn x(&self) -> PyLengthUnit {
        PyLengthUnit {
            inner: self.inner.x,
        }
    }

    #[getter]
    fn y(&self) -> PyLengthUnit {
        PyLengthUnit {
            inner: self.inner.y,
        }
    }

    #[getter]
    fn lvl(&self) -> PyLevel {
        PyLevel {
            inner: self.inner.lvl,
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── LineSegment ───────────────────────────────────────────────────────────────

/// An ordered pair of coordinates.
#[pyclass(name = "LineSegment", eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct PyLineSegment {
    pub(crate) inner: LineSegment,
}

#[pymethods]
impl PyLineSegment {
    #[new]
    fn new(start: PyCoordinate, end: PyCoordinate) -> Self {
        Self {
            inner: LineSegment::new(start.inner, end.inner),
        }
    }

    #[getter]
    fn start(&self) -> PyCoordinate {
        PyCoordinate {
            inner: self.inner.start(),
        }
    }

    #[getter]
    fn end(&self) -> PyCoordinate {
        PyCoordinate {
            inner: self.inner.end(),
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

/// An ordered polygon of coordinates.
#[pyclass(name = "Area", eq)]
#[derive(Clone, PartialEq)]
pub struct PyArea {
    pub(crate) inner: Area,
}

#[pymethods]
impl PyArea {
    /// Builds the area from a list of coordinates; the list is copied.
    #[new]
    fn new(polygon: Vec<PyCoordinate>) -> Self {
        Self {
            inner: Area::new(polygon.into_iter().map(|c| c.inner).collect()),
        }
    }

    /// The vertices in construction order.
    #[getter]
    fn polygon(&self) -> Vec<PyCoordinate> {
        self.inner
            .polygon()
            .iter()
            .map(|&inner| PyCoordinate { inner })
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.vertex_count()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── SpecialArea ───────────────────────────────────────────────────────────────

/// An area with a classification tag and a unique id.
#[pyclass(name = "SpecialArea", eq)]
pub struct PySpecialArea {
    pub(crate) inner: SpecialArea,
}

#[pymethods]
impl PySpecialArea {
    #[new]
    fn new(area: PyArea, tag: u32) -> Self {
        Self {
            inner: SpecialArea::new(area.inner, tag),
        }
    }

    #[getter]
    fn id(&self) -> u64 {
        self.inner.id().value()
    }

    #[getter]
    fn area(&self) -> PyArea {
        PyArea {
            inner: self.inner.area().clone(),
        }
    }

    #[getter]
    fn tag(&self) -> u32 {
        self.inner.tag()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

impl PartialEq for PySpecialArea {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
