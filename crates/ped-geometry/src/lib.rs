//! `ped-geometry` — geometric value types for the `rust_ped` framework.
//!
//! Everything here is a plain value built bottom-up from [`ped_core::Length`]:
//! coordinates own their lengths, segments own their coordinates, areas own
//! their vertex sequence.  Copies are deep; no type holds a reference.
//!
//! # Crate layout
//!
//! | Module           | Contents                           |
//! |------------------|------------------------------------|
//! | [`level`]        | `Level` (floor identifier)         |
//! | [`vector`]       | `SpatialVector`                    |
//! | [`coordinate`]   | `Coordinate`                       |
//! | [`line_segment`] | `LineSegment`                      |
//! | [`area`]         | `Area`, `SpecialArea`              |

pub mod area;
pub mod coordinate;
pub mod level;
pub mod line_segment;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::{Area, SpecialArea};
pub use coordinate::Coordinate;
pub use level::Level;
pub use line_segment::LineSegment;
pub use vector::SpatialVector;
