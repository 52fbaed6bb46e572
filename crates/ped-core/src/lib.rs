//! `ped-core` — foundational value types for the `rust_ped` pedestrian
//! simulation framework.
//!
//! This crate is a dependency of every other `ped-*` crate.  It intentionally
//! has no `ped-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`length`]  | `Units`, `Length`, `LengthExt` suffix helpers     |
//! | [`ids`]     | `PedestrianId`, `SpecialAreaId`, `Identified`     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the pure value types. |

pub mod ids;
pub mod length;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{Identified, PedestrianId, SpecialAreaId};
pub use length::{Length, LengthExt, Units};
