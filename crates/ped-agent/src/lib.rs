//! `ped-agent` — the pedestrian entity for the `rust_ped` framework.
//!
//! A pedestrian is the smallest simulated thing: a unique id plus a mutable
//! position.  Everything that makes it move — routing, social forces,
//! collision handling — lives in the simulation kernels that own a
//! collection of these.

pub mod pedestrian;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use pedestrian::{Agent, Pedestrian};
