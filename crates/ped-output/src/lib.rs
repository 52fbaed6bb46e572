//! `ped-output` — trajectory file writers for the `rust_ped` framework.
//!
//! A trajectory file records where every pedestrian stood at every recorded
//! frame.  The stepping loop drives a [`TrajectoryWriter`] once per output
//! frame; the writer owns its file handle and flushes on [`finish`].
//!
//! [`finish`]: TrajectoryWriter::finish
//!
//! # Crate layout
//!
//! | Module     | Contents                                     |
//! |------------|----------------------------------------------|
//! | [`writer`] | The `TrajectoryWriter` trait                 |
//! | [`txt`]    | `SimpleTrajectoryWriter` (plain-text rows)   |
//! | [`error`]  | `OutputError`, `OutputResult`                |

pub mod error;
pub mod txt;
pub mod writer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{OutputError, OutputResult};
pub use txt::SimpleTrajectoryWriter;
pub use writer::TrajectoryWriter;
