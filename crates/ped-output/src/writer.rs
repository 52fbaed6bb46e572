//! The `TrajectoryWriter` trait implemented by all backend writers.

use ped_agent::Pedestrian;

use crate::OutputResult;

/// Trait implemented by trajectory file writers.
///
/// Writers put their header in place when they are constructed, so a
/// freshly created writer is immediately ready for [`write_step`].
///
/// [`write_step`]: TrajectoryWriter::write_step
pub trait TrajectoryWriter {
    /// Write one row per pedestrian for the given frame.
    fn write_step(&mut self, frame: u64, agents: &[Pedestrian]) -> OutputResult<()>;

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
