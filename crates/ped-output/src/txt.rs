//! Plain-text trajectory backend.
//!
//! Produces the space-delimited format consumed by the visualisation tools:
//!
//! ```text
//! frame ID x y z
//! 0 1 0.5 0 1
//! 0 2 21 12 1
//! 1 1 0.6 0 1
//! ```
//!
//! `x` and `y` are meters; `z` is the level id.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use ped_agent::Pedestrian;

use crate::OutputResult;
use crate::writer::TrajectoryWriter;

/// Writes one space-delimited row per pedestrian per frame.
pub struct SimpleTrajectoryWriter {
    out: Writer<File>,
    finished: bool,
}

impl SimpleTrajectoryWriter {
    /// Create (or truncate) the trajectory file at `path` and write the
    /// header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut out = WriterBuilder::new().delimiter(b' ').from_path(path)?;
        out.write_record(["frame", "ID", "x", "y", "z"])?;
        Ok(Self {
            out,
            finished: false,
        })
    }
}

impl TrajectoryWriter for SimpleTrajectoryWriter {
    fn write_step(&mut self, frame: u64, agents: &[Pedestrian]) -> OutputResult<()> {
        for agent in agents {
            self.out.write_record(&[
                frame.to_string(),
                agent.id().to_string(),
                agent.pos.x.as_meters().to_string(),
                agent.pos.y.as_meters().to_string(),
                agent.pos.lvl.id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
