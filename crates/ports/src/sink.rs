// crates/ports/src/sink.rs
use modulo_counter_shared_kernel::Result;

use crate::frames::{Frame, RunHeader, RunSummary};

pub trait FrameSink {
    fn begin(&mut self, header: &RunHeader) -> Result<()>;
    fn frame(&mut self, frame: &Frame) -> Result<()>;
    fn finish(&mut self, summary: &RunSummary) -> Result<()>;
}
