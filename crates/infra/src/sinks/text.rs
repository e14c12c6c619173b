// crates/infra/src/sinks/text.rs
use std::io::Write;

use modulo_counter_ports::{Frame, FrameSink, RunHeader, RunSummary};
use modulo_counter_shared_kernel::Result;

/// Console layout: a banner naming the counter, then every frame on one line.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        if header.radix.is_some() {
            writeln!(self.out, "{} counter is generated:", header.label)?;
        } else {
            writeln!(self.out, "Invalid counter")?;
        }
        // Multi-digit banners are followed by a blank line.
        let kind = if header.is_single_digit() {
            "Single"
        } else {
            writeln!(self.out)?;
            "Multi"
        };
        writeln!(self.out, "{} Increment for {kind}-Digit Counter:", header.mode)?;
        Ok(())
    }

    fn frame(&mut self, frame: &Frame) -> Result<()> {
        self.out.write_all(frame.text.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> Result<()> {
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
