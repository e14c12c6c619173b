// crates/infra/src/sinks/structured.rs
use std::io::Write;

use modulo_counter_ports::{Frame, FrameSink, RunHeader, RunSummary};
use modulo_counter_shared_kernel::{InfrastructureError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredFormat {
    Json,
    Yaml,
}

#[derive(Serialize)]
struct RunDocument<'a> {
    header: &'a RunHeader,
    frames: &'a [Frame],
    summary: &'a RunSummary,
}

/// Buffers the whole run and writes it as one JSON or YAML document on `finish`.
///
/// Memory grows with the number of frames; [`JsonlSink`](super::JsonlSink) streams instead.
pub struct StructuredSink<W: Write> {
    out: W,
    format: StructuredFormat,
    header: Option<RunHeader>,
    frames: Vec<Frame>,
}

impl<W: Write> StructuredSink<W> {
    pub fn new(out: W, format: StructuredFormat) -> Self {
        Self { out, format, header: None, frames: Vec::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for StructuredSink<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        self.header = Some(header.clone());
        self.frames.clear();
        Ok(())
    }

    fn frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        let header = self.header.as_ref().ok_or_else(|| InfrastructureError::OutputError {
            message: "run finished before it began".to_string(),
            source: None,
        })?;
        let document = RunDocument { header, frames: &self.frames, summary };
        match self.format {
            StructuredFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, &document)?;
                writeln!(self.out)?;
            }
            StructuredFormat::Yaml => serde_yaml::to_writer(&mut self.out, &document)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
