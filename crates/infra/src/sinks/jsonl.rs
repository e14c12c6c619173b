// crates/infra/src/sinks/jsonl.rs
use std::io::Write;

use modulo_counter_ports::{Frame, FrameSink, RunHeader, RunSummary};
use modulo_counter_shared_kernel::Result;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Record<'a> {
    Header(&'a RunHeader),
    Frame(&'a Frame),
    Summary(&'a RunSummary),
}

/// One JSON object per line, streamed as the run progresses.
pub struct JsonlSink<W: Write> {
    out: W,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, record: &Record<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> FrameSink for JsonlSink<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        self.emit(&Record::Header(header))
    }

    fn frame(&mut self, frame: &Frame) -> Result<()> {
        self.emit(&Record::Frame(frame))
    }

    fn finish(&mut self, summary: &RunSummary) -> Result<()> {
        self.emit(&Record::Summary(summary))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::sinks::fixtures;

    #[test]
    fn emits_tagged_records_line_by_line() {
        let mut sink = JsonlSink::new(Vec::new());
        fixtures::replay(&mut sink, &fixtures::header(2));
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let records: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).expect("valid line")).collect();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["type"], "header");
        assert_eq!(records[0]["label"], "Binary");
        assert_eq!(records[1]["type"], "frame");
        assert_eq!(records[1]["text"], "00 ");
        assert_eq!(records[4]["type"], "summary");
        assert_eq!(records[4]["wraps"], 0);
    }
}
