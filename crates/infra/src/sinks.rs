// crates/infra/src/sinks.rs
pub mod jsonl;
pub mod structured;
pub mod text;

use std::io::Write;

use modulo_counter_domain::OutputFormat;
use modulo_counter_ports::FrameSink;

pub use jsonl::JsonlSink;
pub use structured::{StructuredFormat, StructuredSink};
pub use text::TextSink;

/// Picks the sink that renders `format` into `out`.
pub fn sink_for<'w, W: Write + 'w>(format: OutputFormat, out: W) -> Box<dyn FrameSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Json => Box::new(StructuredSink::new(out, StructuredFormat::Json)),
        OutputFormat::Yaml => Box::new(StructuredSink::new(out, StructuredFormat::Yaml)),
        OutputFormat::Jsonl => Box::new(JsonlSink::new(out)),
    }
}
