// crates/shared-kernel/tests/error_context.rs
use std::io;

use modulo_counter_shared_kernel::{CounterError, DomainError, ErrorContext};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(CounterError::from)
        .context("writing frames")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing frames"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_wraps_domain_errors() {
    let result: Result<(), DomainError> = Err(DomainError::UnsupportedBase { radix: 7 });
    let err = result.with_context(|| "resolving base".to_string()).unwrap_err();

    let display = err.to_string();
    assert!(display.starts_with("resolving base: Domain error:"));
    assert!(display.contains("Unsupported base 7"));
}
