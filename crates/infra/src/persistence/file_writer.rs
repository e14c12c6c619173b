// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use modulo_counter_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, creating missing parent directories.
    pub fn create(path: &Path) -> InfraResult<BufWriter<File>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| output_error(path, e))?;
        }
        File::create(path).map(BufWriter::new).map_err(|e| output_error(path, e))
    }
}

fn output_error(path: &Path, err: std::io::Error) -> InfrastructureError {
    InfrastructureError::OutputError {
        message: format!("cannot create '{}': {err}", path.display()),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn creates_nested_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs/out.txt");
        let mut writer = FileWriter::create(&path).expect("writer created");
        writer.write_all(b"0 1 ").unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(fs::read_to_string(&path).unwrap(), "0 1 ");
    }
}
