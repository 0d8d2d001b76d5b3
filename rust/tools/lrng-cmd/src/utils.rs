//! Common utilities for lrng-cmd

use anyhow::{Context, Result};
use std::{fs, io::Read, path::Path};

/// Path argument meaning "read from stdin" / "write to stdout".
pub const STDIO_PATH: &str = "-";

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Reads the whole input, either from a file or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == STDIO_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    validate_file_exists(path)?;
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

/// Writes `text` to the given file, or to stdout when no file (or `-`) is given.
pub fn write_output(text: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) if path != STDIO_PATH => {
            fs::write(path, text).with_context(|| format!("Failed to write file: {}", path))?;
            log::info!("Output written to: {}", path);
        }
        _ => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_exists() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_file_exists(file.path().to_str().unwrap()).is_ok());

        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_str().unwrap();
        assert!(validate_file_exists(dir_path).is_err());
        let missing = dir.path().join("missing.json");
        assert!(validate_file_exists(missing.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let path = path.to_str().unwrap();
        write_output("[]", Some(path)).unwrap();
        assert_eq!(read_input(path).unwrap(), "[]");
    }
}
