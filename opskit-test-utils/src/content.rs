//! Content file fixtures for testing
//!
//! Provides a temp file pre-filled with content, for tests exercising the
//! file branch of content resolution.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tempfile::NamedTempFile;

/// A temp file holding fixture content, removed on drop
pub struct ContentFileGuard {
  file: NamedTempFile,
}

impl ContentFileGuard {
  /// Create a temp file holding the given content
  pub fn new(content: &[u8]) -> Result<Self> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(Self { file })
  }

  /// Path to the fixture file
  pub fn path(&self) -> &Path {
    self.file.path()
  }

  /// Path to the fixture file as a string value for option fields
  pub fn path_string(&self) -> String {
    self.file.path().to_string_lossy().to_string()
  }
}
