//! Combine configuration.
//!
//! Holds the file names a post-build run needs. Relative names are resolved
//! against `project_dir`; absolute names are used as given.

use std::path::{Path, PathBuf};

/// Default bootloader image, relative to the project directory.
pub const DEFAULT_BOOTLOADER: &str = "bootloader.hex";

/// Default combined output image, relative to the project directory.
pub const DEFAULT_OUTPUT: &str = "combined.hex";

/// What to do when records of the merged image cover the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Pass overlapping records through silently.
    Allow,
    /// Pass overlapping records through and log each overlap.
    #[default]
    Warn,
    /// Fail before any output is written.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    pub project_dir: PathBuf,
    pub bootloader: PathBuf,
    pub output: PathBuf,
    pub overlap_policy: OverlapPolicy,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            bootloader: PathBuf::from(DEFAULT_BOOTLOADER),
            output: PathBuf::from(DEFAULT_OUTPUT),
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

impl CombineConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_bootloader(mut self, bootloader: impl Into<PathBuf>) -> Self {
        self.bootloader = bootloader.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    pub fn bootloader_path(&self) -> PathBuf {
        self.project_dir.join(&self.bootloader)
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_dir.join(&self.output)
    }
}

/// The Intel-HEX file produced next to a linked ELF image.
pub fn firmware_hex_path(elf: &Path) -> PathBuf {
    elf.with_extension("hex")
}
