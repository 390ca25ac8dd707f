// Evlist Configuration
// Validated listing options and the filesystem locations to scan

use std::path::{Path, PathBuf};

use crate::filter::DeviceFilter;
use crate::render::OutputFormat;

/// Options for one listing run, as produced by argument parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfig {
    pub format: OutputFormat,
    pub use_regex: bool,
    pub filters: Vec<DeviceFilter>,
}

/// Where device nodes, their aliases and their names live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPaths {
    /// Directory of event-interface nodes
    pub input_dir: PathBuf,
    /// Symlinks named by hardware identity
    pub by_id_dir: PathBuf,
    /// Symlinks named by bus topology
    pub by_path_dir: PathBuf,
    /// sysfs class directory with one entry per node
    pub sysfs_dir: PathBuf,
    /// Name attribute, relative to a node's sysfs entry
    pub name_attribute: PathBuf,
}

impl ScanPaths {
    pub const INPUT_DIR: &'static str = "/dev/input";
    pub const SYSFS_DIR: &'static str = "/sys/class/input";
    pub const NAME_ATTRIBUTE: &'static str = "device/name";

    /// Paths laid out like the system ones, under custom roots: aliases
    /// live in `by-id` and `by-path` inside `input_dir`.
    pub fn rooted(input_dir: impl Into<PathBuf>, sysfs_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        Self {
            by_id_dir: input_dir.join("by-id"),
            by_path_dir: input_dir.join("by-path"),
            input_dir,
            sysfs_dir: sysfs_dir.into(),
            name_attribute: PathBuf::from(Self::NAME_ATTRIBUTE),
        }
    }

    /// Replace the input directory, moving the alias directories along with it
    pub fn with_input_dir(self, input_dir: impl AsRef<Path>) -> Self {
        Self {
            name_attribute: self.name_attribute,
            ..Self::rooted(input_dir.as_ref(), self.sysfs_dir)
        }
    }
}

impl Default for ScanPaths {
    fn default() -> Self {
        Self::rooted(Self::INPUT_DIR, Self::SYSFS_DIR)
    }
}
