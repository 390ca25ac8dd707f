// Shared fixtures: a fake /dev/input + /sys/class/input tree

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use evlist_core::{CapabilityProbe, DeviceScanner, ScanPaths};
use tempfile::TempDir;

/// Capabilities keyed by node file name
#[derive(Debug, Clone, Default)]
pub struct FakeProbe {
    capabilities: HashMap<String, Vec<String>>,
}

impl FakeProbe {
    pub fn with(mut self, node: &str, capabilities: &[&str]) -> Self {
        self.capabilities.insert(
            node.to_string(),
            capabilities.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl CapabilityProbe for FakeProbe {
    fn probe(&self, device_path: &Path) -> Vec<String> {
        device_path
            .file_name()
            .and_then(|name| self.capabilities.get(name.to_string_lossy().as_ref()))
            .cloned()
            .unwrap_or_default()
    }
}

/// Temporary device tree. Nodes are symlinks to `/dev/null`, which is a
/// character device, so they pass the same checks real event nodes do.
pub struct Fixture {
    _root: TempDir,
    pub paths: ScanPaths,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let paths = ScanPaths::rooted(root.path().join("input"), root.path().join("sys"));
        fs::create_dir_all(&paths.by_id_dir).unwrap();
        fs::create_dir_all(&paths.by_path_dir).unwrap();
        fs::create_dir_all(&paths.sysfs_dir).unwrap();
        Self { _root: root, paths }
    }

    /// Add a character device node, optionally with a sysfs display name
    pub fn node(&self, file_name: &str, display_name: Option<&str>) -> &Self {
        symlink("/dev/null", self.paths.input_dir.join(file_name)).unwrap();
        if let Some(display_name) = display_name {
            let attr = self.paths.sysfs_dir.join(file_name).join("device");
            fs::create_dir_all(&attr).unwrap();
            fs::write(attr.join("name"), format!("{display_name}\n")).unwrap();
        }
        self
    }

    /// Add a `by-id` alias pointing at `../target`
    pub fn by_id(&self, alias: &str, target: &str) -> &Self {
        symlink(format!("../{target}"), self.paths.by_id_dir.join(alias)).unwrap();
        self
    }

    /// Add a `by-path` alias pointing at `../target`
    pub fn by_path(&self, alias: &str, target: &str) -> &Self {
        symlink(format!("../{target}"), self.paths.by_path_dir.join(alias)).unwrap();
        self
    }

    pub fn node_path(&self, file_name: &str) -> PathBuf {
        self.paths.input_dir.join(file_name)
    }

    pub fn by_id_path(&self, alias: &str) -> PathBuf {
        self.paths.by_id_dir.join(alias)
    }

    pub fn by_path_path(&self, alias: &str) -> PathBuf {
        self.paths.by_path_dir.join(alias)
    }

    pub fn scanner(&self, probe: FakeProbe) -> DeviceScanner<FakeProbe> {
        DeviceScanner::with_probe(self.paths.clone(), probe)
    }
}
