// Evlist Device Scanner
// Walks the input directory and builds one InputDevice per event node

use std::fs;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use crate::capability::{CapabilityProbe, IoctlProbe};
use crate::collection::InputDevices;
use crate::config::ScanPaths;
use crate::device::InputDevice;
use crate::error::{ScanError, ScanResult};
use crate::render::OutputFormat;
use crate::symlink::resolve_alias;

/// Substring the kernel uses in the names of event-interface nodes
const EVENT_NODE_MARKER: &str = "event";

/// Discovers input devices under a set of [`ScanPaths`].
pub struct DeviceScanner<P = IoctlProbe> {
    paths: ScanPaths,
    probe: P,
}

impl DeviceScanner<IoctlProbe> {
    /// Scanner over the standard system locations
    pub fn new() -> Self {
        Self::with_paths(ScanPaths::default())
    }

    /// Scanner over custom locations, probing capabilities with the ioctl
    pub fn with_paths(paths: ScanPaths) -> Self {
        Self::with_probe(paths, IoctlProbe::new())
    }
}

impl Default for DeviceScanner<IoctlProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CapabilityProbe> DeviceScanner<P> {
    pub fn with_probe(paths: ScanPaths, probe: P) -> Self {
        Self { paths, probe }
    }

    pub fn paths(&self) -> &ScanPaths {
        &self.paths
    }

    /// Scan with the default (table) output format
    pub fn scan(&self) -> ScanResult<InputDevices> {
        self.scan_with_format(OutputFormat::default())
    }

    /// Collect every event node into a naturally sorted collection.
    ///
    /// The first filesystem error while reading the input directory or an
    /// alias directory aborts the scan. Unreadable names and capabilities
    /// only leave the corresponding fields empty.
    pub fn scan_with_format(&self, output_format: OutputFormat) -> ScanResult<InputDevices> {
        let input_dir = &self.paths.input_dir;
        let entries = fs::read_dir(input_dir).map_err(|source| ScanError::ReadDir {
            path: input_dir.clone(),
            source,
        })?;

        let mut devices = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::ReadDir {
                path: input_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if !is_event_node(&path) {
                log::trace!("Skipping {}", path.display());
                continue;
            }
            devices.push(self.read_device(path)?);
        }

        log::debug!(
            "Found {} event devices in {}",
            devices.len(),
            input_dir.display()
        );
        Ok(InputDevices::with_format(output_format, devices))
    }

    fn read_device(&self, device_path: PathBuf) -> ScanResult<InputDevice> {
        let name = self.read_name(&device_path);
        let by_id = resolve_alias(&device_path, &self.paths.by_id_dir)?;
        let by_path = resolve_alias(&device_path, &self.paths.by_path_dir)?;
        let capabilities = self.probe.probe(&device_path);

        log::trace!(
            "{}: name={:?} by_id={:?} by_path={:?} capabilities={:?}",
            device_path.display(),
            name,
            by_id,
            by_path,
            capabilities
        );
        Ok(InputDevice::new(device_path, name, by_id, by_path, capabilities))
    }

    /// Display name from sysfs, e.g. `/sys/class/input/event3/device/name`.
    fn read_name(&self, device_path: &Path) -> String {
        let Some(file_name) = device_path.file_name() else {
            return String::new();
        };
        let name_path = self
            .paths
            .sysfs_dir
            .join(file_name)
            .join(&self.paths.name_attribute);

        match fs::read_to_string(&name_path) {
            Ok(name) => name.trim_end_matches(['\n', '\r']).to_string(),
            Err(e) => {
                log::debug!("No name for {}: {}", device_path.display(), e);
                String::new()
            }
        }
    }
}

/// A character device whose file name contains `event`.
///
/// Symlinks are followed, matching how the kernel's nodes are usually
/// reached. Entries whose metadata cannot be read are skipped.
fn is_event_node(path: &Path) -> bool {
    let named_event = path
        .file_name()
        .map(|name| name.to_string_lossy().contains(EVENT_NODE_MARKER))
        .unwrap_or(false);
    if !named_event {
        return false;
    }

    match fs::metadata(path) {
        Ok(metadata) => metadata.file_type().is_char_device(),
        Err(e) => {
            log::debug!("Cannot stat {}: {}", path.display(), e);
            false
        }
    }
}
