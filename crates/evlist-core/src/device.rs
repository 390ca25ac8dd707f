// Evlist Input Device
// One discovered event-interface node and what is known about it

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::natural::natural_cmp;

/// A discovered input device.
///
/// Built once by the scanner and never modified afterwards. Equality is
/// structural; ordering for listing purposes is [`InputDevice::natural_cmp`],
/// which only looks at the device path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDevice {
    device_path: PathBuf,
    name: String,
    by_id: Option<PathBuf>,
    by_path: Option<PathBuf>,
    capabilities: Vec<String>,
}

impl InputDevice {
    /// Create a new device record
    ///
    /// # Arguments
    /// * `device_path` - Path of the event node, e.g. `/dev/input/event3`
    /// * `name` - Display name from sysfs, empty when unreadable
    /// * `by_id` - Alias under `/dev/input/by-id`, if any
    /// * `by_path` - Alias under `/dev/input/by-path`, if any
    /// * `capabilities` - Event type names in ascending code order
    pub fn new(
        device_path: impl Into<PathBuf>,
        name: impl Into<String>,
        by_id: Option<PathBuf>,
        by_path: Option<PathBuf>,
        capabilities: Vec<String>,
    ) -> Self {
        Self {
            device_path: device_path.into(),
            name: name.into(),
            by_id,
            by_path,
            capabilities,
        }
    }

    pub fn device_path(&self) -> &Path {
        &self.device_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn by_id(&self) -> Option<&Path> {
        self.by_id.as_deref()
    }

    pub fn by_path(&self) -> Option<&Path> {
        self.by_path.as_deref()
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Device path as display text
    pub fn device_path_str(&self) -> String {
        self.device_path.to_string_lossy().into_owned()
    }

    /// By-id alias as display text, empty when absent
    pub fn by_id_str(&self) -> String {
        path_or_empty(self.by_id.as_deref())
    }

    /// By-path alias as display text, empty when absent
    pub fn by_path_str(&self) -> String {
        path_or_empty(self.by_path.as_deref())
    }

    /// Capabilities rendered as `[EV_SYN, EV_KEY]`, or an empty string when
    /// the device reported none.
    pub fn capabilities_str(&self) -> String {
        if self.capabilities.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.capabilities.join(", "))
        }
    }

    /// Natural-order comparison on the device path
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        natural_cmp(
            &self.device_path.to_string_lossy(),
            &other.device_path.to_string_lossy(),
        )
    }
}

fn path_or_empty(path: Option<&Path>) -> String {
    path.map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}
