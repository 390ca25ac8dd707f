// Evlist Device Collection
// Sorted device list plus the column widths needed to render it

use crate::device::InputDevice;
use crate::filter::{DeviceFilter, FilterError, FilterSet};
use crate::render::{OutputFormat, HEADERS};

/// Per-column widths for table output.
///
/// Each starts at the header length plus [`ColumnWidths::MIN_GAP`] and only
/// ever grows as devices are observed. The capabilities column is always
/// last and unpadded, so it has no width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub device_path: usize,
    pub by_id: usize,
    pub by_path: usize,
}

impl ColumnWidths {
    /// Minimum spaces between a value and the next column
    pub const MIN_GAP: usize = 1;

    pub fn new() -> Self {
        let [name, device_path, by_id, by_path, _] = HEADERS.map(text_width);
        Self {
            name: name + Self::MIN_GAP,
            device_path: device_path + Self::MIN_GAP,
            by_id: by_id + Self::MIN_GAP,
            by_path: by_path + Self::MIN_GAP,
        }
    }

    /// Widths after taking `device` into account
    pub fn observe(self, device: &InputDevice) -> Self {
        let grow = |current: usize, value: &str| current.max(text_width(value) + Self::MIN_GAP);
        Self {
            name: grow(self.name, device.name()),
            device_path: grow(self.device_path, &device.device_path_str()),
            by_id: grow(self.by_id, &device.by_id_str()),
            by_path: grow(self.by_path, &device.by_path_str()),
        }
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::new()
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// The devices to list, in natural order of their paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDevices {
    output_format: OutputFormat,
    devices: Vec<InputDevice>,
    widths: ColumnWidths,
}

impl InputDevices {
    /// Create a collection with the default (table) format
    pub fn new(devices: Vec<InputDevice>) -> Self {
        Self::with_format(OutputFormat::default(), devices)
    }

    /// Create a collection rendered in `output_format`.
    ///
    /// Devices are sorted by natural order of their paths. The sort is
    /// stable, so devices with equal paths keep their relative order.
    pub fn with_format(output_format: OutputFormat, mut devices: Vec<InputDevice>) -> Self {
        devices.sort_by(InputDevice::natural_cmp);
        let widths = devices
            .iter()
            .fold(ColumnWidths::new(), |widths, device| widths.observe(device));
        Self {
            output_format,
            devices,
            widths,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn devices(&self) -> &[InputDevice] {
        &self.devices
    }

    pub fn into_devices(self) -> Vec<InputDevice> {
        self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    pub fn max_name_size(&self) -> usize {
        self.widths.name
    }

    pub fn max_device_size(&self) -> usize {
        self.widths.device_path
    }

    pub fn max_by_id_size(&self) -> usize {
        self.widths.by_id
    }

    pub fn max_by_path_size(&self) -> usize {
        self.widths.by_path
    }

    /// Keep only the devices matching every filter.
    ///
    /// Returns a new collection in the same format; `self` is untouched.
    /// Fails only when `use_regex` is set and a pattern does not compile.
    pub fn filter(&self, filters: &[DeviceFilter], use_regex: bool) -> Result<Self, FilterError> {
        let set = FilterSet::new(filters, use_regex)?;
        Ok(self.filter_with(&set))
    }

    /// Keep only the devices matching a prebuilt filter set
    pub fn filter_with(&self, set: &FilterSet) -> Self {
        let kept: Vec<InputDevice> = self
            .devices
            .iter()
            .filter(|device| set.matches(device))
            .cloned()
            .collect();
        log::debug!("Filter kept {} of {} devices", kept.len(), self.devices.len());
        Self::with_format(self.output_format, kept)
    }
}

impl FromIterator<InputDevice> for InputDevices {
    fn from_iter<I: IntoIterator<Item = InputDevice>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
