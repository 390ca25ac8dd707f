// Evlist Listing
// One complete run: compile filters, scan, filter

use crate::capability::CapabilityProbe;
use crate::collection::InputDevices;
use crate::config::ListConfig;
use crate::error::ScanError;
use crate::filter::{FilterError, FilterSet};
use crate::scanner::DeviceScanner;

/// Scan the system locations and apply `config`.
///
/// Filters are compiled before any directory is read, so a bad regex is
/// reported without touching the filesystem.
pub fn list_devices(config: &ListConfig) -> Result<InputDevices, ListError> {
    list_devices_with(&DeviceScanner::new(), config)
}

/// Like [`list_devices`], with a caller-supplied scanner.
pub fn list_devices_with<P: CapabilityProbe>(
    scanner: &DeviceScanner<P>,
    config: &ListConfig,
) -> Result<InputDevices, ListError> {
    let filters = FilterSet::new(&config.filters, config.use_regex)?;
    log::debug!(
        "Filtering with {} {} entries",
        config.filters.len(),
        if filters.uses_regex() { "regex" } else { "exact" }
    );
    let devices = scanner.scan_with_format(config.format)?;
    if filters.is_empty() {
        Ok(devices)
    } else {
        Ok(devices.filter_with(&filters))
    }
}

/// Failure of a complete listing run
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl ListError {
    /// Process exit code: the errno for scan failures, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            ListError::Scan(e) => e.exit_code(),
            ListError::Filter(_) => 1,
        }
    }
}
