// Evlist Core Library
// Input device discovery, filtering and formatting

pub mod capability;
pub mod collection;
pub mod config;
pub mod device;
pub mod error;
pub mod event_type;
pub mod filter;
pub mod list;
pub mod natural;
pub mod render;
pub mod scanner;
pub mod settings;
pub mod symlink;

pub use capability::{CapabilityProbe, IoctlProbe};
pub use collection::{ColumnWidths, InputDevices};
pub use config::{ListConfig, ScanPaths};
pub use device::InputDevice;
pub use error::{ScanError, ScanResult};
pub use event_type::EventType;
pub use filter::{DeviceFilter, FilterError, FilterField, FilterSet};
pub use list::{list_devices, list_devices_with, ListError};
pub use natural::natural_cmp;
pub use render::{render, OutputFormat};
pub use scanner::DeviceScanner;
pub use settings::{Settings, SettingsError};
pub use symlink::resolve_alias;
