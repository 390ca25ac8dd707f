// Evlist Filter Engine
// Column-value constraints applied to a device list

use std::collections::HashMap;
use std::str::FromStr;

use regex::Regex;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::device::InputDevice;

/// Column a filter applies to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FilterField {
    DevicePath,
    Name,
    ById,
    ByPath,
    Capabilities,
}

impl FilterField {
    /// One-line description used in help output
    pub fn description(self) -> &'static str {
        match self {
            FilterField::DevicePath => "filter outputs that contain the device path",
            FilterField::Name => "filter outputs that contain the name of the device",
            FilterField::ById => "filter outputs that contain the by_id path of the device",
            FilterField::ByPath => "filter outputs that contain the by_path path of the device",
            FilterField::Capabilities => "filter outputs that have the capabilities listed",
        }
    }
}

/// Errors from building or parsing filters
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid regex '{pattern}'")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid filter '{0}': expected KEY=VALUE")]
    InvalidSpec(String),

    #[error("unknown filter key '{0}'")]
    UnknownField(String),
}

/// A single `(field, pattern)` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFilter {
    pub field: FilterField,
    pub pattern: String,
}

impl DeviceFilter {
    pub fn new(field: FilterField, pattern: impl Into<String>) -> Self {
        Self {
            field,
            pattern: pattern.into(),
        }
    }
}

/// Parses the command line form `KEY=VALUE`, splitting on the first `=`.
impl FromStr for DeviceFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| FilterError::InvalidSpec(s.to_string()))?;
        let field = FilterField::from_str(key.trim())
            .map_err(|_| FilterError::UnknownField(key.trim().to_string()))?;
        Ok(Self::new(field, value))
    }
}

/// A compiled set of filters.
///
/// Every filter must hold for a device to be kept. In regex mode each
/// distinct pattern is compiled once, when the set is built, and a match is
/// an unanchored search. Otherwise values are compared for exact equality.
#[derive(Debug, Clone)]
pub struct FilterSet {
    filters: Vec<DeviceFilter>,
    regexes: Option<HashMap<String, Regex>>,
}

impl FilterSet {
    /// Build a filter set, compiling patterns up front when `use_regex` is set.
    pub fn new(filters: &[DeviceFilter], use_regex: bool) -> Result<Self, FilterError> {
        let regexes = if use_regex {
            let mut cache: HashMap<String, Regex> = HashMap::new();
            for filter in filters {
                if cache.contains_key(&filter.pattern) {
                    continue;
                }
                let regex = Regex::new(&filter.pattern).map_err(|source| {
                    FilterError::InvalidRegex {
                        pattern: filter.pattern.clone(),
                        source,
                    }
                })?;
                cache.insert(filter.pattern.clone(), regex);
            }
            Some(cache)
        } else {
            None
        };

        Ok(Self {
            filters: filters.to_vec(),
            regexes,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn uses_regex(&self) -> bool {
        self.regexes.is_some()
    }

    /// Whether the device satisfies every filter in the set
    pub fn matches(&self, device: &InputDevice) -> bool {
        self.filters
            .iter()
            .all(|filter| self.matches_filter(device, filter))
    }

    fn matches_filter(&self, device: &InputDevice, filter: &DeviceFilter) -> bool {
        let pattern = filter.pattern.as_str();
        match filter.field {
            FilterField::DevicePath => self.is_match(pattern, &device.device_path_str()),
            FilterField::Name => self.is_match(pattern, device.name()),
            FilterField::ById => self.is_match(pattern, &device.by_id_str()),
            FilterField::ByPath => self.is_match(pattern, &device.by_path_str()),
            FilterField::Capabilities => device
                .capabilities()
                .iter()
                .any(|capability| self.is_match(pattern, capability)),
        }
    }

    fn is_match(&self, pattern: &str, value: &str) -> bool {
        match &self.regexes {
            Some(cache) => cache.get(pattern).is_some_and(|re| re.is_match(value)),
            None => value == pattern,
        }
    }
}
