// Evlist Event Types
// Top-level event type codes from linux/input-event-codes.h

use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Highest event type code the kernel defines (`EV_MAX`).
pub const EV_MAX: u32 = 0x1f;

/// Number of event type codes (`EV_CNT`), i.e. the width of the capability bitmask.
pub const EV_CNT: u32 = EV_MAX + 1;

/// A top-level event type a device may be capable of producing.
///
/// Variants are declared in ascending code order, so iterating them yields
/// codes in the same order they appear in the capability bitmask.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[repr(u32)]
pub enum EventType {
    #[strum(serialize = "EV_SYN")]
    Synchronization = 0x00,
    #[strum(serialize = "EV_KEY")]
    Key = 0x01,
    #[strum(serialize = "EV_REL")]
    Relative = 0x02,
    #[strum(serialize = "EV_ABS")]
    Absolute = 0x03,
    #[strum(serialize = "EV_MSC")]
    Miscellaneous = 0x04,
    #[strum(serialize = "EV_SW")]
    Switch = 0x05,
    #[strum(serialize = "EV_LED")]
    Led = 0x11,
    #[strum(serialize = "EV_SND")]
    Sound = 0x12,
    #[strum(serialize = "EV_REP")]
    Autorepeat = 0x14,
    #[strum(serialize = "EV_FF")]
    ForceFeedback = 0x15,
    #[strum(serialize = "EV_PWR")]
    Power = 0x16,
    #[strum(serialize = "EV_FF_STATUS")]
    ForceFeedbackStatus = 0x17,
}

impl EventType {
    /// Raw event type code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Symbolic kernel name, e.g. `EV_KEY`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up an event type by its raw code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::iter().find(|t| t.code() == code)
    }
}

/// Mapping of every known event type code to its symbolic name, ordered by code.
pub fn names() -> BTreeMap<u32, &'static str> {
    EventType::iter().map(|t| (t.code(), t.name())).collect()
}
