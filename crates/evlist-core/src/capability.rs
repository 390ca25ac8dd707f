// Evlist Capability Probe
// Reads the top-level event type bitmask of a device node via EVIOCGBIT

use std::fs::File;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::Path;

use libc::c_ulong;
use nix::ioctl_read_buf;
use strum::IntoEnumIterator;

use crate::event_type::{EventType, EV_CNT};

const BITS_PER_WORD: u32 = c_ulong::BITS;
const BITMASK_WORDS: usize = EV_CNT.div_ceil(BITS_PER_WORD) as usize;

// EVIOCGBIT(0, len): supported event types, `len` derived from the buffer
ioctl_read_buf!(eviocgbit_types, b'E', 0x20, c_ulong);

/// Source of a device's capability list.
///
/// The scanner only depends on this trait, so fixtures can stand in for
/// real device nodes.
pub trait CapabilityProbe {
    /// Event type names the device at `device_path` supports, in ascending
    /// code order. Devices that cannot be queried yield an empty list.
    fn probe(&self, device_path: &Path) -> Vec<String>;
}

/// Queries the kernel directly with the `EVIOCGBIT` ioctl.
///
/// Opening event nodes usually requires elevated privileges; without them
/// every device simply reports no capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct IoctlProbe;

impl IoctlProbe {
    pub fn new() -> Self {
        Self
    }

    fn read_bitmask(device_path: &Path) -> io::Result<[c_ulong; BITMASK_WORDS]> {
        let file = File::open(device_path)?;
        let mut bits: [c_ulong; BITMASK_WORDS] = [0; BITMASK_WORDS];

        // SAFETY: the fd stays open for the duration of the call and the
        // request length is taken from `bits` itself.
        unsafe { eviocgbit_types(file.as_raw_fd(), &mut bits) }.map_err(io::Error::from)?;
        Ok(bits)
    }
}

impl CapabilityProbe for IoctlProbe {
    fn probe(&self, device_path: &Path) -> Vec<String> {
        match Self::read_bitmask(device_path) {
            Ok(bits) => decode(&bits),
            Err(e) => {
                log::debug!(
                    "No capabilities for {}: {}",
                    device_path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

/// Test whether `code` is set in a kernel-style bitmask of machine words.
pub fn test_bit(bits: &[c_ulong], code: u32) -> bool {
    let word = (code / BITS_PER_WORD) as usize;
    let mask: c_ulong = 1 << (code % BITS_PER_WORD);
    bits.get(word).is_some_and(|w| w & mask != 0)
}

/// Decode an event type bitmask into symbolic names, ascending by code.
pub fn decode(bits: &[c_ulong]) -> Vec<String> {
    EventType::iter()
        .filter(|t| test_bit(bits, t.code()))
        .map(|t| t.name().to_string())
        .collect()
}
