//! Logical-to-physical analog channel map
//!
//! Application code and the wire protocol address analog inputs by a
//! 0-based logical channel number; the board wires those channels to
//! physical analog ports. Every supported board provides ports A0-A7;
//! larger boards add up to five more, selected at build time through
//! the `analog-a8` .. `analog-a12` cargo features. There is no runtime
//! capability detection.

/// Identifier of a physical analog port on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogPin(pub u8);

/// Analog ports present on every supported board.
const BASE_CHANNELS: usize = 8;

/// Highest port id any board variant wires up.
const MAX_PORT: u8 = 12;

/// Number of logical analog channels on the configured board.
pub const ANALOG_CHANNEL_COUNT: usize = BASE_CHANNELS
    + cfg!(feature = "analog-a8") as usize
    + cfg!(feature = "analog-a9") as usize
    + cfg!(feature = "analog-a10") as usize
    + cfg!(feature = "analog-a11") as usize
    + cfg!(feature = "analog-a12") as usize;

/// Map from logical channel number to the board's analog port, in
/// declaration order: A0-A7 first, then each configured extended port.
pub static ANALOG_CHANNELS: [AnalogPin; ANALOG_CHANNEL_COUNT] = channel_map();

/// Physical port for a logical channel.
///
/// Channel numbers come from already-validated protocol fields, so a
/// value outside `0..ANALOG_CHANNEL_COUNT` is a caller bug and panics.
pub fn channel_pin(channel: usize) -> AnalogPin {
    ANALOG_CHANNELS[channel]
}

const fn port_configured(port: u8) -> bool {
    match port {
        0..=7 => true,
        8 => cfg!(feature = "analog-a8"),
        9 => cfg!(feature = "analog-a9"),
        10 => cfg!(feature = "analog-a10"),
        11 => cfg!(feature = "analog-a11"),
        12 => cfg!(feature = "analog-a12"),
        _ => false,
    }
}

const fn channel_map() -> [AnalogPin; ANALOG_CHANNEL_COUNT] {
    let mut map = [AnalogPin(0); ANALOG_CHANNEL_COUNT];
    let mut channel = 0;
    let mut port = 0;
    while port <= MAX_PORT {
        if port_configured(port) {
            map[channel] = AnalogPin(port);
            channel += 1;
        }
        port += 1;
    }
    map
}
