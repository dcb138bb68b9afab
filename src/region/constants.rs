/// MACPayload limit for end-devices that must stay compatible with repeaters.
pub(crate) const REPEATER_MAX_MAC_PAYLOAD_SIZE: u8 = 230;

pub(crate) const FSK_BITRATE: u32 = 50_000;
