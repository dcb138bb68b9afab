//! AS923 region support, in its four frequency variants.
//!
//! AS923-2, AS923-3 and AS923-4 are AS923-1 shifted by a fixed frequency offset. Dwell-time
//! limits are not applied; RX1 data-rate offsets 6 and 7 raise the downlink data rate, capped at
//! DR5.

use super::*;

const MAX_EIRP: u8 = 16;

const AS923_1_FREQUENCY: u32 = 923_200_000;

/// The two default channels and RX2 frequency of a variant shifted by `offset` Hz.
const fn default_channels(offset: i32) -> [Channel; 2] {
    let first = AS923_1_FREQUENCY.wrapping_add_signed(offset);
    [Channel::new(first, DR::_0, DR::_5), Channel::new(first + 200_000, DR::_0, DR::_5)]
}

static DATARATES: DatarateTable = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 123)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_250KHz, 250)),
    Some(Datarate::fsk(FSK_BITRATE, 250)),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

static RX1_DATARATES: [&[DR]; 8] = [
    &[DR::_0, DR::_0, DR::_0, DR::_0, DR::_0, DR::_0, DR::_1, DR::_2],
    &[DR::_1, DR::_0, DR::_0, DR::_0, DR::_0, DR::_0, DR::_2, DR::_3],
    &[DR::_2, DR::_1, DR::_0, DR::_0, DR::_0, DR::_0, DR::_3, DR::_4],
    &[DR::_3, DR::_2, DR::_1, DR::_0, DR::_0, DR::_0, DR::_4, DR::_5],
    &[DR::_4, DR::_3, DR::_2, DR::_1, DR::_0, DR::_0, DR::_5, DR::_5],
    &[DR::_5, DR::_4, DR::_3, DR::_2, DR::_1, DR::_0, DR::_5, DR::_5],
    &[DR::_5, DR::_5, DR::_4, DR::_3, DR::_2, DR::_1, DR::_5, DR::_5],
    &[DR::_5, DR::_5, DR::_5, DR::_4, DR::_3, DR::_2, DR::_5, DR::_5],
];

pub(crate) struct AS923 {
    channels: &'static [Channel; 2],
    offset: i32,
}

#[cfg(feature = "region-as923-1")]
static AS923_1_CHANNELS: [Channel; 2] = default_channels(0);
#[cfg(feature = "region-as923-1")]
pub(crate) static AS923_1: AS923 = AS923 { channels: &AS923_1_CHANNELS, offset: 0 };

#[cfg(feature = "region-as923-2")]
static AS923_2_CHANNELS: [Channel; 2] = default_channels(-1_800_000);
#[cfg(feature = "region-as923-2")]
pub(crate) static AS923_2: AS923 = AS923 { channels: &AS923_2_CHANNELS, offset: -1_800_000 };

#[cfg(feature = "region-as923-3")]
static AS923_3_CHANNELS: [Channel; 2] = default_channels(-6_600_000);
#[cfg(feature = "region-as923-3")]
pub(crate) static AS923_3: AS923 = AS923 { channels: &AS923_3_CHANNELS, offset: -6_600_000 };

#[cfg(feature = "region-as923-4")]
static AS923_4_CHANNELS: [Channel; 2] = default_channels(-5_900_000);
#[cfg(feature = "region-as923-4")]
pub(crate) static AS923_4: AS923 = AS923 { channels: &AS923_4_CHANNELS, offset: -5_900_000 };

impl ChannelRegion for AS923 {
    fn datarates(&self) -> &'static DatarateTable {
        &DATARATES
    }

    fn rx1_datarates(&self) -> &'static [&'static [DR]] {
        &RX1_DATARATES
    }

    fn uplink_channels(&self) -> &'static [Channel] {
        self.channels
    }

    fn rx2_frequency(&self) -> u32 {
        AS923_1_FREQUENCY.wrapping_add_signed(self.offset)
    }

    fn rx2_datarate(&self) -> DR {
        DR::_2
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }
}
