//! CN470 region support (470..510 MHz)
//!
//! 96 uplink channels of 125 kHz, 48 downlink channels. `ChMaskCntl = 6` turns every channel on;
//! there is no all-off command, so masks are always sent per 16-channel chunk.

use super::*;

const MAX_EIRP: u8 = 19;

static UPLINK_CHANNELS: [Channel; 96] =
    uplink_channels(470_300_000, 200_000, 96, (DR::_0, DR::_5), 0, 0, (DR::_0, DR::_5));

static DOWNLINK_CHANNELS: [u32; 48] = downlink_channels(500_300_000, 200_000);

static DATARATES: DatarateTable = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250)),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

static RX1_DATARATES: [&[DR]; 6] = [
    &[DR::_0, DR::_0, DR::_0, DR::_0, DR::_0, DR::_0],
    &[DR::_1, DR::_0, DR::_0, DR::_0, DR::_0, DR::_0],
    &[DR::_2, DR::_1, DR::_0, DR::_0, DR::_0, DR::_0],
    &[DR::_3, DR::_2, DR::_1, DR::_0, DR::_0, DR::_0],
    &[DR::_4, DR::_3, DR::_2, DR::_1, DR::_0, DR::_0],
    &[DR::_5, DR::_4, DR::_3, DR::_2, DR::_1, DR::_0],
];

pub(crate) struct CN470;

impl ChannelRegion for CN470 {
    fn datarates(&self) -> &'static DatarateTable {
        &DATARATES
    }

    fn rx1_datarates(&self) -> &'static [&'static [DR]] {
        &RX1_DATARATES
    }

    fn uplink_channels(&self) -> &'static [Channel] {
        &UPLINK_CHANNELS
    }

    fn rx1_frequency(&self, channel: usize, _uplink_frequency: u32) -> u32 {
        rx1_downlink(&DOWNLINK_CHANNELS, channel)
    }

    fn rx2_frequency(&self) -> u32 {
        505_300_000
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }
}
