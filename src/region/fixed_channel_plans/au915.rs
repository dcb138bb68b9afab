//! AU915 region support (915..928 MHz)
//!
//! AU915-928 end-devices SHALL support one of the two following data rate options:
//! 1. DR0 to DR6 and DR8 to DR13 (minimum set supported for certification)
//! 2. DR0 to DR13 (all data rates implemented)
//!
//! Current status: DR7 is unimplemented (LR-FHSS)

use super::*;

const MAX_EIRP: u8 = 30;

static UPLINK_CHANNELS: [Channel; 72] = uplink_channels(
    915_200_000,
    200_000,
    WIDE_BLOCK_START,
    (DR::_0, DR::_5),
    915_900_000,
    1_600_000,
    (DR::_6, DR::_6),
);

static DOWNLINK_CHANNELS: [u32; 8] = downlink_channels(923_300_000, 600_000);

static DATARATES: DatarateTable = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, 250)),
    None, // LR-FHSS
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_500KHz, 61)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_500KHz, 137)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_500KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_500KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_500KHz, 250)),
    None, // RFU
    None, // RFU
];

static RX1_DATARATES: [&[DR]; 7] = [
    &[DR::_8, DR::_8, DR::_8, DR::_8, DR::_8, DR::_8],
    &[DR::_9, DR::_8, DR::_8, DR::_8, DR::_8, DR::_8],
    &[DR::_10, DR::_9, DR::_8, DR::_8, DR::_8, DR::_8],
    &[DR::_11, DR::_10, DR::_9, DR::_8, DR::_8, DR::_8],
    &[DR::_12, DR::_11, DR::_10, DR::_9, DR::_8, DR::_8],
    &[DR::_13, DR::_12, DR::_11, DR::_10, DR::_9, DR::_8],
    &[DR::_13, DR::_13, DR::_12, DR::_11, DR::_10, DR::_9],
];

pub(crate) struct AU915;

impl ChannelRegion for AU915 {
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
        923_300_000
    }

    fn rx2_datarate(&self) -> DR {
        DR::_8
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }

    fn max_tx_power(&self) -> u8 {
        14
    }

    fn mask_layout(&self) -> MaskLayout {
        MaskLayout::WideBlock { start: WIDE_BLOCK_START }
    }
}
