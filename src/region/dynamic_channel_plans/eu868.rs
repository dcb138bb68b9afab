//! EU868 region support (863..870 MHz)
//!
//! EU863-870 end-devices SHALL support one of the three following data rate options:
//! 1. DR0 to DR5 (minimum set supported for certification)
//! 2. DR0 to DR7
//! 3. DR0 to DR11 (all data rates implemented)
//!
//! Current status: DR0..DR7, LR-FHSS (DR8..DR11) is unimplemented

use super::*;

const MAX_EIRP: u8 = 16;

static UPLINK_CHANNELS: [Channel; 3] = [
    Channel::new(868_100_000, DR::_0, DR::_5),
    Channel::new(868_300_000, DR::_0, DR::_5),
    Channel::new(868_500_000, DR::_0, DR::_5),
];

static DATARATES: DatarateTable = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_250KHz, 250)),
    Some(Datarate::fsk(FSK_BITRATE, 250)),
    None, // LR-FHSS
    None, // LR-FHSS
    None, // LR-FHSS
    None, // LR-FHSS
    None, // RFU
    None, // RFU
    None, // RFU
    None, // RFU
];

pub(crate) struct EU868;

impl ChannelRegion for EU868 {
    fn datarates(&self) -> &'static DatarateTable {
        &DATARATES
    }

    fn rx1_datarates(&self) -> &'static [&'static [DR]] {
        &RX1_DATARATES_SUBTRACT
    }

    fn uplink_channels(&self) -> &'static [Channel] {
        &UPLINK_CHANNELS
    }

    fn rx2_frequency(&self) -> u32 {
        869_525_000
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }
}
