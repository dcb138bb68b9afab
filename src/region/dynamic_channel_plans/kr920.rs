//! KR920 region support (920.9..923.3 MHz)

use super::*;

const MAX_EIRP: u8 = 14;

static UPLINK_CHANNELS: [Channel; 3] = [
    Channel::new(922_100_000, DR::_0, DR::_5),
    Channel::new(922_300_000, DR::_0, DR::_5),
    Channel::new(922_500_000, DR::_0, DR::_5),
];

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

pub(crate) struct KR920;

impl ChannelRegion for KR920 {
    fn datarates(&self) -> &'static DatarateTable {
        &DATARATES
    }

    fn rx1_datarates(&self) -> &'static [&'static [DR]] {
        // DR6 and DR7 are not defined in KR920
        &RX1_DATARATES_SUBTRACT[..6]
    }

    fn uplink_channels(&self) -> &'static [Channel] {
        &UPLINK_CHANNELS
    }

    fn rx2_frequency(&self) -> u32 {
        921_900_000
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }
}
