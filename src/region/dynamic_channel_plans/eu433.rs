//! EU433 region support (433.05..434.79 MHz)

use super::*;

const MAX_EIRP: u8 = 12;

static UPLINK_CHANNELS: [Channel; 3] = [
    Channel::new(433_175_000, DR::_0, DR::_5),
    Channel::new(433_375_000, DR::_0, DR::_5),
    Channel::new(433_575_000, DR::_0, DR::_5),
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
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

pub(crate) struct EU433;

impl ChannelRegion for EU433 {
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
        434_665_000
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }

    fn max_tx_power(&self) -> u8 {
        5
    }
}
