//! IN865 region support (865..867 MHz)
//!
//! RX1 data-rate offsets 6 and 7 raise the downlink data rate by one and two, capped at DR5.

use super::*;

const MAX_EIRP: u8 = 30;

static UPLINK_CHANNELS: [Channel; 3] = [
    Channel::new(865_062_500, DR::_0, DR::_5),
    Channel::new(865_402_500, DR::_0, DR::_5),
    Channel::new(865_985_000, DR::_0, DR::_5),
];

static DATARATES: DatarateTable = [
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz, 59)),
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz, 123)),
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz, 250)),
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz, 250)),
    None, // RFU
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
    &[],
    &[DR::_5, DR::_5, DR::_5, DR::_4, DR::_3, DR::_2, DR::_5, DR::_5],
];

pub(crate) struct IN865;

impl ChannelRegion for IN865 {
    fn datarates(&self) -> &'static DatarateTable {
        &DATARATES
    }

    fn rx1_datarates(&self) -> &'static [&'static [DR]] {
        &RX1_DATARATES
    }

    fn uplink_channels(&self) -> &'static [Channel] {
        &UPLINK_CHANNELS
    }

    fn rx2_frequency(&self) -> u32 {
        866_550_000
    }

    fn rx2_datarate(&self) -> DR {
        DR::_2
    }

    fn max_eirp(&self) -> u8 {
        MAX_EIRP
    }

    fn max_tx_power(&self) -> u8 {
        10
    }
}
