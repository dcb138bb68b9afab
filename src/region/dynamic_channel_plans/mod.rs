//! Regions with a dynamic channel plan: the region only defines the default channels, and an
//! uplink is answered in RX1 on its own frequency.
use super::*;
use lora_modulation::{Bandwidth, SpreadingFactor};

#[cfg(any(
    feature = "region-as923-1",
    feature = "region-as923-2",
    feature = "region-as923-3",
    feature = "region-as923-4"
))]
mod as923;
#[cfg(feature = "region-eu433")]
mod eu433;
#[cfg(feature = "region-eu868")]
mod eu868;
#[cfg(feature = "region-in865")]
mod in865;
#[cfg(feature = "region-kr920")]
mod kr920;

#[cfg(feature = "region-as923-1")]
pub(crate) use as923::AS923_1;
#[cfg(feature = "region-as923-2")]
pub(crate) use as923::AS923_2;
#[cfg(feature = "region-as923-3")]
pub(crate) use as923::AS923_3;
#[cfg(feature = "region-as923-4")]
pub(crate) use as923::AS923_4;
#[cfg(feature = "region-eu433")]
pub(crate) use eu433::EU433;
#[cfg(feature = "region-eu868")]
pub(crate) use eu868::EU868;
#[cfg(feature = "region-in865")]
pub(crate) use in865::IN865;
#[cfg(feature = "region-kr920")]
pub(crate) use kr920::KR920;

/// RX1 data rate is the uplink data rate minus the offset, never below DR0. Offsets 0..=5.
#[cfg(any(feature = "region-eu433", feature = "region-eu868", feature = "region-kr920"))]
static RX1_DATARATES_SUBTRACT: [&[DR]; 8] = [
    &[DR::_0, DR::_0, DR::_0, DR::_0, DR::_0, DR::_0],
    &[DR::_1, DR::_0, DR::_0, DR::_0, DR::_0, DR::_0],
    &[DR::_2, DR::_1, DR::_0, DR::_0, DR::_0, DR::_0],
    &[DR::_3, DR::_2, DR::_1, DR::_0, DR::_0, DR::_0],
    &[DR::_4, DR::_3, DR::_2, DR::_1, DR::_0, DR::_0],
    &[DR::_5, DR::_4, DR::_3, DR::_2, DR::_1, DR::_0],
    &[DR::_6, DR::_5, DR::_4, DR::_3, DR::_2, DR::_1],
    &[DR::_7, DR::_6, DR::_5, DR::_4, DR::_3, DR::_2],
];
