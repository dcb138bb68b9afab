//! Data-rate indices and the per-region encodings behind them.
use super::Error;
use lora_modulation::{Bandwidth, SpreadingFactor};

pub(crate) const NUM_DATARATES: usize = 16;

/// A regional data-rate table. `None` marks an index that is reserved or that this crate does not
/// implement (eg: LR-FHSS); such entries never take part in lookups.
pub(crate) type DatarateTable = [Option<Datarate>; NUM_DATARATES];

seq_macro::seq!(
    N in 0..=15 {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        /// A restricted data rate type that exposes the number of variants to only what _may_ be
        /// potentially be possible. Note that not all data rates are valid in all regions.
        pub enum DR {
            #(
                _~N = N,
            )*
        }

        impl TryFrom<u8> for DR {
            type Error = Error;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    #(
                        N => Ok(DR::_~N),
                    )*
                    _ => Err(Error::InvalidDataRate),
                }
            }
        }
    }
);

impl From<DR> for u8 {
    fn from(dr: DR) -> u8 {
        dr as u8
    }
}

/// Physical-layer encoding of a data rate.
#[derive(Debug, Clone, PartialEq)]
pub enum Modulation {
    LoRa { spreading_factor: SpreadingFactor, bandwidth: Bandwidth },
    /// GFSK, bitrate in bits per second.
    Fsk { bitrate: u32 },
}

/// One implemented entry of a regional data-rate table.
#[derive(Debug, Clone, PartialEq)]
pub struct Datarate {
    modulation: Modulation,
    max_mac_payload_size: u8,
}

impl Datarate {
    pub(crate) const fn lora(
        spreading_factor: SpreadingFactor,
        bandwidth: Bandwidth,
        max_mac_payload_size: u8,
    ) -> Self {
        Self { modulation: Modulation::LoRa { spreading_factor, bandwidth }, max_mac_payload_size }
    }

    pub(crate) const fn fsk(bitrate: u32, max_mac_payload_size: u8) -> Self {
        Self { modulation: Modulation::Fsk { bitrate }, max_mac_payload_size }
    }

    pub fn modulation(&self) -> &Modulation {
        &self.modulation
    }

    /// Maximum MACPayload size (M) in bytes, without dwell-time restrictions.
    pub fn max_mac_payload_size(&self) -> u8 {
        self.max_mac_payload_size
    }
}

/// Inclusive range of data rates a channel may be used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct DataRateRange {
    min: DR,
    max: DR,
}

impl DataRateRange {
    pub(crate) const fn new(min: DR, max: DR) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> DR {
        self.min
    }

    pub fn max(&self) -> DR {
        self.max
    }

    pub fn contains(&self, dr: DR) -> bool {
        self.min <= dr && dr <= self.max
    }

    /// Iterates the data rates of the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DR> {
        (self.min as u8..=self.max as u8).filter_map(|dr| DR::try_from(dr).ok())
    }
}

/// Returns the lowest index whose table entry has the given encoding. Regions may list the same
/// encoding twice (eg: US915 DR4 and DR12); the uplink index wins.
pub(crate) fn lookup_index(table: &DatarateTable, modulation: &Modulation) -> Option<DR> {
    table
        .iter()
        .position(|entry| matches!(entry, Some(dr) if dr.modulation == *modulation))
        .and_then(|index| DR::try_from(index as u8).ok())
}
