//! LoRaWAN region definitions (eg: EU868, US915, etc) and the [`Band`] built on top of them.
use core::fmt;
use core::ops::Range;

pub(crate) mod constants;
use constants::*;

pub mod channel;
pub mod channel_mask;
pub mod datarate;

use channel::{Channel, ChannelSet};
use channel_mask::{MaskCommand, MaskCommands, MaskLayout};
use datarate::{Datarate, DatarateTable, Modulation, DR};

#[cfg(not(any(
    feature = "region-as923-1",
    feature = "region-as923-2",
    feature = "region-as923-3",
    feature = "region-as923-4",
    feature = "region-au915",
    feature = "region-cn470",
    feature = "region-eu433",
    feature = "region-eu868",
    feature = "region-in865",
    feature = "region-kr920",
    feature = "region-us915"
)))]
compile_error!("You must enable at least one region! eg: `region-eu868`, `region-us915`...");

#[cfg(any(
    feature = "region-as923-1",
    feature = "region-as923-2",
    feature = "region-as923-3",
    feature = "region-as923-4",
    feature = "region-eu433",
    feature = "region-eu868",
    feature = "region-in865",
    feature = "region-kr920"
))]
mod dynamic_channel_plans;

#[cfg(any(feature = "region-au915", feature = "region-cn470", feature = "region-us915"))]
mod fixed_channel_plans;

/// Errors returned by region lookups, channel bookkeeping and the channel-mask codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// No uplink channel of the plan uses the frequency.
    FrequencyNotFound,
    /// No implemented data rate of the region has the modulation parameters.
    DataRateNotFound,
    /// Channel index outside of the channel plan.
    ChannelOutOfRange,
    /// Data rate is not implemented in the region, or not allowed on the channel.
    InvalidDataRate,
    /// RX1 data-rate offset outside of the region's table.
    InvalidDataRateOffset,
    /// TX power index above the region's highest index.
    InvalidTxPower,
    /// Uplink on a channel that is currently disabled.
    ChannelDisabled,
    /// Channel-mask command that does not fit the channel plan.
    MalformedCommand,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::FrequencyNotFound => "unknown uplink frequency",
            Error::DataRateNotFound => "unknown data rate parameters",
            Error::ChannelOutOfRange => "channel index out of range",
            Error::InvalidDataRate => "invalid data-rate",
            Error::InvalidDataRateOffset => "invalid data-rate offset",
            Error::InvalidTxPower => "invalid tx power",
            Error::ChannelDisabled => "channel is disabled",
            Error::MalformedCommand => "malformed channel mask command",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Regions supported by this crate: AS923_1, AS923_2, AS923_3, AS923_4, AU915, CN470, EU433,
/// EU868, IN865, KR920, US915. Each region is individually feature-gated (eg: `region-eu868`),
/// however, by default, all regions are enabled.
pub enum Region {
    #[cfg(feature = "region-as923-1")]
    AS923_1,
    #[cfg(feature = "region-as923-2")]
    AS923_2,
    #[cfg(feature = "region-as923-3")]
    AS923_3,
    #[cfg(feature = "region-as923-4")]
    AS923_4,
    #[cfg(feature = "region-au915")]
    AU915,
    #[cfg(feature = "region-cn470")]
    CN470,
    #[cfg(feature = "region-eu433")]
    EU433,
    #[cfg(feature = "region-eu868")]
    EU868,
    #[cfg(feature = "region-in865")]
    IN865,
    #[cfg(feature = "region-kr920")]
    KR920,
    #[cfg(feature = "region-us915")]
    US915,
}

impl Region {
    /// The immutable regional tables. Every call returns the same shared instance.
    pub(crate) fn profile(self) -> &'static dyn ChannelRegion {
        match self {
            #[cfg(feature = "region-as923-1")]
            Region::AS923_1 => &dynamic_channel_plans::AS923_1,
            #[cfg(feature = "region-as923-2")]
            Region::AS923_2 => &dynamic_channel_plans::AS923_2,
            #[cfg(feature = "region-as923-3")]
            Region::AS923_3 => &dynamic_channel_plans::AS923_3,
            #[cfg(feature = "region-as923-4")]
            Region::AS923_4 => &dynamic_channel_plans::AS923_4,
            #[cfg(feature = "region-au915")]
            Region::AU915 => &fixed_channel_plans::AU915,
            #[cfg(feature = "region-cn470")]
            Region::CN470 => &fixed_channel_plans::CN470,
            #[cfg(feature = "region-eu433")]
            Region::EU433 => &dynamic_channel_plans::EU433,
            #[cfg(feature = "region-eu868")]
            Region::EU868 => &dynamic_channel_plans::EU868,
            #[cfg(feature = "region-in865")]
            Region::IN865 => &dynamic_channel_plans::IN865,
            #[cfg(feature = "region-kr920")]
            Region::KR920 => &dynamic_channel_plans::KR920,
            #[cfg(feature = "region-us915")]
            Region::US915 => &fixed_channel_plans::US915,
        }
    }
}

/// Static regional parameters. Implementations are zero-sized or hold only `'static` tables and
/// are never mutated.
pub(crate) trait ChannelRegion: Sync {
    fn datarates(&self) -> &'static DatarateTable;

    /// RX1 downlink data rate, indexed by uplink data rate and then by RX1 data-rate offset. An
    /// empty row marks an uplink data rate without RX1 mapping.
    fn rx1_datarates(&self) -> &'static [&'static [DR]];

    fn uplink_channels(&self) -> &'static [Channel];

    /// Downlink frequency of the first receive window for an uplink on `channel`.
    fn rx1_frequency(&self, _channel: usize, uplink_frequency: u32) -> u32 {
        uplink_frequency
    }

    fn rx2_frequency(&self) -> u32;

    fn rx2_datarate(&self) -> DR {
        DR::_0
    }

    fn max_eirp(&self) -> u8;

    /// Highest TX power index of the region.
    fn max_tx_power(&self) -> u8 {
        7
    }

    fn mask_layout(&self) -> MaskLayout {
        MaskLayout::Chunks
    }

    fn default_channels(&self) -> ChannelSet {
        ChannelSet::all_enabled(self.uplink_channels().len())
    }
}

/// The regional parameters of one [`Region`] together with the set of channels the network
/// wants enabled.
///
/// The regional tables are shared between all bands of a region; the enabled set is owned by
/// the band and its size never changes.
#[derive(Clone)]
pub struct Band {
    region: Region,
    profile: &'static dyn ChannelRegion,
    enabled: ChannelSet,
}

impl fmt::Debug for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Band")
            .field("region", &self.region)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl From<Region> for Band {
    fn from(region: Region) -> Band {
        Band::new(region)
    }
}

impl Band {
    /// Creates a band with the region's default channels enabled.
    pub fn new(region: Region) -> Band {
        let profile = region.profile();
        Band { region, profile, enabled: profile.default_channels() }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Uplink channels of the plan, in index order.
    pub fn channels(&self) -> &'static [Channel] {
        self.profile.uplink_channels()
    }

    pub fn channel(&self, index: usize) -> Result<&'static Channel, Error> {
        self.channels().get(index).ok_or(Error::ChannelOutOfRange)
    }

    /// Index of the uplink channel using `frequency`.
    pub fn uplink_channel_number(&self, frequency: u32) -> Result<usize, Error> {
        self.channels()
            .iter()
            .position(|channel| channel.frequency() == frequency)
            .ok_or(Error::FrequencyNotFound)
    }

    /// Downlink frequency of the first receive window for an uplink on `uplink_frequency`.
    pub fn rx1_frequency(&self, uplink_frequency: u32) -> Result<u32, Error> {
        let channel = self.uplink_channel_number(uplink_frequency)?;
        Ok(self.profile.rx1_frequency(channel, uplink_frequency))
    }

    /// Downlink data rate of the first receive window.
    ///
    /// Fails with [`Error::InvalidDataRate`] if the region has no RX1 mapping for `uplink`, and
    /// with [`Error::InvalidDataRateOffset`] if `offset` is outside of the mapping.
    pub fn rx1_data_rate(&self, uplink: DR, offset: u8) -> Result<DR, Error> {
        let row = self
            .profile
            .rx1_datarates()
            .get(uplink as usize)
            .filter(|row| !row.is_empty())
            .ok_or(Error::InvalidDataRate)?;
        row.get(offset as usize).copied().ok_or(Error::InvalidDataRateOffset)
    }

    pub fn rx2_frequency(&self) -> u32 {
        self.profile.rx2_frequency()
    }

    pub fn rx2_data_rate(&self) -> DR {
        self.profile.rx2_datarate()
    }

    /// Encoding of an implemented data rate.
    pub fn data_rate(&self, dr: DR) -> Result<&'static Datarate, Error> {
        self.profile.datarates()[dr as usize].as_ref().ok_or(Error::InvalidDataRate)
    }

    /// Data rate index with the given encoding. Unimplemented indices never match.
    pub fn data_rate_index(&self, modulation: &Modulation) -> Result<DR, Error> {
        datarate::lookup_index(self.profile.datarates(), modulation).ok_or(Error::DataRateNotFound)
    }

    /// Maximum MACPayload size for `dr`, capped for repeater compatibility when requested.
    pub fn max_payload_size(&self, dr: DR, repeater_compatible: bool) -> Result<u8, Error> {
        let max_size = self.data_rate(dr)?.max_mac_payload_size();
        if repeater_compatible && max_size > REPEATER_MAX_MAC_PAYLOAD_SIZE {
            Ok(REPEATER_MAX_MAC_PAYLOAD_SIZE)
        } else {
            Ok(max_size)
        }
    }

    /// EIRP in dBm for a LinkADRReq TX power index.
    pub fn tx_power_eirp(&self, index: u8) -> Result<u8, Error> {
        if index > self.profile.max_tx_power() {
            return Err(Error::InvalidTxPower);
        }
        Ok(self.profile.max_eirp().saturating_sub(2 * index))
    }

    /// Checks an incoming uplink against the plan and returns its channel index.
    pub fn validate_uplink(&self, frequency: u32, dr: DR) -> Result<usize, Error> {
        let index = self.uplink_channel_number(frequency)?;
        if !self.channels()[index].datarates().contains(dr) || self.data_rate(dr).is_err() {
            return Err(Error::InvalidDataRate);
        }
        if !self.enabled.is_enabled(index) {
            return Err(Error::ChannelDisabled);
        }
        Ok(index)
    }

    pub fn enable_channel(&mut self, index: usize) -> Result<(), Error> {
        trace!("enable channel {}", index);
        self.enabled.enable(index)
    }

    pub fn disable_channel(&mut self, index: usize) -> Result<(), Error> {
        trace!("disable channel {}", index);
        self.enabled.disable(index)
    }

    pub fn is_channel_enabled(&self, index: usize) -> bool {
        self.enabled.is_enabled(index)
    }

    pub fn enabled_channels(&self) -> &ChannelSet {
        &self.enabled
    }

    /// Indices of the enabled channels, ascending.
    pub fn enabled_channel_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.enabled.enabled()
    }

    /// Every channel index of the plan, ascending.
    pub fn channel_indices(&self) -> Range<usize> {
        self.enabled.indices()
    }

    /// The set of channels a device uses after joining in this region.
    pub fn default_channels(&self) -> ChannelSet {
        self.profile.default_channels()
    }

    /// Restores the region's default enabled channels.
    pub fn reset_channels(&mut self) {
        self.enabled = self.profile.default_channels();
    }

    /// A channel set sized for this plan with only `indices` enabled.
    pub fn channel_set<I>(&self, indices: I) -> Result<ChannelSet, Error>
    where
        I: IntoIterator<Item = usize>,
    {
        ChannelSet::from_indices(self.channels().len(), indices)
    }

    /// Commands that move a device from `node` to the channels enabled on this band.
    pub fn link_adr_mask_commands(&self, node: &ChannelSet) -> Result<MaskCommands, Error> {
        self.mask_commands(node, &self.enabled)
    }

    /// Commands that move a device from `node` to `desired`, in the order they must be sent.
    pub fn mask_commands(
        &self,
        node: &ChannelSet,
        desired: &ChannelSet,
    ) -> Result<MaskCommands, Error> {
        let node = self.conform(node)?;
        let desired = self.conform(desired)?;
        Ok(channel_mask::build_mask_commands(self.profile.mask_layout(), &node, &desired))
    }

    /// The channels a device uses after applying `commands`, in order, on top of `node`.
    pub fn apply_mask_commands(
        &self,
        node: &ChannelSet,
        commands: &[MaskCommand],
    ) -> Result<ChannelSet, Error> {
        let node = self.conform(node)?;
        channel_mask::apply_mask_commands(self.profile.mask_layout(), &node, commands)
    }

    /// Re-sizes a caller-provided set to this plan.
    fn conform(&self, set: &ChannelSet) -> Result<ChannelSet, Error> {
        if set.channel_count() == self.channels().len() {
            Ok(set.clone())
        } else {
            self.channel_set(set.enabled())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn band_is_send_and_sync() {
        assert_send_sync::<Band>();
    }

    #[test]
    #[cfg(feature = "region-us915")]
    fn us915_lookups() {
        let band = Band::new(Region::US915);
        assert_eq!(band.channels().len(), 72);
        assert_eq!(band.uplink_channel_number(902_300_000), Ok(0));
        assert_eq!(band.uplink_channel_number(914_900_000), Ok(63));
        assert_eq!(band.uplink_channel_number(903_000_000), Ok(64));
        assert_eq!(band.uplink_channel_number(914_200_000), Ok(71));
        assert_eq!(band.uplink_channel_number(902_400_000), Err(Error::FrequencyNotFound));
        assert_eq!(band.rx1_frequency(902_300_000), Ok(923_300_000));
        assert_eq!(band.rx1_frequency(902_500_000), Ok(923_900_000));
        assert_eq!(band.rx1_frequency(903_700_000), Ok(927_500_000));
        assert_eq!(band.rx1_frequency(914_200_000), Ok(927_500_000));
        assert_eq!(band.rx1_data_rate(DR::_0, 0), Ok(DR::_10));
        assert_eq!(band.rx1_data_rate(DR::_4, 3), Ok(DR::_11));
        assert_eq!(band.rx1_data_rate(DR::_4, 4), Err(Error::InvalidDataRateOffset));
        assert_eq!(band.rx1_data_rate(DR::_5, 0), Err(Error::InvalidDataRate));
        assert_eq!(band.rx2_frequency(), 923_300_000);
        assert_eq!(band.rx2_data_rate(), DR::_8);
    }

    #[test]
    #[cfg(feature = "region-eu868")]
    fn eu868_lookups() {
        let band = Band::new(Region::EU868);
        assert_eq!(band.channels().len(), 3);
        assert_eq!(band.rx1_frequency(868_300_000), Ok(868_300_000));
        assert_eq!(band.rx1_data_rate(DR::_5, 2), Ok(DR::_3));
        assert_eq!(band.rx1_data_rate(DR::_1, 5), Ok(DR::_0));
        assert_eq!(band.rx1_data_rate(DR::_1, 6), Err(Error::InvalidDataRateOffset));
        assert_eq!(band.rx1_data_rate(DR::_8, 0), Err(Error::InvalidDataRate));
        assert_eq!(band.data_rate_index(&Modulation::Fsk { bitrate: 50_000 }), Ok(DR::_7));
        assert_eq!(band.rx2_frequency(), 869_525_000);
    }

    #[test]
    #[cfg(feature = "region-eu868")]
    fn tx_power_and_payload_size() {
        let band = Band::new(Region::EU868);
        assert_eq!(band.tx_power_eirp(0), Ok(16));
        assert_eq!(band.tx_power_eirp(7), Ok(2));
        assert_eq!(band.tx_power_eirp(8), Err(Error::InvalidTxPower));
        assert_eq!(band.max_payload_size(DR::_0, false), Ok(59));
        assert_eq!(band.max_payload_size(DR::_5, false), Ok(250));
        assert_eq!(band.max_payload_size(DR::_5, true), Ok(230));
        assert_eq!(band.max_payload_size(DR::_9, false), Err(Error::InvalidDataRate));
    }

    #[test]
    #[cfg(feature = "region-au915")]
    fn validate_uplink() {
        let mut band = Band::new(Region::AU915);
        assert_eq!(band.validate_uplink(915_200_000, DR::_5), Ok(0));
        assert_eq!(band.validate_uplink(915_200_000, DR::_6), Err(Error::InvalidDataRate));
        assert_eq!(band.validate_uplink(915_900_000, DR::_6), Ok(64));
        assert_eq!(band.validate_uplink(915_100_000, DR::_0), Err(Error::FrequencyNotFound));
        band.disable_channel(0).unwrap();
        assert_eq!(band.validate_uplink(915_200_000, DR::_0), Err(Error::ChannelDisabled));
    }

    #[test]
    #[cfg(feature = "region-au915")]
    fn enable_and_disable_channels() {
        let mut band = Band::new(Region::AU915);
        assert_eq!(band.enabled_channel_indices().count(), 72);
        band.disable_channel(3).unwrap();
        band.disable_channel(3).unwrap();
        assert!(!band.is_channel_enabled(3));
        band.enable_channel(3).unwrap();
        band.enable_channel(3).unwrap();
        assert!(band.is_channel_enabled(3));
        assert_eq!(band.enable_channel(72), Err(Error::ChannelOutOfRange));
        assert_eq!(band.disable_channel(72), Err(Error::ChannelOutOfRange));
        assert_eq!(band.channel_indices(), 0..72);

        band.disable_channel(10).unwrap();
        band.reset_channels();
        assert_eq!(band.enabled_channels(), &band.default_channels());
    }

    #[test]
    #[cfg(feature = "region-au915")]
    fn mismatched_sets_are_conformed() {
        let band = Band::new(Region::AU915);
        let short = ChannelSet::from_indices(16, 0..8).unwrap();
        let commands = band.link_adr_mask_commands(&short).unwrap();
        let applied = band.apply_mask_commands(&short, &commands).unwrap();
        assert_eq!(&applied, band.enabled_channels());

        let wide = ChannelSet::from_indices(96, [90]).unwrap();
        assert_eq!(band.link_adr_mask_commands(&wide), Err(Error::ChannelOutOfRange));
    }
}
