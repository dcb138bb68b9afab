use core::ops::Range;

use super::channel_mask::{ChMask, CHUNK_SIZE};
use super::datarate::{DataRateRange, DR};
use super::Error;

/// Largest channel plan supported by a [`ChannelSet`] (CN470: 96 uplink channels).
pub const MAX_CHANNELS: usize = 96;

/// An uplink channel of a regional plan. Its index in the plan is its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Channel {
    frequency: u32,
    datarates: DataRateRange,
}

impl Channel {
    pub(crate) const fn new(frequency: u32, dr_min: DR, dr_max: DR) -> Self {
        Self { frequency, datarates: DataRateRange::new(dr_min, dr_max) }
    }

    /// Uplink frequency in Hz.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn datarates(&self) -> DataRateRange {
        self.datarates
    }
}

/// Fixed-size bitmap of the enabled channels of one channel plan.
///
/// The number of channels is fixed when the set is created; indices at or beyond it are rejected
/// with [`Error::ChannelOutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawChannelSet"))]
pub struct ChannelSet {
    bits: [u8; MAX_CHANNELS / 8],
    len: u8,
}

/// Unchecked wire form of a [`ChannelSet`], validated before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawChannelSet {
    bits: [u8; MAX_CHANNELS / 8],
    len: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawChannelSet> for ChannelSet {
    type Error = Error;

    /// Rejects sets larger than [`MAX_CHANNELS`] and sets with channels enabled past their end.
    fn try_from(raw: RawChannelSet) -> Result<Self, Self::Error> {
        if raw.len as usize > MAX_CHANNELS {
            return Err(Error::ChannelOutOfRange);
        }
        let set = ChannelSet { bits: raw.bits, len: raw.len };
        if set.count_enabled() != set.enabled().count() {
            return Err(Error::ChannelOutOfRange);
        }
        Ok(set)
    }
}

impl ChannelSet {
    /// A set of `len` channels, all disabled.
    pub(crate) fn new(len: usize) -> Self {
        debug_assert!(len <= MAX_CHANNELS);
        Self { bits: [0; MAX_CHANNELS / 8], len: len.min(MAX_CHANNELS) as u8 }
    }

    /// A set of `len` channels, all enabled.
    pub(crate) fn all_enabled(len: usize) -> Self {
        let mut set = Self::new(len);
        set.set_range(0..set.channel_count(), true);
        set
    }

    /// Builds a set of `len` channels with only `indices` enabled.
    pub fn from_indices<I>(len: usize, indices: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = usize>,
    {
        if len > MAX_CHANNELS {
            return Err(Error::ChannelOutOfRange);
        }
        let mut set = Self::new(len);
        for index in indices {
            set.enable(index)?;
        }
        Ok(set)
    }

    /// Number of channels in the plan this set belongs to.
    pub fn channel_count(&self) -> usize {
        self.len as usize
    }

    /// Enables a channel. Enabling an enabled channel is a no-op.
    pub fn enable(&mut self, index: usize) -> Result<(), Error> {
        self.set(index, true)
    }

    /// Disables a channel. Disabling a disabled channel is a no-op.
    pub fn disable(&mut self, index: usize) -> Result<(), Error> {
        self.set(index, false)
    }

    pub fn set(&mut self, index: usize, enabled: bool) -> Result<(), Error> {
        if index >= self.channel_count() {
            return Err(Error::ChannelOutOfRange);
        }
        self.set_unchecked(index, enabled);
        Ok(())
    }

    /// Returns `false` for indices outside of the plan.
    pub fn is_enabled(&self, index: usize) -> bool {
        index < self.channel_count() && self.bits[index >> 3] & (1 << (index & 0x07)) != 0
    }

    /// Indices of the enabled channels, ascending.
    pub fn enabled(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices().filter(|&index| self.is_enabled(index))
    }

    /// Every channel index of the plan, ascending.
    pub fn indices(&self) -> Range<usize> {
        0..self.channel_count()
    }

    pub fn count_enabled(&self) -> usize {
        self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// The 16-channel chunk `chunk` as a mask; channels past the end of the plan read as disabled.
    pub fn chunk(&self, chunk: usize) -> ChMask {
        let mut mask = ChMask::default();
        for bit in 0..CHUNK_SIZE {
            mask.set(bit, self.is_enabled(chunk * CHUNK_SIZE + bit));
        }
        mask
    }

    /// Whether any channel of `chunk` differs between the two sets.
    pub(crate) fn chunk_differs(&self, other: &ChannelSet, chunk: usize) -> bool {
        self.chunk(chunk) != other.chunk(chunk)
    }

    pub(crate) fn set_range(&mut self, range: Range<usize>, enabled: bool) {
        for index in range {
            if index < self.channel_count() {
                self.set_unchecked(index, enabled);
            }
        }
    }

    fn set_unchecked(&mut self, index: usize, enabled: bool) {
        if enabled {
            self.bits[index >> 3] |= 1 << (index & 0x07);
        } else {
            self.bits[index >> 3] &= !(1 << (index & 0x07));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enable_and_disable_are_idempotent() {
        let mut set = ChannelSet::new(16);
        set.enable(3).unwrap();
        let once = set.clone();
        set.enable(3).unwrap();
        assert_eq!(set, once);

        set.disable(3).unwrap();
        let once = set.clone();
        set.disable(3).unwrap();
        assert_eq!(set, once);
        assert_eq!(set.count_enabled(), 0);
    }

    #[test]
    fn out_of_range_channels_are_rejected() {
        let mut set = ChannelSet::new(8);
        assert_eq!(set.enable(8), Err(Error::ChannelOutOfRange));
        assert_eq!(set.disable(100), Err(Error::ChannelOutOfRange));
        assert!(!set.is_enabled(8));
        assert_eq!(ChannelSet::from_indices(8, [9]), Err(Error::ChannelOutOfRange));
        assert_eq!(ChannelSet::from_indices(97, []), Err(Error::ChannelOutOfRange));
    }

    #[test]
    fn enabled_indices_are_ascending() {
        let set = ChannelSet::from_indices(72, [70, 3, 17, 64]).unwrap();
        let enabled: Vec<usize> = set.enabled().collect();
        assert_eq!(enabled, [3, 17, 64, 70]);
        assert_eq!(set.indices(), 0..72);
    }

    #[test]
    fn all_enabled_stops_at_plan_size() {
        let set = ChannelSet::all_enabled(72);
        assert_eq!(set.count_enabled(), 72);
        assert_eq!(set.chunk(4), ChMask::new(0x00FF));
        assert_eq!(set.chunk(5), ChMask::new(0));
    }

    #[test]
    fn chunk_reads_sixteen_channels() {
        let set = ChannelSet::from_indices(72, [16, 17, 31]).unwrap();
        assert_eq!(set.chunk(0), ChMask::new(0));
        assert_eq!(set.chunk(1), ChMask::new(0b1000_0000_0000_0011));
        assert!(set.chunk_differs(&ChannelSet::new(72), 1));
        assert!(!set.chunk_differs(&ChannelSet::new(72), 2));
    }
}
