//! Regions with a fixed channel plan: every uplink channel is defined by the region, and the RX1
//! downlink frequency is derived from the uplink channel index.
use super::*;
use lora_modulation::{Bandwidth, SpreadingFactor};

#[cfg(feature = "region-au915")]
mod au915;
#[cfg(feature = "region-cn470")]
mod cn470;
#[cfg(feature = "region-us915")]
mod us915;

#[cfg(feature = "region-au915")]
pub(crate) use au915::AU915;
#[cfg(feature = "region-cn470")]
pub(crate) use cn470::CN470;
#[cfg(feature = "region-us915")]
pub(crate) use us915::US915;

/// First channel of the 500 kHz block in US915 and AU915.
const WIDE_BLOCK_START: usize = 64;

/// Builds a plan of evenly spaced channels: the first `narrow` channels start at `first` and are
/// `step` apart, the remaining ones start at `wide_first` and are `wide_step` apart.
#[allow(clippy::too_many_arguments)]
const fn uplink_channels<const N: usize>(
    first: u32,
    step: u32,
    narrow: usize,
    narrow_drs: (DR, DR),
    wide_first: u32,
    wide_step: u32,
    wide_drs: (DR, DR),
) -> [Channel; N] {
    let mut channels = [Channel::new(0, DR::_0, DR::_0); N];
    let mut i = 0;
    while i < N {
        channels[i] = if i < narrow {
            Channel::new(first + i as u32 * step, narrow_drs.0, narrow_drs.1)
        } else {
            Channel::new(wide_first + (i - narrow) as u32 * wide_step, wide_drs.0, wide_drs.1)
        };
        i += 1;
    }
    channels
}

const fn downlink_channels<const N: usize>(first: u32, step: u32) -> [u32; N] {
    let mut channels = [0; N];
    let mut i = 0;
    while i < N {
        channels[i] = first + i as u32 * step;
        i += 1;
    }
    channels
}

/// Uplink channel `n` answers on downlink channel `n mod len`.
fn rx1_downlink(downlink_channels: &[u32], channel: usize) -> u32 {
    downlink_channels[channel % downlink_channels.len()]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn evenly_spaced_plan() {
        let channels: [Channel; 10] =
            uplink_channels(100, 10, 8, (DR::_0, DR::_3), 1_000, 100, (DR::_4, DR::_4));
        assert_eq!(channels[0].frequency(), 100);
        assert_eq!(channels[7].frequency(), 170);
        assert_eq!(channels[8].frequency(), 1_000);
        assert_eq!(channels[9].frequency(), 1_100);
        assert!(channels[7].datarates().contains(DR::_3));
        assert!(!channels[8].datarates().contains(DR::_3));
    }

    #[test]
    fn downlink_wraps_around() {
        let downlink: [u32; 8] = downlink_channels(923_300_000, 600_000);
        assert_eq!(rx1_downlink(&downlink, 0), 923_300_000);
        assert_eq!(rx1_downlink(&downlink, 9), 923_900_000);
        assert_eq!(rx1_downlink(&downlink, 71), 927_500_000);
    }
}
