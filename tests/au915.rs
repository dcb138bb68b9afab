#![cfg(feature = "region-au915")]

use lora_modulation::{Bandwidth, SpreadingFactor};
use lorawan_band::{Band, ChMask, ChMaskCntl, Error, MaskCommand, Modulation, Region, DR};

fn band_with_enabled(enabled: &[usize]) -> Band {
    let mut band = Band::new(Region::AU915);
    for channel in band.channel_indices() {
        band.disable_channel(channel).unwrap();
    }
    for &channel in enabled {
        band.enable_channel(channel).unwrap();
    }
    band
}

fn cmd(cntl: u8, mask: u16) -> MaskCommand {
    MaskCommand::new(ChMaskCntl::try_from(cntl).unwrap(), ChMask::new(mask))
}

#[test]
fn channel_plan() {
    let band = Band::new(Region::AU915);
    assert_eq!(band.channels().len(), 72);

    let first = band.channel(0).unwrap();
    assert_eq!(first.frequency(), 915_200_000);
    assert_eq!((first.datarates().min(), first.datarates().max()), (DR::_0, DR::_5));

    let last_narrow = band.channel(63).unwrap();
    assert_eq!(last_narrow.frequency(), 927_800_000);
    assert_eq!((last_narrow.datarates().min(), last_narrow.datarates().max()), (DR::_0, DR::_5));

    let first_wide = band.channel(64).unwrap();
    assert_eq!(first_wide.frequency(), 915_900_000);
    assert_eq!((first_wide.datarates().min(), first_wide.datarates().max()), (DR::_6, DR::_6));

    let last_wide = band.channel(71).unwrap();
    assert_eq!(last_wide.frequency(), 927_100_000);
    assert_eq!((last_wide.datarates().min(), last_wide.datarates().max()), (DR::_6, DR::_6));

    assert_eq!(band.channel(72), Err(Error::ChannelOutOfRange));
}

#[test]
fn rx1_frequency() {
    let band = Band::new(Region::AU915);
    assert_eq!(band.rx1_frequency(915_900_000), Ok(923_300_000));
    assert_eq!(band.rx1_frequency(915_200_000), Ok(923_300_000));
    assert_eq!(band.rx1_frequency(915_400_000), Ok(923_900_000));
    assert_eq!(band.rx1_frequency(915_300_000), Err(Error::FrequencyNotFound));
}

#[test]
fn rx1_data_rate() {
    let band = Band::new(Region::AU915);
    assert_eq!(band.rx1_data_rate(DR::_0, 0), Ok(DR::_8));
    assert_eq!(band.rx1_data_rate(DR::_0, 1), Ok(DR::_8));
    assert_eq!(band.rx1_data_rate(DR::_4, 0), Ok(DR::_12));
    assert_eq!(band.rx1_data_rate(DR::_6, 5), Ok(DR::_9));
    assert_eq!(band.rx1_data_rate(DR::_0, 7), Err(Error::InvalidDataRateOffset));
    assert_eq!(band.rx1_data_rate(DR::_7, 0), Err(Error::InvalidDataRate));
}

#[test]
fn data_rate_reverse_lookup() {
    let band = Band::new(Region::AU915);
    for dr in (0..16).map(|dr| DR::try_from(dr).unwrap()) {
        let Ok(datarate) = band.data_rate(dr) else {
            continue;
        };
        let expected = if dr == DR::_12 { DR::_6 } else { dr };
        assert_eq!(band.data_rate_index(datarate.modulation()), Ok(expected), "{dr:?}");
    }

    let unknown =
        Modulation::LoRa { spreading_factor: SpreadingFactor::_5, bandwidth: Bandwidth::_125KHz };
    assert_eq!(band.data_rate_index(&unknown), Err(Error::DataRateNotFound));
    assert_eq!(band.data_rate_index(&Modulation::Fsk { bitrate: 50_000 }), Err(Error::DataRateNotFound));
}

#[test]
fn link_adr_mask_commands() {
    let all = Band::new(Region::AU915).enabled_channels().clone();

    let cases: [(&str, Vec<usize>, Vec<MaskCommand>); 5] = [
        ("only 0-7 active", (0..8).collect(), vec![cmd(7, 0), cmd(0, 0x00FF)]),
        ("only 8-23 active", (8..24).collect(), vec![cmd(7, 0), cmd(0, 0xFF00), cmd(1, 0x00FF)]),
        ("only 64-71 active", (64..72).collect(), vec![cmd(7, 0x00FF)]),
        ("0-7 inactive", (8..72).collect(), vec![cmd(0, 0xFF00)]),
        ("all active", (0..72).collect(), vec![]),
    ];

    for (name, enabled, expected) in cases {
        let band = band_with_enabled(&enabled);
        let commands = band.link_adr_mask_commands(&all).unwrap();
        assert_eq!(commands.as_slice(), expected.as_slice(), "{name}");

        let applied = band.apply_mask_commands(&all, &commands).unwrap();
        assert_eq!(&applied, band.enabled_channels(), "{name}");
    }
}

#[test]
fn equal_length_sequences_prefer_per_chunk() {
    // first sub-band to second sub-band: all-off would take two commands as well
    let band = band_with_enabled(&[8, 9, 10, 11, 12, 13, 14, 15, 65]);
    let node = band.channel_set((0..8).chain([64])).unwrap();

    let commands = band.link_adr_mask_commands(&node).unwrap();
    assert_eq!(commands.as_slice(), &[cmd(0, 0xFF00), cmd(4, 0x0002)]);
    assert_eq!(&band.apply_mask_commands(&node, &commands).unwrap(), band.enabled_channels());
}
