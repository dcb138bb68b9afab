#![cfg(feature = "all-regions")]

use lorawan_band::region::channel_mask::{CHUNK_SIZE, MAX_MASK_COMMANDS};
use lorawan_band::{Band, ChMaskCntl, ChannelSet, MaskCommand, Region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REGIONS: [Region; 11] = [
    Region::AS923_1,
    Region::AS923_2,
    Region::AS923_3,
    Region::AS923_4,
    Region::AU915,
    Region::CN470,
    Region::EU433,
    Region::EU868,
    Region::IN865,
    Region::KR920,
    Region::US915,
];

fn subset(band: &Band, bits: u32) -> ChannelSet {
    band.channel_set(band.channel_indices().filter(|&i| bits & (1 << i) != 0)).unwrap()
}

fn random_set(band: &Band, rng: &mut StdRng, density: f64) -> ChannelSet {
    let indices: Vec<usize> = band.channel_indices().filter(|_| rng.gen_bool(density)).collect();
    band.channel_set(indices).unwrap()
}

/// Position of a command in the emitted order: all-off first, then chunks ascending.
fn order_key(command: &MaskCommand) -> u8 {
    match command.ch_mask_cntl() {
        ChMaskCntl::AllOff => 0,
        ChMaskCntl::Chunk(chunk) => chunk + 1,
        ChMaskCntl::AllOn => u8::MAX,
    }
}

fn check(band: &Band, node: &ChannelSet, desired: &ChannelSet) {
    let commands = band.mask_commands(node, desired).unwrap();

    assert_eq!(commands, band.mask_commands(node, desired).unwrap(), "not deterministic");
    assert!(commands.len() <= MAX_MASK_COMMANDS);
    assert_eq!(commands.is_empty(), node == desired);
    assert!(commands.windows(2).all(|pair| order_key(&pair[0]) < order_key(&pair[1])));
    for command in commands.iter() {
        match command.ch_mask_cntl() {
            ChMaskCntl::Chunk(chunk) => {
                assert!((chunk as usize) * CHUNK_SIZE < band.channels().len());
            }
            ChMaskCntl::AllOn => panic!("all-on is never emitted"),
            ChMaskCntl::AllOff => {}
        }
    }

    let applied = band.apply_mask_commands(node, &commands).unwrap();
    assert_eq!(&applied, desired, "{:?}: {:?}", band.region(), commands);
}

#[test]
fn small_plans_exhaustive() {
    for region in REGIONS {
        let band = Band::new(region);
        let len = band.channels().len();
        if len > 8 {
            continue;
        }
        for node in 0..1u32 << len {
            for desired in 0..1u32 << len {
                check(&band, &subset(&band, node), &subset(&band, desired));
            }
        }
    }
}

#[test]
fn large_plans_random() {
    let mut rng = StdRng::seed_from_u64(0x4c6f_5261);
    for region in REGIONS {
        let band = Band::new(region);
        if band.channels().len() <= 8 {
            continue;
        }
        for density in [0.05, 0.5, 0.95] {
            for _ in 0..200 {
                let node = random_set(&band, &mut rng, density);
                let desired = random_set(&band, &mut rng, density);
                check(&band, &node, &desired);
                check(&band, band.enabled_channels(), &desired);
                check(&band, &desired, &desired);
            }
        }
    }
}

#[test]
fn unchanged_chunks_are_skipped() {
    let band = Band::new(Region::CN470);
    let node = band.enabled_channels().clone();
    let desired = band.channel_set((0..96).filter(|&i| i != 40 && i != 90)).unwrap();

    let commands = band.mask_commands(&node, &desired).unwrap();
    let chunks: Vec<ChMaskCntl> = commands.iter().map(|c| c.ch_mask_cntl()).collect();
    assert_eq!(chunks, [ChMaskCntl::Chunk(2), ChMaskCntl::Chunk(5)]);
}

#[test]
fn disabling_everything() {
    for region in REGIONS {
        let band = Band::new(region);
        let node = band.enabled_channels().clone();
        let desired = band.channel_set([]).unwrap();
        check(&band, &node, &desired);
    }
}
