//! LinkADRReq channel-mask negotiation.
//!
//! A LinkADRReq can only address 16 channels at a time: `ChMaskCntl` selects the 16-channel chunk
//! (`0..=5`) the `ChMask` applies to, or one of the reserved values that switch whole groups of
//! channels at once. Turning an arbitrary set of channels on therefore takes an ordered sequence
//! of commands, and the device applies them one after another.
//!
//! Two strategies are used to build that sequence:
//!
//! * **per chunk**: one command for every chunk whose desired state differs from the device's,
//!   carrying the complete desired mask of that chunk. Chunks the plan does not reach are never
//!   addressed.
//! * **all off** (plans with a wide block only, ie: US915 and AU915): `ChMaskCntl = 7` switches
//!   every 125 kHz channel off and sets the wide block from its mask, then one command per 125 kHz
//!   chunk that holds desired channels.
//!
//! The all-off sequence is chosen only when it is strictly shorter. In both cases commands are
//! emitted in ascending chunk order, with the all-off command first, so that
//! [`apply_mask_commands`] reproduces the desired set from the device's set.
use lorawan::maccommandcreator::LinkADRReqCreator;
use lorawan::maccommands::{ChannelMask, Redundancy};

use super::channel::{ChannelSet, MAX_CHANNELS};
use super::Error;

/// Number of channels addressed by one `ChMask`.
pub const CHUNK_SIZE: usize = 16;

/// Upper bound of commands produced for one negotiation: one per chunk plus a leading all-off.
pub const MAX_MASK_COMMANDS: usize = MAX_CHANNELS / CHUNK_SIZE + 1;

pub type MaskCommands = heapless::Vec<MaskCommand, MAX_MASK_COMMANDS>;

const ALL_ON: u8 = 6;
const ALL_OFF: u8 = 7;

/// The 16-bit `ChMask` field; bit `n` controls the `n`-th channel of the addressed chunk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChMask(u16);

impl ChMask {
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_enabled(&self, bit: usize) -> bool {
        bit < CHUNK_SIZE && self.0 & (1 << bit) != 0
    }

    /// Bits outside of `0..16` are ignored.
    pub fn set(&mut self, bit: usize, enabled: bool) {
        if bit >= CHUNK_SIZE {
            return;
        }
        if enabled {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<ChMask> for ChannelMask<2> {
    fn from(mask: ChMask) -> Self {
        ChannelMask::from(mask.0.to_le_bytes())
    }
}

impl From<&ChannelMask<2>> for ChMask {
    fn from(mask: &ChannelMask<2>) -> Self {
        let bytes = mask.as_ref();
        ChMask(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

/// Interpretation of a [`ChMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChMaskCntl {
    /// The mask applies to channels `16 * n ..= 16 * n + 15`.
    Chunk(u8),
    /// Every channel on. With a wide block the mask applies to the wide block, otherwise it is
    /// ignored.
    AllOn,
    /// Every 125 kHz channel off, the mask applies to the wide block. Only defined for plans with
    /// a wide block.
    AllOff,
}

impl ChMaskCntl {
    /// The 3-bit wire value.
    pub fn value(&self) -> u8 {
        match self {
            ChMaskCntl::Chunk(chunk) => *chunk,
            ChMaskCntl::AllOn => ALL_ON,
            ChMaskCntl::AllOff => ALL_OFF,
        }
    }
}

impl TryFrom<u8> for ChMaskCntl {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=5 => Ok(ChMaskCntl::Chunk(value)),
            ALL_ON => Ok(ChMaskCntl::AllOn),
            ALL_OFF => Ok(ChMaskCntl::AllOff),
            _ => Err(Error::MalformedCommand),
        }
    }
}

/// The channel-mask part of a LinkADRReq.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskCommand {
    ch_mask_cntl: ChMaskCntl,
    ch_mask: ChMask,
}

impl MaskCommand {
    pub fn new(ch_mask_cntl: ChMaskCntl, ch_mask: ChMask) -> Self {
        Self { ch_mask_cntl, ch_mask }
    }

    pub fn ch_mask_cntl(&self) -> ChMaskCntl {
        self.ch_mask_cntl
    }

    pub fn ch_mask(&self) -> ChMask {
        self.ch_mask
    }

    pub fn channel_mask(&self) -> ChannelMask<2> {
        self.ch_mask.into()
    }

    /// The LinkADRReq `Redundancy` byte for this command, `nb_trans` is truncated to 4 bits.
    pub fn redundancy(&self, nb_trans: u8) -> Redundancy {
        Redundancy::new((self.ch_mask_cntl.value() << 4) | (nb_trans & 0x0f))
    }

    /// Reads the command back from the fields of a received LinkADRReq.
    pub fn from_link_adr(
        redundancy: &Redundancy,
        channel_mask: &ChannelMask<2>,
    ) -> Result<Self, Error> {
        Ok(Self {
            ch_mask_cntl: ChMaskCntl::try_from(redundancy.channel_mask_control())?,
            ch_mask: channel_mask.into(),
        })
    }

    /// Fills in the channel mask and redundancy of a LinkADRReq. Data rate and TX power are left
    /// to the caller.
    pub fn write_link_adr_req<'a>(
        &self,
        creator: &'a mut LinkADRReqCreator,
        nb_trans: u8,
    ) -> &'a mut LinkADRReqCreator {
        creator.set_channel_mask(self.channel_mask()).set_redundancy(self.redundancy(nb_trans))
    }
}

/// How the reserved `ChMaskCntl` values behave for a channel plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MaskLayout {
    /// Chunk commands and all-on only.
    Chunks,
    /// 125 kHz channels followed by a block of wide channels starting at `start`, a multiple of
    /// [`CHUNK_SIZE`]. All-on and all-off switch the 125 kHz channels and carry the wide block.
    WideBlock { start: usize },
}

/// Builds the commands that turn `node` into `desired`. Empty when they already agree.
pub(crate) fn build_mask_commands(
    layout: MaskLayout,
    node: &ChannelSet,
    desired: &ChannelSet,
) -> MaskCommands {
    let chunked = per_chunk(node, desired);
    if chunked.is_empty() {
        trace!("channel masks already in sync");
        return chunked;
    }

    if let MaskLayout::WideBlock { start } = layout {
        let reset = all_off_then_chunks(start, desired);
        if reset.len() < chunked.len() {
            debug!("all-off channel mask sequence, {} commands", reset.len());
            return reset;
        }
    }

    debug!("per-chunk channel mask sequence, {} commands", chunked.len());
    chunked
}

fn push(commands: &mut MaskCommands, command: MaskCommand) {
    // MAX_MASK_COMMANDS covers every chunk of the largest plan plus the leading all-off command.
    let pushed = commands.push(command);
    debug_assert!(pushed.is_ok(), "MAX_MASK_COMMANDS too small for the channel plan");
}

fn per_chunk(node: &ChannelSet, desired: &ChannelSet) -> MaskCommands {
    let mut commands = MaskCommands::new();
    for chunk in 0..desired.channel_count().div_ceil(CHUNK_SIZE) {
        if desired.chunk_differs(node, chunk) {
            push(
                &mut commands,
                MaskCommand::new(ChMaskCntl::Chunk(chunk as u8), desired.chunk(chunk)),
            );
        }
    }
    commands
}

fn all_off_then_chunks(start: usize, desired: &ChannelSet) -> MaskCommands {
    debug_assert_eq!(start % CHUNK_SIZE, 0);
    let mut commands = MaskCommands::new();

    let mut wide = ChMask::default();
    for index in desired.enabled().filter(|&index| index >= start) {
        wide.set(index - start, true);
    }
    push(&mut commands, MaskCommand::new(ChMaskCntl::AllOff, wide));

    for chunk in 0..start / CHUNK_SIZE {
        let mask = desired.chunk(chunk);
        if !mask.is_empty() {
            push(&mut commands, MaskCommand::new(ChMaskCntl::Chunk(chunk as u8), mask));
        }
    }
    commands
}

/// Replays `commands` in order on top of `node`.
pub(crate) fn apply_mask_commands(
    layout: MaskLayout,
    node: &ChannelSet,
    commands: &[MaskCommand],
) -> Result<ChannelSet, Error> {
    let mut channels = node.clone();
    for command in commands {
        apply(layout, &mut channels, command).inspect_err(|_| {
            warn!("rejecting channel mask command {}", command.ch_mask_cntl.value());
        })?;
    }
    Ok(channels)
}

fn apply(layout: MaskLayout, channels: &mut ChannelSet, command: &MaskCommand) -> Result<(), Error> {
    let len = channels.channel_count();
    let mask = command.ch_mask;
    match (command.ch_mask_cntl, layout) {
        (ChMaskCntl::Chunk(chunk), _) => {
            let base = chunk as usize * CHUNK_SIZE;
            if base >= len || (0..CHUNK_SIZE).any(|bit| base + bit >= len && mask.is_enabled(bit))
            {
                return Err(Error::MalformedCommand);
            }
            for bit in 0..CHUNK_SIZE.min(len - base) {
                channels.set(base + bit, mask.is_enabled(bit))?;
            }
        }
        (cntl @ (ChMaskCntl::AllOn | ChMaskCntl::AllOff), MaskLayout::WideBlock { start }) => {
            let wide = len.saturating_sub(start);
            if (wide..CHUNK_SIZE).any(|bit| mask.is_enabled(bit)) {
                return Err(Error::MalformedCommand);
            }
            channels.set_range(0..start, cntl == ChMaskCntl::AllOn);
            for bit in 0..wide {
                channels.set(start + bit, mask.is_enabled(bit))?;
            }
        }
        (ChMaskCntl::AllOn, MaskLayout::Chunks) => channels.set_range(0..len, true),
        (ChMaskCntl::AllOff, MaskLayout::Chunks) => return Err(Error::MalformedCommand),
    }
    Ok(())
}
