#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! LoRaWAN regional parameters and the LinkADRReq channel-mask negotiation.
//!
//! A [`Band`] is obtained for a [`Region`] and answers the static lookups of the regional plan
//! (uplink channels, RX1 frequency and data rate, data-rate encodings) while owning the set of
//! channels the network wants enabled. The channel-mask codec turns the difference between what a
//! device currently uses and what the band wants into an ordered list of [`MaskCommand`]s, and
//! replays such a list on top of a device's channel set.
//!
//! ```
//! use lorawan_band::{Band, Region};
//!
//! let mut band = Band::new(Region::AU915);
//! let device = band.enabled_channels().clone();
//!
//! for channel in 8..72 {
//!     band.disable_channel(channel).unwrap();
//! }
//!
//! let commands = band.link_adr_mask_commands(&device).unwrap();
//! let applied = band.apply_mask_commands(&device, &commands).unwrap();
//! assert_eq!(&applied, band.enabled_channels());
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

mod fmt;

pub mod region;
pub use region::{
    channel::{Channel, ChannelSet},
    channel_mask::{ChMask, ChMaskCntl, MaskCommand, MaskCommands},
    datarate::{DataRateRange, Datarate, Modulation, DR},
    Band, Error, Region,
};
