pub mod codec;
pub mod commander;
pub mod config;
pub mod error;
pub mod mixer;
pub mod touchosc;

pub use error::{Error, Result};
pub use mixer::{Mixer, PageSetup, TrackSlot};
