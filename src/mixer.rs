use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of consecutive mixer tracks covered by one bank.
pub const TRACKS_PER_BANK: u32 = 12;

/// A channel strip shown on every generated page. `track` is the
/// 1-based track number within the first bank.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct TrackSlot {
    pub name: String,
    pub color: String,
    pub track: u32,
}

/// One page of the generated layout, bound to a bank by its position.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageSetup {
    pub name: String,
    pub mix_name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Mixer {
    #[serde(default = "default_tracks")]
    pub tracks: Vec<TrackSlot>,
    #[serde(default = "default_pages")]
    pub pages: Vec<PageSetup>,
}

impl TrackSlot {
    pub fn new(name: &str, color: &str, track: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            track,
        }
    }

    /// Track number of this slot within the given 1-based bank.
    pub fn track_in_bank(&self, bank: u32) -> u32 {
        track_number(self.track, bank)
    }
}

impl PageSetup {
    pub fn new(name: &str, mix_name: &str) -> Self {
        Self {
            name: name.into(),
            mix_name: mix_name.into(),
        }
    }

    /// Label of the master fader when the page is derived from a template.
    pub fn master_label(&self) -> String {
        format!("{} Master", self.name)
    }
}

impl Mixer {
    /// The master strip is always the first slot.
    pub fn master(&self) -> Option<&TrackSlot> {
        self.tracks.first()
    }

    /// Pages paired with their 1-based bank index.
    pub fn banks(&self) -> impl Iterator<Item = (u32, &PageSetup)> {
        self.pages.iter().zip(1..).map(|(page, bank)| (bank, page))
    }

    pub fn find_bank(&self, page_name: &str) -> Result<(u32, &PageSetup)> {
        self.banks()
            .find(|(_, page)| page.name.eq_ignore_ascii_case(page_name))
            .ok_or_else(|| Error::UnknownPage(page_name.into()))
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
            pages: default_pages(),
        }
    }
}

pub fn track_number(base_track: u32, bank: u32) -> u32 {
    base_track + (bank - 1) * TRACKS_PER_BANK
}

fn default_tracks() -> Vec<TrackSlot> {
    vec![
        TrackSlot::new("Master", "red", 1),
        TrackSlot::new("Vox MG", "yellow", 2),
        TrackSlot::new("Vox JD", "yellow", 3),
        TrackSlot::new("Vox AS", "yellow", 4),
        TrackSlot::new("Gtr MG", "purple", 6),
        TrackSlot::new("Gtr JD", "purple", 7),
        TrackSlot::new("Bass", "purple", 8),
        TrackSlot::new("Kick", "green", 10),
        TrackSlot::new("Snare", "green", 11),
        TrackSlot::new("Overheads", "green", 12),
    ]
}

fn default_pages() -> Vec<PageSetup> {
    vec![
        PageSetup::new("PA", "PA System"),
        PageSetup::new("JD", "Monitor for JD"),
        PageSetup::new("MG", "Monitor for MG"),
        PageSetup::new("MB", "Monitor for MB"),
        PageSetup::new("AS", "Monitor for AS"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_setup() {
        let mixer = Mixer::default();
        assert_eq!(mixer.tracks.len(), 10);
        assert_eq!(mixer.pages.len(), 5);
        assert_eq!(mixer.master().map(|t| t.name.as_str()), Some("Master"));
    }

    #[test]
    fn track_numbers_per_bank() {
        let mixer = Mixer::default();
        let bases: Vec<u32> = mixer.tracks.iter().map(|t| t.track).collect();
        assert_eq!(bases, vec![1, 2, 3, 4, 6, 7, 8, 10, 11, 12]);

        for bank in 1..=5 {
            for slot in &mixer.tracks {
                assert_eq!(slot.track_in_bank(bank), slot.track + (bank - 1) * 12);
            }
        }
        assert_eq!(mixer.tracks[0].track_in_bank(2), 13);
        assert_eq!(mixer.tracks[9].track_in_bank(5), 60);
    }

    #[test]
    fn banks() {
        let mixer = Mixer::default();
        let banks: Vec<(u32, &str)> = mixer.banks().map(|(b, p)| (b, p.name.as_str())).collect();
        assert_eq!(banks, vec![(1, "PA"), (2, "JD"), (3, "MG"), (4, "MB"), (5, "AS")]);

        let (bank, page) = mixer.find_bank("mg").unwrap();
        assert_eq!(bank, 3);
        assert_eq!(page.mix_name, "Monitor for MG");
        assert!(matches!(mixer.find_bank("XX"), Err(Error::UnknownPage(_))));
    }

    #[test]
    fn master_label() {
        assert_eq!(PageSetup::new("JD", "Monitor for JD").master_label(), "JD Master");
    }
}
