use tracing::debug;

use super::layout::{Control, Layout, TabPage};
use crate::mixer::{Mixer, PageSetup, TrackSlot};

pub const LAYOUT_VERSION: i32 = 15;
pub const LAYOUT_MODE: i32 = 3;
pub const LAYOUT_WIDTH: i32 = 752;
pub const LAYOUT_HEIGHT: i32 = 1280;

const FADER_MIN: f64 = 0.483;
/// Fader position of 0 dB on the master bus.
const MASTER_FADER_MAX: f64 = 0.716878;
const FADER_MAX: f64 = 0.86;

const ROW_TOP: i32 = 50;
const ROW_PITCH: i32 = 120;
const ROW_HEIGHT: i32 = 100;

pub fn create_layout(mixer: &Mixer) -> Layout {
    let tab_pages = mixer
        .banks()
        .map(|(bank, page)| make_page(&mixer.tracks, bank, page, "Master"))
        .collect();

    Layout {
        version: LAYOUT_VERSION,
        mode: LAYOUT_MODE,
        width: LAYOUT_WIDTH,
        height: LAYOUT_HEIGHT,
        orientation: "vertical".into(),
        tab_pages,
    }
}

/// Builds one page: the vertical mix name label, then a label and a fader
/// per track. The first track is the master and gets its own label text
/// and fader range.
pub fn make_page(tracks: &[TrackSlot], bank: u32, page: &PageSetup, master_label: &str) -> TabPage {
    debug!("Page {} (bank {bank}): {}", page.name, page.mix_name);

    let mut controls = Vec::with_capacity(1 + tracks.len() * 2);
    controls.push(Control {
        name: "mixname".into(),
        kind: "labelv".into(),
        x: 672,
        y: 483,
        w: 40,
        h: 260,
        color: "orange".into(),
        text: Some(page.mix_name.clone()),
        size: Some(30),
        background: Some(false),
        outline: Some(false),
        ..Default::default()
    });

    for (i, slot) in tracks.iter().enumerate() {
        let track = slot.track_in_bank(bank);
        let y = ROW_TOP + i as i32 * ROW_PITCH;
        let (label, scale_from, scale_to) = if i == 0 {
            (master_label, 0.0, MASTER_FADER_MAX)
        } else {
            (slot.name.as_str(), FADER_MIN, FADER_MAX)
        };

        controls.push(Control {
            name: format!("{track}/label"),
            kind: "labelv".into(),
            x: 20,
            y,
            w: 40,
            h: ROW_HEIGHT,
            color: slot.color.clone(),
            text: Some(label.into()),
            size: Some(20),
            background: Some(false),
            outline: Some(true),
            ..Default::default()
        });

        controls.push(Control {
            name: format!("{track}/volume"),
            kind: "faderh".into(),
            x: 66,
            y,
            w: 600,
            h: ROW_HEIGHT,
            color: slot.color.clone(),
            scale_from: Some(scale_from),
            scale_to: Some(scale_to),
            response: Some("absolute".into()),
            inverted: Some(false),
            centered: Some(false),
            ..Default::default()
        });
    }

    TabPage {
        name: page.name.clone(),
        scale_from: 0.0,
        scale_to: 1.0,
        controls,
    }
}
