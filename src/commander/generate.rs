use tracing::debug;

use super::layout::{
    ActiveAxes, Colors, Control, Layout, OscArgument, OscBundle, OscMessage, ScalingAxes, Widget,
    ARGUMENT_VERSION, CONTROL_VERSION, LAYOUT_VERSION,
};
use crate::mixer::{Mixer, PageSetup, TrackSlot};

pub const LAYOUT_WIDTH: i32 = 752;
pub const LAYOUT_HEIGHT: i32 = 1280;
pub const LAYOUT_ROTATION: i32 = 1;

/// Fader position of 0 dB in REAPER's volume scale.
const REAPER_ZERO_DB: f64 = 0.716878;
/// Scaling function used on every axis.
const AXIS_FUNCTION: u8 = 3;

const ROW_TOP: i32 = 50;
const ROW_PITCH: i32 = 120;
const ROW_HEIGHT: i32 = 100;

const DEFAULT_COLORS: Colors = Colors {
    fore_color: 16727100,
    back_color: 1973790,
    text_color: -1775042766,
    border_color: 16711422,
    fore_alpha: 0,
    back_alpha: 0,
    text_alpha: 150,
    border_alpha: 0,
};

pub fn create_layouts(mixer: &Mixer) -> Vec<Layout> {
    mixer
        .banks()
        .map(|(bank, page)| create_layout(&mixer.tracks, bank, page))
        .collect()
}

/// One layout per page: every track gets a name pad, a mute toggle and a
/// volume fader on its own row.
pub fn create_layout(tracks: &[TrackSlot], bank: u32, page: &PageSetup) -> Layout {
    debug!("Commander layout {} (bank {bank})", page.name);

    let mut widgets = Vec::with_capacity(tracks.len() * 3);
    for (i, slot) in tracks.iter().enumerate() {
        let track = slot.track_in_bank(bank);
        let y = ROW_TOP + i as i32 * ROW_PITCH;

        widgets.push(Widget::Pad(place(new_pad(&slot.name), 10, y, 120)));
        widgets.push(Widget::ToggleButton(place(
            new_control(
                "Mute",
                format!("/track/{track}/mute"),
                string_argument(),
            ),
            140,
            y,
            100,
        )));
        widgets.push(Widget::Fader(place(
            new_control(
                &format!("Vol {track}"),
                format!("/track/{track}/volume"),
                float_argument(),
            ),
            250,
            y,
            492,
        )));
    }

    Layout {
        version: LAYOUT_VERSION.into(),
        layout_name: format!("One In Ten - {}", page.name),
        layout_summary: format!("{} mixer", page.mix_name),
        width: LAYOUT_WIDTH,
        height: LAYOUT_HEIGHT,
        rotation: LAYOUT_ROTATION,
        widgets,
    }
}

fn place(mut control: Control, x: i32, y: i32, width: i32) -> Control {
    control.x = x;
    control.y = y;
    control.width = width;
    control.height = ROW_HEIGHT;
    control
}

fn base_control(text: &str) -> Control {
    Control {
        version: CONTROL_VERSION.into(),
        text: text.into(),
        osc_bundle: OscBundle::default(),
        colors: DEFAULT_COLORS,
        x: 0,
        y: 0,
        z: 0,
        width: 13,
        height: 25,
        borderwidth: 0,
        smoothing_factor: 0.0,
        rotation: 0.0,
        is_touchable: false,
        display_name: true,
        local_feedback: true,
        is_sliding: false,
        is_relative: false,
        cont_fore_img: false,
        font: "Dialog-plain-36".into(),
        background_image: " ".into(),
        foreground_image: " ".into(),
    }
}

fn new_pad(text: &str) -> Control {
    base_control(text)
}

fn new_control(text: &str, address: String, argument: OscArgument) -> Control {
    let mut control = base_control(text);
    control.osc_bundle.messages.push(OscMessage {
        address,
        arguments: vec![argument],
    });
    control
}

fn float_argument() -> OscArgument {
    OscArgument {
        version: ARGUMENT_VERSION.into(),
        active_axes: ActiveAxes::only(Some(1)),
        scaling_axes: ScalingAxes::uniform(AXIS_FUNCTION),
        value_float: Some(1.0),
        value_string: None,
        ref_float: Some(0.0),
        ref_string: None,
        max_float: Some(REAPER_ZERO_DB),
        max_string: None,
        def_string: Some("1".into()),
        min_float: Some(0.0),
        min_string: None,
        is_listening: true,
        display_on_widget: false,
    }
}

fn string_argument() -> OscArgument {
    OscArgument {
        version: ARGUMENT_VERSION.into(),
        active_axes: ActiveAxes::only(None),
        scaling_axes: ScalingAxes::uniform(AXIS_FUNCTION),
        value_float: None,
        value_string: Some("On".into()),
        ref_float: None,
        ref_string: Some("Off".into()),
        max_float: None,
        max_string: Some("On".into()),
        def_string: Some("1".into()),
        min_float: None,
        min_string: Some("Off".into()),
        is_listening: false,
        display_on_widget: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_layouts_thirty_controls() {
        let layouts = create_layouts(&Mixer::default());
        assert_eq!(layouts.len(), 5);

        for layout in &layouts {
            assert_eq!(layout.version, "1.3");
            assert_eq!((layout.width, layout.height, layout.rotation), (752, 1280, 1));
            assert_eq!(layout.widgets.len(), 30);

            let pads = layout.widgets.iter().filter(|w| matches!(w, Widget::Pad(_)));
            let toggles = layout.widgets.iter().filter(|w| matches!(w, Widget::ToggleButton(_)));
            let faders = layout.widgets.iter().filter(|w| matches!(w, Widget::Fader(_)));
            assert_eq!(pads.count(), 10);
            assert_eq!(toggles.count(), 10);
            assert_eq!(faders.count(), 10);
        }

        assert_eq!(layouts[0].layout_name, "One In Ten - PA");
        assert_eq!(layouts[0].layout_summary, "PA System mixer");
        assert_eq!(layouts[3].layout_name, "One In Ten - MB");
    }

    #[test]
    fn osc_addresses_follow_bank() {
        let mixer = Mixer::default();
        let layouts = create_layouts(&mixer);

        for (b, layout) in layouts.iter().enumerate() {
            let bank = b as u32 + 1;
            for (slot, row) in mixer.tracks.iter().zip(layout.widgets.chunks(3)) {
                let track = slot.track + (bank - 1) * 12;
                assert_eq!(row[0].control().text, slot.name);
                assert_eq!(row[0].control().osc_addresses().count(), 0);
                assert_eq!(
                    row[1].control().osc_addresses().collect::<Vec<_>>(),
                    vec![format!("/track/{track}/mute")]
                );
                assert_eq!(
                    row[2].control().osc_addresses().collect::<Vec<_>>(),
                    vec![format!("/track/{track}/volume")]
                );
            }
        }
    }

    #[test]
    fn row_geometry() {
        let layout = create_layouts(&Mixer::default()).remove(0);
        let fader = layout.widgets[29].control();
        assert_eq!((fader.x, fader.y, fader.width, fader.height), (250, 1130, 492, 100));
        assert_eq!(fader.text, "Vol 12");

        let pad = layout.widgets[0].control();
        assert_eq!((pad.x, pad.y, pad.width, pad.height), (10, 50, 120, 100));
        assert_eq!(pad.font, "Dialog-plain-36");
        assert_eq!(pad.colors.text_color, -1775042766);
        assert!(pad.display_name);
        assert!(pad.local_feedback);
    }

    #[test]
    fn arguments() {
        let float = float_argument();
        assert_eq!(float.max_float, Some(0.716878));
        assert_eq!(float.ref_float, Some(0.0));
        assert_eq!(float.value_string, None);
        assert!(float.is_listening);
        assert!(float.active_axes.axes[0].active);

        let string = string_argument();
        assert_eq!(string.value_float, None);
        assert_eq!(string.value_string.as_deref(), Some("On"));
        assert_eq!(string.min_string.as_deref(), Some("Off"));
        assert!(!string.is_listening);
        assert!(string.active_axes.axes.iter().all(|a| !a.active));
    }
}
