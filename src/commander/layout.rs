use serde::Serialize;

pub const LAYOUT_VERSION: &str = "1.3";
pub const CONTROL_VERSION: &str = "1.8";
pub const ARGUMENT_VERSION: &str = "1.2";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename = "main", rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "@version")]
    pub version: String,

    pub layout_name: String,
    pub layout_summary: String,
    pub width: i32,
    pub height: i32,
    pub rotation: i32,

    #[serde(rename = "$value")]
    pub widgets: Vec<Widget>,
}

/// A control together with its kind; the kind is the element name.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum Widget {
    #[serde(rename = "fader")]
    Fader(Control),
    #[serde(rename = "toggleButton")]
    ToggleButton(Control),
    #[serde(rename = "pad")]
    Pad(Control),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@text")]
    pub text: String,

    #[serde(rename = "OSCBundle")]
    pub osc_bundle: OscBundle,

    pub colors: Colors,

    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
    #[serde(rename = "Z")]
    pub z: i32,
    pub width: i32,
    pub height: i32,
    pub borderwidth: i32,
    pub smoothing_factor: f64,
    pub rotation: f64,
    pub is_touchable: bool,
    pub display_name: bool,
    pub local_feedback: bool,
    pub is_sliding: bool,
    pub is_relative: bool,
    pub cont_fore_img: bool,
    pub font: String,
    pub background_image: String,
    pub foreground_image: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct OscBundle {
    #[serde(rename = "OSCMessage")]
    pub messages: Vec<OscMessage>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OscMessage {
    #[serde(rename = "OSCAddress")]
    pub address: String,
    #[serde(rename = "OSCArgument")]
    pub arguments: Vec<OscArgument>,
}

/// Each of value/ref/max/min is given either as a float or as a string.
/// Whichever representation is unset is left out of the document; a
/// float that is set is written even when it is zero.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OscArgument {
    #[serde(rename = "@version")]
    pub version: String,

    pub active_axes: ActiveAxes,
    pub scaling_axes: ScalingAxes,

    #[serde(rename = "valueOFloat", skip_serializing_if = "Option::is_none")]
    pub value_float: Option<f64>,
    #[serde(rename = "valueOfString", skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    #[serde(rename = "refOFloat", skip_serializing_if = "Option::is_none")]
    pub ref_float: Option<f64>,
    #[serde(rename = "refOfString", skip_serializing_if = "Option::is_none")]
    pub ref_string: Option<String>,

    #[serde(rename = "maxOFloat", skip_serializing_if = "Option::is_none")]
    pub max_float: Option<f64>,
    #[serde(rename = "maxOfString", skip_serializing_if = "Option::is_none")]
    pub max_string: Option<String>,

    #[serde(rename = "defOfString", skip_serializing_if = "Option::is_none")]
    pub def_string: Option<String>,

    #[serde(rename = "minOFloat", skip_serializing_if = "Option::is_none")]
    pub min_float: Option<f64>,
    #[serde(rename = "minOfString", skip_serializing_if = "Option::is_none")]
    pub min_string: Option<String>,

    pub is_listening: bool,
    pub display_on_widget: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActiveAxes {
    #[serde(rename = "axis")]
    pub axes: Vec<AxisActive>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisActive {
    pub number: u8,
    pub active: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScalingAxes {
    #[serde(rename = "axis")]
    pub axes: Vec<AxisScale>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub number: u8,
    pub function: u8,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub fore_color: i32,
    pub back_color: i32,
    pub text_color: i32,
    pub border_color: i32,
    pub fore_alpha: i32,
    pub back_alpha: i32,
    pub text_alpha: i32,
    pub border_alpha: i32,
}

impl Widget {
    pub fn control(&self) -> &Control {
        match self {
            Widget::Fader(control) | Widget::ToggleButton(control) | Widget::Pad(control) => {
                control
            }
        }
    }
}

impl Control {
    pub fn osc_addresses(&self) -> impl Iterator<Item = &str> {
        self.osc_bundle
            .messages
            .iter()
            .map(|message| message.address.as_str())
    }
}

impl ActiveAxes {
    /// Axes 1 to 3, with only the given axis active.
    pub fn only(axis: Option<u8>) -> Self {
        Self {
            axes: (1..=3)
                .map(|number| AxisActive {
                    number,
                    active: Some(number) == axis,
                })
                .collect(),
        }
    }
}

impl ScalingAxes {
    /// Axes 1 to 3, all with the same scaling function.
    pub fn uniform(function: u8) -> Self {
        Self {
            axes: (1..=3).map(|number| AxisScale { number, function }).collect(),
        }
    }
}
