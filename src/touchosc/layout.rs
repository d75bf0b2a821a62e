use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::{codec, error::Result};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(rename = "layout")]
pub struct Layout {
    #[serde(rename = "@version")]
    pub version: i32,
    #[serde(rename = "@mode")]
    pub mode: i32,
    #[serde(rename = "@w")]
    pub width: i32,
    #[serde(rename = "@h")]
    pub height: i32,
    #[serde(rename = "@orientation")]
    pub orientation: String,
    #[serde(rename = "tabpage", default)]
    pub tab_pages: Vec<TabPage>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct TabPage {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@scalef")]
    pub scale_from: f64,
    #[serde(rename = "@scalet")]
    pub scale_to: f64,
    #[serde(rename = "control", default)]
    pub controls: Vec<Control>,
}

/// A widget on a tab page. The optional attributes only apply to some
/// widget types and are left out of the document when unset.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Control {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type")]
    pub kind: String,

    #[serde(rename = "@x")]
    pub x: i32,
    #[serde(rename = "@y")]
    pub y: i32,
    #[serde(rename = "@w")]
    pub w: i32,
    #[serde(rename = "@h")]
    pub h: i32,
    #[serde(rename = "@color")]
    pub color: String,

    #[serde(rename = "@scalef", default, skip_serializing_if = "Option::is_none")]
    pub scale_from: Option<f64>,
    #[serde(rename = "@scalet", default, skip_serializing_if = "Option::is_none")]
    pub scale_to: Option<f64>,

    // faderh
    #[serde(rename = "@response", default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(rename = "@inverted", default, skip_serializing_if = "Option::is_none")]
    pub inverted: Option<bool>,
    #[serde(rename = "@centered", default, skip_serializing_if = "Option::is_none")]
    pub centered: Option<bool>,

    // labelv
    #[serde(rename = "@text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "@size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(rename = "@background", default, skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
    #[serde(rename = "@outline", default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<bool>,

    // rotaryh
    #[serde(rename = "@norollover", default, skip_serializing_if = "Option::is_none")]
    pub no_rollover: Option<bool>,
}

impl Layout {
    /// Copy of the layout with page names, control names and label texts
    /// base64-encoded, the way TouchOSC persists them.
    pub fn encoded(&self) -> Self {
        let mut layout = self.clone();
        layout
            .map_strings(|s| Ok::<_, Infallible>(codec::encode(s)))
            .unwrap_or_else(|never| match never {});
        layout
    }

    pub fn decode_names(&mut self) -> Result<()> {
        self.map_strings(codec::decode)
    }

    pub fn control_count(&self) -> usize {
        self.tab_pages.iter().map(|page| page.controls.len()).sum()
    }

    fn map_strings<E>(
        &mut self,
        f: impl Fn(&str) -> std::result::Result<String, E>,
    ) -> std::result::Result<(), E> {
        for page in self.tab_pages.iter_mut() {
            page.name = f(&page.name)?;
            for control in page.controls.iter_mut() {
                control.name = f(&control.name)?;
                if let Some(text) = control.text.as_mut() {
                    *text = f(text)?;
                }
            }
        }
        Ok(())
    }
}

impl TabPage {
    pub fn control_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|control| control.name == name)
    }
}
