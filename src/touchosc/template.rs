use tracing::debug;

use super::layout::{Layout, TabPage};
use crate::{
    error::{Error, Result},
    mixer::Mixer,
};

const MIX_NAME_CONTROL: &str = "mixname";
const MASTER_LABEL_CONTROL: &str = "master/label";

/// Turns a template layout read from a `.touchosc` archive into one page
/// per mixer page. Names and texts are decoded first; the first tab page
/// serves as the template for all pages.
pub fn translate_template(mut layout: Layout, mixer: &Mixer) -> Result<Layout> {
    layout.decode_names()?;

    let template = layout.tab_pages.first().cloned().ok_or(Error::EmptyTemplate)?;
    debug!(
        "Template page {:?} with {} controls",
        template.name,
        template.controls.len()
    );

    let mut tab_pages = Vec::with_capacity(mixer.pages.len());
    for page in mixer.pages.iter() {
        let mut tab_page = template.clone();
        tab_page.name = page.name.clone();
        set_text(&mut tab_page, MIX_NAME_CONTROL, &page.mix_name)?;
        set_text(&mut tab_page, MASTER_LABEL_CONTROL, &page.master_label())?;
        tab_pages.push(tab_page);
    }

    layout.tab_pages = tab_pages;
    Ok(layout)
}

fn set_text(page: &mut TabPage, control: &str, text: &str) -> Result<()> {
    let control = page
        .control_mut(control)
        .ok_or_else(|| Error::MissingControl(control.into()))?;
    control.text = Some(text.into());
    Ok(())
}
