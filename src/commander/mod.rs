pub mod generate;
pub mod layout;

use serde::Serialize;

pub use generate::{create_layout, create_layouts};
pub use layout::{Layout, Widget};

use crate::error::Result;

/// Default file name when a single page is written.
pub const DEFAULT_OUTPUT: &str = "OneInTen.oc.xml";

/// File name used for a page when all pages are written.
pub fn page_file_name(page_name: &str) -> String {
    format!("OneInTen-{page_name}.oc.xml")
}

/// The document as OSC Commander reads it: indented, without an XML
/// declaration.
pub fn to_xml(layout: &Layout) -> Result<String> {
    let mut buffer = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut buffer);
    ser.indent(' ', 3);
    layout.serialize(ser)?;
    Ok(buffer)
}
