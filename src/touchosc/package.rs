use std::{
    io::{Read, Seek, Write},
    path::Path,
};

use serde::Serialize;
use tracing::debug;
use zip::{write::SimpleFileOptions, ZipArchive, ZipWriter};

use super::layout::Layout;
use crate::error::{Error, Result};

/// Name of the layout document inside a `.touchosc` archive.
pub const DOCUMENT_NAME: &str = "index.xml";

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Reads the layout document from a `.touchosc` archive. The first entry
/// with an `.xml` extension is taken, whatever its name. Names and texts
/// are returned as stored, i.e. still base64-encoded.
pub fn read_template<R: Read + Seek>(reader: R) -> Result<Layout> {
    let mut archive = ZipArchive::new(reader)?;

    let mut document = None;
    for i in 0..archive.len() {
        let file = archive.by_index_raw(i)?;
        if Path::new(file.name()).extension().is_some_and(|ext| ext == "xml") {
            document = Some(i);
            break;
        }
    }
    let index = document.ok_or(Error::MissingLayoutDocument)?;

    let mut file = archive.by_index(index)?;
    debug!("Reading layout document {:?}", file.name());
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;

    from_xml(&xml)
}

/// Writes the layout as a `.touchosc` archive holding a single
/// `index.xml`. Names and texts are base64-encoded on the way out.
pub fn write_package<W: Write + Seek>(writer: W, layout: &Layout) -> Result<W> {
    let xml = quick_xml::se::to_string(&layout.encoded())?;

    let mut zip = ZipWriter::new(writer);
    zip.start_file(DOCUMENT_NAME, SimpleFileOptions::default())?;
    zip.write_all(XML_HEADER.as_bytes())?;
    zip.write_all(xml.as_bytes())?;
    Ok(zip.finish()?)
}

pub fn from_xml(xml: &str) -> Result<Layout> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Indented, human-readable rendition of the layout as it is held in
/// memory (names not encoded).
pub fn to_pretty_xml(layout: &Layout) -> Result<String> {
    let mut buffer = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut buffer);
    ser.indent(' ', 2);
    layout.serialize(ser)?;
    Ok(buffer)
}
