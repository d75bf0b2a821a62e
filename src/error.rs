use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Malformed layout XML: {0}")]
    XmlRead(#[from] quick_xml::DeError),

    #[error("Failed to write layout XML: {0}")]
    XmlWrite(#[from] quick_xml::SeError),

    #[error("Invalid base64 string: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded string is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid mixer config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Template has no tab pages")]
    EmptyTemplate,

    #[error("Template archive contains no .xml document")]
    MissingLayoutDocument,

    #[error("Template page has no control named {0:?}")]
    MissingControl(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
