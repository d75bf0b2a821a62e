pub mod generate;
pub mod layout;
pub mod package;
pub mod template;

pub use generate::create_layout;
pub use layout::{Control, Layout, TabPage};
pub use package::{read_template, to_pretty_xml, write_package};
pub use template::translate_template;

/// Default file name of the generated TouchOSC layout.
pub const DEFAULT_OUTPUT: &str = "oneinten.touchosc";
