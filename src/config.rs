use std::{fs, path::Path};

use tracing::debug;

use crate::{error::Result, mixer::Mixer};

/// Loads the mixer setup from a JSON file, or returns the built-in
/// setup when no file is given.
pub fn load_mixer(path: Option<&Path>) -> Result<Mixer> {
    match path {
        Some(path) => {
            debug!("Loading mixer config from {path:?}");
            parse_mixer(&fs::read_to_string(path)?)
        }
        None => Ok(Mixer::default()),
    }
}

pub fn parse_mixer(source: &str) -> Result<Mixer> {
    let mixer: Mixer = serde_json::from_str(source)?;
    debug!(
        "| {} tracks, {} pages",
        mixer.tracks.len(),
        mixer.pages.len()
    );
    Ok(mixer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mixer::{PageSetup, TrackSlot};

    #[test]
    fn builtin_without_file() {
        assert_eq!(load_mixer(None).unwrap(), Mixer::default());
    }

    #[test]
    fn parse_full() {
        let mixer = parse_mixer(
            r#"{
                "tracks": [
                    { "name": "Main", "color": "red", "track": 1 },
                    { "name": "Keys", "color": "blue", "track": 5 }
                ],
                "pages": [ { "name": "FOH", "mixName": "Front of House" } ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            mixer.tracks,
            vec![TrackSlot::new("Main", "red", 1), TrackSlot::new("Keys", "blue", 5)]
        );
        assert_eq!(mixer.pages, vec![PageSetup::new("FOH", "Front of House")]);
    }

    #[test]
    fn parse_partial_falls_back() {
        let mixer = parse_mixer(r#"{ "pages": [ { "name": "X", "mixName": "Y" } ] }"#).unwrap();
        assert_eq!(mixer.tracks, Mixer::default().tracks);
        assert_eq!(mixer.pages.len(), 1);
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(parse_mixer("{ tracks: 1 }"), Err(Error::Config(_))));
    }
}
