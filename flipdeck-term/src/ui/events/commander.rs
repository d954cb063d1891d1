#[cfg(test)]
use mockall::automock;

use directories::UserDirs;
use log::*;
use std::{
    env,
    error::Error,
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::ui::share::CardImage;

/// Promotional line appended to every shared card.
pub const SHARE_TAGLINE: &str = "Shared from FlipDeck";

pub struct Commander {}

// generates mocked implementation of Commander when in test
#[cfg_attr(test, automock, allow(warnings))]
impl Commander {
    pub fn new() -> Self {
        Self {}
    }

    /// Hands a captured card to the host share surfaces: a file in the
    /// user's pictures directory and the system clipboard. A clipboard
    /// failure is non-fatal; a write failure is reported to the caller.
    pub fn share(&self, image: CardImage) -> Result<PathBuf, Box<dyn Error>> {
        let dir = UserDirs::new()
            .and_then(|dirs| dirs.picture_dir().map(|p| p.to_path_buf()))
            .unwrap_or_else(env::temp_dir);

        fs::create_dir_all(&dir)?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(Box::new)?
            .as_millis();

        let path = dir.join(format!("flipdeck-{stamp}.txt"));
        let payload = format!("{}\n\n{}\n", image.to_text(), SHARE_TAGLINE);

        fs::write(&path, &payload)?;

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(payload)) {
            Ok(_) => debug!("card copied to clipboard"),
            Err(e) => warn!("clipboard unavailable: {e}"),
        }

        Ok(path)
    }
}
