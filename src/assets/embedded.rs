use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;

/// SVG assets bundled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct CardAssets;

impl AssetSource for CardAssets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        match <Self as RustEmbed>::get(path) {
            Some(file) => Ok(Some(file.data)),
            None => Err(anyhow!("could not find asset at path \"{path}\"")),
        }
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}
