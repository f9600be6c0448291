use enum_assoc::Assoc;
use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Icon identifiers that map to bundled SVG assets.
///
/// Link records in the profile document name their icon by variant, so
/// this doubles as the serde vocabulary for `profile.json`.
#[derive(Assoc, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum AppIconKind {
    /// Sun glyph, shown by the toggle while dark mode is active.
    #[assoc(path = "icons/sun.svg".into())]
    Sun,

    /// Moon glyph, shown by the toggle while light mode is active.
    #[assoc(path = "icons/moon.svg".into())]
    Moon,

    /// GitHub mark for profile links.
    #[assoc(path = "icons/github.svg".into())]
    GitHub,

    /// Twitter/X mark for profile links.
    #[assoc(path = "icons/twitter.svg".into())]
    Twitter,
}

impl Into<SharedString> for AppIconKind {
    fn into(self) -> SharedString {
        self.path()
    }
}
