use gpui::{App, Window};

use crate::{
    profile::{Profile, ProfileExt},
    theme::{Theme, ThemeController, ThemeExt},
};

pub fn init(cx: &mut App) {
    cx.set_theme(Theme::DEFAULT);
    cx.set_profile(Profile::DEFAULT);
    ThemeController::init(cx);
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
