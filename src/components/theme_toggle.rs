use gpui::{ElementId, IntoElement, RenderOnce, SharedString};

use crate::{
    assets::AppIconKind,
    components::{Button, ButtonVariant},
    theme::{ThemeController, ThemeLayoutSizeKind, ThemeVariantKind},
};

/// The light/dark mode switch. Both the glyph and the accessible label
/// always describe the mode a click would switch *to*.
#[derive(IntoElement)]
pub struct ThemeToggle {
    id: ElementId,
}

impl ThemeToggle {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self { id: id.into() }
    }

    /// Glyph for the mode the toggle switches to.
    pub fn next_mode_icon(mode: ThemeVariantKind) -> AppIconKind {
        match mode {
            ThemeVariantKind::Light => AppIconKind::Moon,
            ThemeVariantKind::Dark => AppIconKind::Sun,
        }
    }

    /// Accessible label naming the mode the toggle switches to.
    pub fn next_mode_label(mode: ThemeVariantKind) -> SharedString {
        match mode {
            ThemeVariantKind::Light => "Switch to dark mode".into(),
            ThemeVariantKind::Dark => "Switch to light mode".into(),
        }
    }
}

impl RenderOnce for ThemeToggle {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let mode = ThemeController::mode(cx);
        let icon_size = ThemeLayoutSizeKind::Sm.resolve(cx);

        Button::new(self.id)
            .icon(Self::next_mode_icon(mode).path())
            .icon_size(icon_size)
            .variant(ButtonVariant::Ghost)
            .tooltip(Self::next_mode_label(mode))
            .on_click(|_event, window, cx| {
                ThemeController::toggle(cx);
                window.refresh();
            })
    }
}
