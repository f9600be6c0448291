use gpui::{ElementId, IntoElement, RenderOnce};

use crate::{
    components::{Button, ButtonVariant},
    profile::ProfileLink,
    theme::ThemeLayoutSizeKind,
};

/// A social link rendered as an icon-and-label button. Clicking opens
/// the target URL in the host browser; the URL doubles as the tooltip.
#[derive(IntoElement)]
pub struct LinkButton {
    id: ElementId,
    link: ProfileLink,
}

impl LinkButton {
    pub fn new(id: impl Into<ElementId>, link: ProfileLink) -> Self {
        Self {
            id: id.into(),
            link,
        }
    }
}

impl RenderOnce for LinkButton {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let icon_size = ThemeLayoutSizeKind::Sm.resolve(cx);
        let url = self.link.url.clone();

        Button::new(self.id)
            .icon(self.link.icon.path())
            .icon_size(icon_size)
            .text(self.link.label)
            .variant(ButtonVariant::Secondary)
            .tooltip(self.link.url)
            .on_click(move |_event, _window, cx| cx.open_url(&url))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::assets::AppIconKind;
    use gpui::{SharedString, TestAppContext};

    fn link() -> ProfileLink {
        ProfileLink {
            label: "GitHub".into(),
            url: "https://github.com/example".into(),
            icon: AppIconKind::GitHub,
        }
    }

    #[gpui::test]
    fn test_link_button_carries_its_record(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = LinkButton::new("link:github", link());
            assert_eq!(button.link.label, SharedString::from("GitHub"));
            assert_eq!(button.link.icon, AppIconKind::GitHub);
        });
    }
}
