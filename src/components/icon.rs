use gpui::{
    Hsla, IntoElement, Length, RenderOnce, SharedString, Styled, prelude::FluentBuilder, px, svg,
};

use crate::theme::ThemeExt;

/// An SVG icon tinted with the theme's primary text color unless a
/// custom color is set.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Option<Length>,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: None,
            color: None,
        }
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets a custom color, overriding the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let size = self.size.unwrap_or(px(14.).into());

        svg()
            .path(self.path)
            .text_color(primary_text_color)
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .when_some(self.color, |this, color| this.text_color(color))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{TestAppContext, hsla};

    #[gpui::test]
    fn test_icon_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/sun.svg");
            assert_eq!(icon.path, SharedString::from("icons/sun.svg"));
            assert!(icon.color.is_none(), "Icon should start with no color");
            assert!(icon.size.is_none(), "Icon should start with no size");
        });
    }

    #[gpui::test]
    fn test_icon_size(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/sun.svg").size(px(24.));
            assert!(icon.size.is_some(), "Icon should have a size");
        });
    }

    #[gpui::test]
    fn test_icon_color(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/sun.svg").color(hsla(0.5, 0.5, 0.5, 1.0));
            assert!(icon.color.is_some(), "Icon should have a color");
        });
    }
}
