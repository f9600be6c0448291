use gpui::{
    FontWeight, IntoElement, ObjectFit, ParentElement, Pixels, RenderOnce, SharedString, StyledImage,
    Styled, div, img, prelude::FluentBuilder, px, rgba,
};

use crate::theme::ThemeExt;

/// Circular profile picture. Renders the avatar image when one is set
/// and falls back to the profile's initial on a gradient disc.
#[derive(IntoElement)]
pub struct Avatar {
    source: Option<SharedString>,
    fallback: SharedString,
    size: Pixels,
}

impl Avatar {
    pub fn new(fallback: impl Into<SharedString>) -> Self {
        Self {
            source: None,
            fallback: fallback.into(),
            size: px(96.),
        }
    }

    /// Asset path of the avatar image, if the profile ships one.
    pub fn source(mut self, source: Option<SharedString>) -> Self {
        self.source = source;
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let accent_primary = cx.get_theme().variants.active(cx).colors.accent.primary;
        let accent_secondary = cx.get_theme().variants.active(cx).colors.accent.secondary;
        let initial_size = cx.get_theme().layout.text.default_font.sizes.heading_lg;
        let initial_weight = cx.get_theme().layout.text.default_font.weights.heading_lg;

        div()
            .w(self.size)
            .min_w(self.size)
            .h(self.size)
            .min_h(self.size)
            .rounded(self.size / 2.)
            .overflow_hidden()
            .border_2()
            .border_color(accent_primary)
            .flex()
            .items_center()
            .justify_center()
            .bg(gpui::linear_gradient(
                135.,
                gpui::linear_color_stop(accent_primary, 0.),
                gpui::linear_color_stop(accent_secondary, 1.),
            ))
            .map(|this| match self.source {
                Some(source) => this.child(
                    img(source)
                        .size_full()
                        .object_fit(ObjectFit::Cover)
                        .rounded(self.size / 2.),
                ),
                None => this.child(
                    div()
                        .text_size(initial_size)
                        .font_weight(FontWeight(initial_weight))
                        .text_color(rgba(0xffffffe6))
                        .child(self.fallback),
                ),
            })
    }
}
