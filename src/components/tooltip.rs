use gpui::{Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div};

use crate::theme::{
    ThemeExt, ThemeLayerKind, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
    ThemeTextSizeKind,
};

/// A small caption panel shown next to hovered controls. Carries the
/// accessible label of the control it annotates.
pub struct TooltipLabel {
    label: SharedString,
}

impl TooltipLabel {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &SharedString {
        &self.label
    }
}

impl Render for TooltipLabel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layer = ThemeLayerKind::Tertiary;
        let background_color = layer.resolve(cx);
        let border_color = layer.next().resolve(cx);
        let text_color = cx.get_theme().variants.active(cx).colors.text.secondary;
        let text_size = ThemeTextSizeKind::Caption.resolve(cx);
        let corner_radius = ThemeLayoutCornerRadiiKind::Sm.resolve(cx);
        let horizontal_padding = ThemeLayoutPaddingKind::Md.resolve(cx);
        let vertical_padding = ThemeLayoutPaddingKind::Sm.resolve(cx);

        div()
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .pt(vertical_padding)
            .pb(vertical_padding)
            .rounded(corner_radius)
            .border_1()
            .border_color(border_color)
            .bg(background_color)
            .text_size(text_size)
            .text_color(text_color)
            .child(self.label.clone())
    }
}
