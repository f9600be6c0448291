use gpui::{FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div, px};

use crate::theme::{ThemeExt, ThemeLayerKind};

/// A pill-shaped label for one skill entry.
#[derive(IntoElement)]
pub struct SkillTag {
    label: SharedString,
    layer: ThemeLayerKind,
}

impl SkillTag {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            layer: ThemeLayerKind::Tertiary,
        }
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }
}

impl RenderOnce for SkillTag {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let text_size = cx.get_theme().layout.text.default_font.sizes.caption;
        let text_weight = cx.get_theme().layout.text.default_font.weights.caption;
        let horizontal_padding = cx.get_theme().layout.padding.md;
        let vertical_padding = cx.get_theme().layout.padding.sm;

        div()
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .pt(vertical_padding)
            .pb(vertical_padding)
            .rounded(px(100.))
            .border_1()
            .border_color(border_color)
            .bg(background_color)
            .text_size(text_size)
            .text_color(text_color)
            .font_weight(FontWeight(text_weight))
            .child(self.label)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_skill_tag_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let tag = SkillTag::new("Rust");
            assert_eq!(tag.label, SharedString::from("Rust"));
            assert!(matches!(tag.layer, ThemeLayerKind::Tertiary));
        });
    }

    #[gpui::test]
    fn test_skill_tag_layer(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let tag = SkillTag::new("Rust").layer(ThemeLayerKind::Secondary);
            assert!(matches!(tag.layer, ThemeLayerKind::Secondary));
        });
    }
}
