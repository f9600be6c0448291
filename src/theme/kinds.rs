#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
///
/// Use `resolve()` to get the actual `AbsoluteLength` from the current theme.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> f32)]
pub enum ThemeTextSizeKind {
    /// Large heading text, used for the display name.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.heading_lg)]
    Heading,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.body)]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.caption)]
    Caption,
}

/// Component size variants that resolve to theme-defined pixel values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutSizeKind {
    /// Extra large component size.
    #[assoc(resolve = cx.get_theme().layout.size.xl)]
    Xl,
    /// Large component size.
    #[assoc(resolve = cx.get_theme().layout.size.lg)]
    Lg,
    /// Medium component size.
    #[assoc(resolve = cx.get_theme().layout.size.md)]
    Md,
    /// Small component size.
    #[assoc(resolve = cx.get_theme().layout.size.sm)]
    Sm,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    /// Extra large padding.
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    /// Large padding.
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    /// Medium padding.
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    /// Small padding.
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    /// Extra large corner radius, used for the card surface.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    /// Large corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    /// Medium corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    /// Small corner radius.
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Background color variants from the active theme variant.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Base background for the window.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    Primary,
    /// The card surface.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    Secondary,
    /// Grouped content sitting on the card.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    Tertiary,
    /// High emphasis backgrounds and borders.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    Quaternary,
    /// Highest emphasis backgrounds and borders.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// Similar to `ThemeBackgroundKind` but supports `next()` to get the
/// elevated layer color for nested elements and borders.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    /// Base layer for the window.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    /// Second layer for the card surface.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Tertiary)]
    Secondary,
    /// Third layer for elements sitting on the card.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
    /// Fourth layer for high emphasis.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    #[assoc(next = ThemeBackgroundKind::Quinary)]
    Quaternary,
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{ActiveVariantId, Theme, ThemeExt};
    use gpui::TestAppContext;

    fn setup(cx: &mut App) {
        cx.set_theme(Theme::DEFAULT);
        cx.set_global(ActiveVariantId(0));
    }

    #[gpui::test]
    fn test_text_size_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            setup(cx);

            let _ = ThemeTextSizeKind::Heading.resolve(cx);
            let _ = ThemeTextSizeKind::Body.resolve(cx);
            let _ = ThemeTextSizeKind::Caption.resolve(cx);

            assert!(
                ThemeTextSizeKind::Heading.weight(cx) >= ThemeTextSizeKind::Body.weight(cx),
                "Headings should not be lighter than body text"
            );
        });
    }

    #[gpui::test]
    fn test_layout_size_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            setup(cx);

            let sm = ThemeLayoutSizeKind::Sm.resolve(cx);
            let md = ThemeLayoutSizeKind::Md.resolve(cx);
            let lg = ThemeLayoutSizeKind::Lg.resolve(cx);
            let xl = ThemeLayoutSizeKind::Xl.resolve(cx);

            assert!(sm <= md, "Sm should be <= Md");
            assert!(md <= lg, "Md should be <= Lg");
            assert!(lg <= xl, "Lg should be <= Xl");
        });
    }

    #[gpui::test]
    fn test_layout_padding_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            setup(cx);

            let _ = ThemeLayoutPaddingKind::Xl.resolve(cx);
            let _ = ThemeLayoutPaddingKind::Lg.resolve(cx);
            let _ = ThemeLayoutPaddingKind::Md.resolve(cx);
            let _ = ThemeLayoutPaddingKind::Sm.resolve(cx);
        });
    }

    #[gpui::test]
    fn test_layout_corner_radii_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            setup(cx);

            let _ = ThemeLayoutCornerRadiiKind::Xl.resolve(cx);
            let _ = ThemeLayoutCornerRadiiKind::Lg.resolve(cx);
            let _ = ThemeLayoutCornerRadiiKind::Md.resolve(cx);
            let _ = ThemeLayoutCornerRadiiKind::Sm.resolve(cx);
        });
    }

    #[gpui::test]
    fn test_background_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            setup(cx);

            let _ = ThemeBackgroundKind::Primary.resolve(cx);
            let _ = ThemeBackgroundKind::Secondary.resolve(cx);
            let _ = ThemeBackgroundKind::Tertiary.resolve(cx);
            let _ = ThemeBackgroundKind::Quaternary.resolve(cx);
            let _ = ThemeBackgroundKind::Quinary.resolve(cx);
        });
    }

    #[gpui::test]
    fn test_layer_kind_next(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert!(matches!(
                ThemeLayerKind::Primary.next(),
                ThemeBackgroundKind::Secondary
            ));
            assert!(matches!(
                ThemeLayerKind::Secondary.next(),
                ThemeBackgroundKind::Tertiary
            ));
            assert!(matches!(
                ThemeLayerKind::Tertiary.next(),
                ThemeBackgroundKind::Quaternary
            ));
            assert!(matches!(
                ThemeLayerKind::Quaternary.next(),
                ThemeBackgroundKind::Quinary
            ));
        });
    }
}
