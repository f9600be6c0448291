use gpui::App;

use crate::theme::Theme;

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_theme_layout_is_positive(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();

            assert!(
                theme.layout.text.base_size > gpui::px(0.),
                "Base text size should be positive"
            );
            assert!(
                theme.layout.padding.sm >= gpui::px(0.),
                "Padding sm should be non-negative"
            );
            assert!(
                theme.layout.corner_radii.sm >= gpui::px(0.),
                "Corner radii sm should be non-negative"
            );
        });
    }
}
