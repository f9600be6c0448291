use gpui::{App, Global, Window, WindowAppearance};

use crate::theme::{ActiveVariantId, ThemeExt, ThemeVariantKind};

/// Owns the light/dark mode selection and the readiness gate guarding it.
///
/// The controller starts in light mode, unmounted. The view schedules
/// [`ThemeController::initialize`] for the frame after its first paint;
/// until that runs, [`ActiveVariantId`] keeps the seeded light value, so
/// the first paint can never disagree with the variant styling resolves
/// through. Afterwards the mode changes only through
/// [`ThemeController::toggle`].
pub struct ThemeController {
    mode: ThemeVariantKind,
    mounted: bool,
}

impl Global for ThemeController {}

impl ThemeController {
    /// Installs the controller and seeds the presentation flag to the
    /// theme's light variant. Expects the theme global to be set.
    pub fn init(cx: &mut App) {
        cx.set_global(ThemeController {
            mode: ThemeVariantKind::Light,
            mounted: false,
        });

        let seed = cx
            .get_theme()
            .variants
            .index_of_kind(ThemeVariantKind::Light)
            .unwrap_or(0);
        cx.set_global(ActiveVariantId(seed));
    }

    /// First-paint hook: adopts the window's reported appearance. No-op
    /// once mounted, so repeated scheduling cannot re-read the host
    /// preference.
    pub fn initialize(window: &Window, cx: &mut App) {
        let prefers_dark = matches!(
            window.appearance(),
            WindowAppearance::Dark | WindowAppearance::VibrantDark
        );

        Self::bootstrap(Some(prefers_dark), cx);
    }

    /// Marks the controller mounted and sets the mode from the host
    /// preference. `None` (preference unknown) keeps the light default.
    pub fn bootstrap(preference: Option<bool>, cx: &mut App) {
        let controller = cx.global_mut::<ThemeController>();
        if controller.mounted {
            return;
        }

        controller.mounted = true;
        controller.mode = match preference {
            Some(true) => ThemeVariantKind::Dark,
            Some(false) | None => ThemeVariantKind::Light,
        };

        Self::apply(cx);
    }

    /// Flips between light and dark mode.
    pub fn toggle(cx: &mut App) {
        let controller = cx.global_mut::<ThemeController>();
        controller.mode = controller.mode.toggled();

        Self::apply(cx);
    }

    /// Writes the presentation flag for the current mode. No-op while
    /// unmounted; reapplying with an unchanged mode is observationally
    /// idempotent.
    pub fn apply(cx: &mut App) {
        let controller = cx.global::<ThemeController>();
        if !controller.mounted {
            return;
        }

        let mode = controller.mode;
        if let Some(index) = cx.get_theme().variants.index_of_kind(mode) {
            cx.set_global(ActiveVariantId(index));
        }
    }

    pub fn mode(cx: &App) -> ThemeVariantKind {
        cx.global::<ThemeController>().mode
    }

    pub fn is_mounted(cx: &App) -> bool {
        cx.global::<ThemeController>().mounted
    }
}
