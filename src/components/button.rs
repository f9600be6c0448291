use gpui::{
    App, AppContext, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, Length,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_transitions::Lerp;

use crate::{
    components::{Icon, TooltipLabel},
    primitives::FocusRing,
    theme::ThemeExt,
    utils::{ElementIdExt, RgbaExt, disabled_opacity_transition, interaction_color_transition},
};

/// A clickable control with an optional icon, optional text, and an
/// optional tooltip carrying its accessible label.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    icon: Option<SharedString>,
    icon_size: Length,
    variant: ButtonVariant,
    tooltip: Option<SharedString>,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            icon: None,
            icon_size: px(16.).into(),
            variant: ButtonVariant::Primary,
            tooltip: None,
            disabled: false,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, icon_size: impl Into<Length>) -> Self {
        self.icon_size = icon_size.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the accessible label, shown as a tooltip while hovered.
    pub fn tooltip(mut self, label: impl Into<SharedString>) -> Self {
        self.tooltip = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    fn handle_on_click(
        window: &mut Window,
        cx: &mut App,
        event: &ClickEvent,
        on_click: Option<&Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    ) {
        if let Some(on_click) = on_click {
            (on_click)(event, window, cx)
        }
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.variant.resolve(cx);
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let text_size = cx.get_theme().layout.text.default_font.sizes.body;
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let gap = cx.get_theme().layout.padding.sm;
        let vertical_padding = cx.get_theme().layout.padding.md;
        let horizontal_padding = if self.text.is_some() {
            cx.get_theme().layout.padding.lg
        } else {
            cx.get_theme().layout.padding.md
        };

        let is_disabled = self.disabled;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        if is_focus && is_disabled {
            window.blur();
        }

        let bg_transition = interaction_color_transition(
            self.id.with_suffix("state:transition:bg_color"),
            window,
            cx,
            is_hover,
            is_focus || is_click_down,
            colors.bg,
            colors.bg_hover,
            colors.bg_pressed,
        );

        let disabled_transition = disabled_opacity_transition(
            self.id.with_suffix("state:transition:disabled"),
            window,
            cx,
            is_disabled,
        );

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .flex()
            .items_center()
            .justify_center()
            .gap(gap)
            .pt(vertical_padding)
            .pb(vertical_padding)
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .rounded(corner_radius)
            .border_1()
            .border_color(colors.border)
            .bg(*bg_transition.evaluate(window, cx))
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .when_some(self.icon.clone(), |this, icon| {
                this.child(Icon::new(icon).size(self.icon_size).color(colors.text))
            })
            .when_some(self.text.clone(), |this, text| {
                this.child(
                    div()
                        .font_family(font_family)
                        .text_size(text_size)
                        .text_color(colors.text)
                        .child(text),
                )
            })
            .when_some(self.tooltip.clone(), |this, label| {
                this.tooltip(move |_window, cx| {
                    cx.new(|_cx| TooltipLabel::new(label.clone())).into()
                })
            })
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                    // Prevents focus ring from appearing when clicked.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(is_click_down_state_on_mouse_down.entity_id());
                })
                .on_click({
                    move |event, window, cx| {
                        window.prevent_default();

                        if !is_focus {
                            // We only want to blur if something else may be focused.
                            window.blur();
                        }

                        is_click_down_state_on_click.update(cx, |this, _cx| *this = false);
                        cx.notify(is_click_down_state_on_click.entity_id());

                        Self::handle_on_click(window, cx, event, self.on_click.as_ref());
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    // Clean up held states when the mouse presses down, leaves the bounds, then releases.

                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());

                    is_click_down_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}

/// Color palette of a button, resolved from the active theme variant.
pub struct ButtonColors {
    pub bg: Rgba,
    pub bg_hover: Rgba,
    pub bg_pressed: Rgba,
    pub text: Rgba,
    pub border: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary accent.
    Primary,
    /// Translucent surface with a visible border.
    Secondary,
    /// Invisible at rest; surfaces on hover.
    Ghost,
}

impl ButtonVariant {
    const HOVER_STRENGTH: f32 = 0.08;
    const PRESS_STRENGTH: f32 = 0.16;

    pub fn resolve(&self, cx: &App) -> ButtonColors {
        let colors = &cx.get_theme().variants.active(cx).colors;
        let text_color = colors.text.primary;

        match self {
            ButtonVariant::Primary => ButtonColors {
                bg: colors.accent.primary,
                bg_hover: colors.accent.primary.lerp(&text_color, Self::HOVER_STRENGTH),
                bg_pressed: colors.accent.primary.lerp(&text_color, Self::PRESS_STRENGTH),
                text: text_color,
                border: colors.accent.primary,
            },

            ButtonVariant::Secondary => {
                let main_color = colors.text.secondary;

                ButtonColors {
                    bg: main_color.alpha(0.08),
                    bg_hover: main_color.alpha(0.14),
                    bg_pressed: main_color.alpha(0.2),
                    text: text_color,
                    border: main_color.alpha(0.25),
                }
            }

            ButtonVariant::Ghost => ButtonColors {
                bg: text_color.alpha(0.),
                bg_hover: text_color.alpha(0.08),
                bg_pressed: text_color.alpha(0.14),
                text: text_color,
                border: text_color.alpha(0.),
            },
        }
    }
}
