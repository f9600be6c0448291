use std::time::Duration;

use gpui::{
    ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, Styled, div, ease_out_quint,
    prelude::*, px,
};
use gpui_transitions::Transition;

use crate::{theme::ThemeExt, utils::RgbaExt};

const RING_OFFSET: f32 = 3.;

/// An accent-colored ring that fades in around the element holding
/// keyboard focus.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    corner_radius: Pixels,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            corner_radius: px(8.),
        }
    }

    pub fn rounded(mut self, corner_radius: impl Into<Pixels>) -> Self {
        self.corner_radius = corner_radius.into();
        self
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let accent_color = cx.get_theme().variants.active(cx).colors.accent.secondary;

        let is_focused = self.focus_handle.is_focused(window) as u8 as f32;

        let ring_progress_state = Transition::new(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(365),
            |_window, _cx| is_focused,
        )
        .with_easing(ease_out_quint());

        if ring_progress_state.set(cx, is_focused) {
            cx.notify(ring_progress_state.entity_id());
        }

        let delta = *ring_progress_state.evaluate(window, cx);

        div()
            .absolute()
            .top(px(-RING_OFFSET))
            .bottom(px(-RING_OFFSET))
            .left(px(-RING_OFFSET))
            .right(px(-RING_OFFSET))
            .rounded(self.corner_radius + px(RING_OFFSET))
            .border_2()
            .border_color(accent_color.alpha(delta * 0.4))
    }
}
