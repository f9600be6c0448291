use std::time::Duration;

use gpui::{App, ElementId, Rgba, Window, ease_out_quint};
use gpui_transitions::Transition;

/// Eases an element color between its resting, hover, and pressed values.
pub fn interaction_color_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_hover: bool,
    is_pressed: bool,
    rest_color: Rgba,
    hover_color: Rgba,
    pressed_color: Rgba,
) -> Transition<Rgba> {
    let state = Transition::new(
        id,
        window,
        cx,
        Duration::from_millis(250),
        |_window, _cx| rest_color,
    )
    .with_easing(ease_out_quint());

    let goal = if is_pressed {
        pressed_color
    } else if is_hover {
        hover_color
    } else {
        rest_color
    };

    if state.set(cx, goal) {
        cx.notify(state.entity_id());
    }

    state
}

/// Fades an element while it is disabled.
pub fn disabled_opacity_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    let state = Transition::new(
        id,
        window,
        cx,
        Duration::from_millis(365),
        |_window, _cx| 1.,
    )
    .with_easing(ease_out_quint());

    if state.set(cx, if is_disabled { 0.45 } else { 1. }) {
        cx.notify(state.entity_id());
    }

    state
}
