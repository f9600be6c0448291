use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Menu, TitlebarOptions,
    WindowBounds, WindowOptions, actions, point, prelude::*, px, size,
};

use profile_card::{
    CardAssets,
    theme::ThemeController,
    views::ProfileCard,
};

actions!(profile_card, [ToggleAppearance]);

fn main() {
    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(CardAssets)
        .run(|cx: &mut App| {
            profile_card::init(cx);

            cx.set_menus(vec![Menu {
                name: "Profile Card".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(560.), px(760.)), cx);

            let window = cx
                .open_window(
                    WindowOptions {
                        window_bounds: Some(WindowBounds::Windowed(bounds)),
                        titlebar: Some(TitlebarOptions {
                            title: Some("Profile".into()),
                            appears_transparent: true,
                            traffic_light_position: Some(point(px(10.), px(10.))),
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                    |_window, cx| cx.new(|cx| ProfileCard::new(cx)),
                )
                .unwrap();

            window
                .update(cx, |view, window, cx| {
                    window.focus(&view.focus_handle(cx));
                })
                .unwrap();

            init_appearance_actions(cx);

            cx.activate(true);
        });
}

fn init_appearance_actions(cx: &mut App) {
    cx.on_action(move |_: &ToggleAppearance, cx| {
        ThemeController::toggle(cx);

        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, _cx| {
                window.refresh();
            });
        })
    });

    cx.bind_keys([
        KeyBinding::new("cmd-t", ToggleAppearance, None),
        KeyBinding::new("ctrl-t", ToggleAppearance, None),
    ]);
}
