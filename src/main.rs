use bevy::prelude::*;
use starfield_core::{StarfieldConfig, THEME_FILE};
use starfield_render::ShowWhenVisible;
use starfield_render::plugin::StarfieldRenderPlugin;
use starfield_render::theme::{ThemePlugin, ThemeStore};
use starfield_render::ui::{ThemeText, ThemeView, rgb_color};
use starfield_sim::pipeline::StarfieldSimPlugin;
use starfield_sim::state::{DisturbRng, FieldState, ResizeDebounce};
use std::path::PathBuf;

fn theme_path() -> PathBuf {
    PathBuf::from("data").join(THEME_FILE)
}

fn main() {
    let config = StarfieldConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Starfield".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FieldState::empty(config.clone()))
        .insert_resource(DisturbRng::from_seed(config.seed))
        .insert_resource(ResizeDebounce::default())
        .insert_resource(ThemeStore::load(theme_path()))
        .add_plugins(StarfieldSimPlugin)
        .add_plugins(StarfieldRenderPlugin)
        .add_plugins(ThemePlugin)
        .add_systems(Startup, spawn_shell)
        .add_systems(
            Update,
            (
                theme_toggle,
                sync_clear_color.run_if(resource_changed::<ThemeStore>),
            ),
        )
        .run();
}

/// Centered hello text over the starfield, plus a gated hint panel
fn spawn_shell(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            row_gap: Val::Px(24.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Hello World"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor::default(),
                ThemeText::default(),
            ));

            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor::default(),
                    ThemeView {
                        is_primary: false,
                        ..Default::default()
                    },
                    ShowWhenVisible::default(),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("[T] Toggle theme"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor::default(),
                    ));
                });
        });
}

fn theme_toggle(keys: Res<ButtonInput<KeyCode>>, mut store: ResMut<ThemeStore>) {
    if keys.just_pressed(KeyCode::KeyT) {
        store.toggle();
        info!("Theme set to {}", store.theme().as_str());
    }
}

/// The window clear color is the theme's primary background
fn sync_clear_color(store: Res<ThemeStore>, mut clear: ResMut<ClearColor>) {
    clear.0 = rgb_color(store.colors().primary_background, 1.0);
}
