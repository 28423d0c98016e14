mod game;
mod input;
mod primes;
mod ui;

use bevy::prelude::*;
use game::GamePlugin;
use input::InputPlugin;
use ui::UiPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.04)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "prime rush — beat the clock".into(),
                resolution: (480., 800.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((GamePlugin, UiPlugin, InputPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
