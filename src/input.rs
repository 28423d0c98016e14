use crate::game::{AnswerEvent, Choice, GameSettings, ResetEvent};
use bevy::prelude::*;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (answer_keys, reset_trigger, help_toggle));
    }
}

// Key presses after the round is answered still emit events; the
// answered guard in the game systems discards them.
fn answer_keys(keys: Res<ButtonInput<KeyCode>>, mut ev_answer: EventWriter<AnswerEvent>) {
    if keys.just_pressed(KeyCode::KeyP) {
        ev_answer.send(AnswerEvent(Choice::Prime));
    }
    if keys.just_pressed(KeyCode::KeyN) {
        ev_answer.send(AnswerEvent(Choice::NotPrime));
    }
}

fn reset_trigger(mut ev_reset: EventWriter<ResetEvent>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyR) {
        ev_reset.send(ResetEvent::default());
    }
}

fn help_toggle(mut settings: ResMut<GameSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyH) {
        settings.show_help = !settings.show_help;
    }
}
