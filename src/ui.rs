use bevy::prelude::*;
use bevy_egui::{
    egui::{self, Align2, Color32, FontId, RichText},
    EguiContexts, EguiPlugin,
};

use crate::game::{
    AnswerEvent, Choice, GameSettings, ResetEvent, Round, RoundClock, ScoreBoard, SummaryNotice,
};

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, (hud_system, verdict_banner, summary_window));
    }
}

fn hud_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<GameSettings>,
    round: Res<Round>,
    score: Res<ScoreBoard>,
    clock: Res<RoundClock>,
    mut ev_answer: EventWriter<AnswerEvent>,
    mut ev_reset: EventWriter<ResetEvent>,
) {
    egui::Window::new("Prime Rush").show(contexts.ctx_mut(), |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(format!("{}", round.number)).font(FontId::proportional(72.0)));
            ui.label("Prime or not?");
        });

        ui.label(format!("Time left: {:.1}s", clock.0.remaining_secs()));

        ui.separator();

        ui.horizontal(|ui| {
            for choice in [Choice::Prime, Choice::NotPrime] {
                let button = answer_button(&round, choice);
                if ui.add_enabled(!round.answered, button).clicked() {
                    ev_answer.send(AnswerEvent(choice));
                }
            }
        });

        ui.separator();

        ui.label(format!(
            "Correct: {}  Wrong: {}  Attempts: {}",
            score.correct, score.wrong, score.attempts
        ));

        ui.separator();

        if ui.button("Reset").clicked() {
            ev_reset.send(ResetEvent::default());
        }
        ui.checkbox(&mut settings.show_help, "Show help");
    });

    if settings.show_help {
        egui::Window::new("Help").show(contexts.ctx_mut(), |ui| {
            ui.label("P: Answer Prime");
            ui.label("N: Answer Not Prime");
            ui.label("R: Reset Game");
            ui.label("H: Toggle Help");
            ui.label("Unanswered rounds count as wrong after 5 seconds.");
        });
    }
}

// Once the round is answered, each button shows whether it was the
// right call for this number.
fn answer_button(round: &Round, choice: Choice) -> egui::Button<'static> {
    let button = egui::Button::new(choice.label());
    if round.answered {
        if round.option_is_correct(choice) {
            button.fill(Color32::DARK_GREEN)
        } else {
            button.fill(Color32::DARK_RED)
        }
    } else {
        button
    }
}

fn verdict_banner(mut contexts: EguiContexts, round: Res<Round>) {
    let Some(choice) = round.user_choice else {
        return;
    };

    let correct = round.option_is_correct(choice);
    let (text, color) = if correct {
        ("Correct!", Color32::GREEN)
    } else {
        ("Wrong!", Color32::RED)
    };

    egui::Area::new("verdict_banner".into())
        .anchor(Align2::CENTER_TOP, egui::Vec2::new(0.0, 40.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                RichText::new(text)
                    .font(FontId::proportional(48.0))
                    .color(color),
            );
        });
}

fn summary_window(
    mut contexts: EguiContexts,
    mut summary: ResMut<SummaryNotice>,
    score: Res<ScoreBoard>,
) {
    if !summary.open {
        return;
    }

    egui::Window::new("Summary")
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(format!("Attempts: {}", score.attempts));
            ui.label(RichText::new(format!("Correct: {}", score.correct)).color(Color32::GREEN));
            ui.label(RichText::new(format!("Wrong: {}", score.wrong)).color(Color32::RED));
            if ui.button("Keep playing").clicked() {
                summary.open = false;
            }
        });
}
