use bevy::prelude::*;
use rand::{Rng, RngCore};

use crate::primes::is_prime;

pub const NUMBER_MIN: u32 = 1;
pub const NUMBER_MAX: u32 = 200;

/// Seconds per round. The clock repeats and never resets at round
/// boundaries; late expiries are neutralized by the answered guard.
pub const ROUND_SECONDS: f32 = 5.0;

/// A summary notice is raised every this many scored attempts.
pub const SUMMARY_EVERY: u32 = 10;

#[derive(Resource)]
pub struct SeededRng(pub rand::rngs::StdRng);

#[derive(Resource)]
pub struct RoundClock(pub Timer);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Choice {
    Prime,
    NotPrime,
}

impl Choice {
    pub fn implies_prime(self) -> bool {
        matches!(self, Choice::Prime)
    }
    pub fn label(self) -> &'static str {
        match self {
            Choice::Prime => "Prime",
            Choice::NotPrime => "Not prime",
        }
    }
}

#[derive(Event)]
pub struct AnswerEvent(pub Choice);

#[derive(Event, Default)]
pub struct ResetEvent;

/// One challenge: a number and the pending/resolved answer state.
/// Replaced wholesale when the next round starts.
#[derive(Resource, Debug)]
pub struct Round {
    pub number: u32,
    pub is_prime: bool,
    pub answered: bool,
    pub user_choice: Option<Choice>,
}

impl Round {
    pub fn draw(rng: &mut dyn RngCore) -> Self {
        let number = rng.gen_range(NUMBER_MIN..=NUMBER_MAX);
        Self {
            number,
            is_prime: is_prime(number),
            answered: false,
            user_choice: None,
        }
    }

    /// Whether picking `choice` is (or would have been) the right call.
    /// Only meaningful to the HUD once `answered` is set.
    pub fn option_is_correct(&self, choice: Choice) -> bool {
        choice.implies_prime() == self.is_prime
    }
}

#[derive(Resource, Debug, Default)]
pub struct ScoreBoard {
    pub correct: u32,
    pub wrong: u32,
    pub attempts: u32,
}

/// Raised by the scoring routine at every SUMMARY_EVERY crossing,
/// cleared by the HUD when the player dismisses it.
#[derive(Resource, Default)]
pub struct SummaryNotice {
    pub open: bool,
}

#[derive(Resource)]
pub struct GameSettings {
    pub show_help: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { show_help: true }
    }
}

pub struct GamePlugin;
impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreBoard>()
            .init_resource::<SummaryNotice>()
            .init_resource::<GameSettings>()
            .insert_resource(RoundClock(Timer::from_seconds(
                ROUND_SECONDS,
                TimerMode::Repeating,
            )))
            .add_event::<AnswerEvent>()
            .add_event::<ResetEvent>()
            .add_systems(Startup, start_first_round)
            .add_systems(
                Update,
                (handle_answers, round_timeout, handle_reset).chain(),
            );
    }
}

fn fresh_round(seeded: &mut Option<ResMut<SeededRng>>) -> Round {
    let mut thread_rng = rand::thread_rng();
    let rng: &mut dyn RngCore = if let Some(seeded) = seeded.as_mut() {
        &mut seeded.0
    } else {
        &mut thread_rng
    };
    Round::draw(rng)
}

fn start_first_round(mut commands: Commands, mut seeded: Option<ResMut<SeededRng>>) {
    commands.insert_resource(fresh_round(&mut seeded));
}

// Both close-out paths converge here; a round is scored at most once.
fn score_round(score: &mut ScoreBoard, summary: &mut SummaryNotice, correct: bool) {
    if correct {
        score.correct += 1;
    } else {
        score.wrong += 1;
    }
    score.attempts += 1;

    if score.attempts % SUMMARY_EVERY == 0 {
        summary.open = true;
        info!(
            "summary after {} attempts: {} correct, {} wrong",
            score.attempts, score.correct, score.wrong
        );
    }
}

pub fn handle_answers(
    mut ev_answer: EventReader<AnswerEvent>,
    mut round: ResMut<Round>,
    mut score: ResMut<ScoreBoard>,
    mut summary: ResMut<SummaryNotice>,
) {
    for AnswerEvent(choice) in ev_answer.read() {
        if round.answered {
            continue;
        }
        round.answered = true;
        round.user_choice = Some(*choice);

        let correct = round.option_is_correct(*choice);
        debug!(
            "round closed by choice: n = {}, picked {:?}, correct = {}",
            round.number, choice, correct
        );
        score_round(&mut score, &mut summary, correct);
    }
}

pub fn round_timeout(
    time: Res<Time>,
    mut clock: ResMut<RoundClock>,
    mut round: ResMut<Round>,
    mut score: ResMut<ScoreBoard>,
    mut summary: ResMut<SummaryNotice>,
    mut seeded: Option<ResMut<SeededRng>>,
) {
    clock.0.tick(time.delta());
    if !clock.0.just_finished() {
        return;
    }

    // A tick after the player already answered must not double-score,
    // but it still advances to the next round.
    if !round.answered {
        debug!("round timed out unanswered: n = {}", round.number);
        score_round(&mut score, &mut summary, false);
    }

    *round = fresh_round(&mut seeded);
}

pub fn handle_reset(
    mut ev_reset: EventReader<ResetEvent>,
    mut round: ResMut<Round>,
    mut clock: ResMut<RoundClock>,
    mut score: ResMut<ScoreBoard>,
    mut summary: ResMut<SummaryNotice>,
    mut seeded: Option<ResMut<SeededRng>>,
) {
    if ev_reset.is_empty() {
        return;
    }
    ev_reset.clear();

    *score = ScoreBoard::default();
    summary.open = false;
    clock.0.reset();
    *round = fresh_round(&mut seeded);
    info!("game reset");
}
