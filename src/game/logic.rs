//! Session lifecycle and entry points (no rendering or IO).

use super::catalog::{self, ActionKind};
use super::dialogue::{say_random, Speaker};
use super::interview;
use super::map::{location_info, neighbors, LocationId};
use super::state::{Answer, GameEvent, GameState, Outcome, Stage, Stat, MAX_DAYS, MAX_ENERGY, RENT};

/// Opening line of a fresh run.
pub fn start(state: &mut GameState) {
    say_random(state, LocationId::Home, Speaker::You);
}

/// Days left including today. 0 once the deadline has passed.
pub fn days_remaining(state: &GameState) -> u32 {
    (MAX_DAYS + 1).saturating_sub(state.ledger.day)
}

// ── Navigation ────────────────────────────────────────────────────────

/// Move to an adjacent location. Drops any running interview.
pub fn select_location(state: &mut GameState, dest: LocationId) -> bool {
    if state.is_game_over() || !neighbors(state.location).contains(&dest) {
        return false;
    }
    state.location = dest;
    state.active_interview = None;
    if let Some(speaker) = location_info(dest).ambient {
        say_random(state, dest, speaker);
    }
    true
}

/// Move by index into the current neighbour list. Out of range is a no-op.
pub fn travel(state: &mut GameState, index: usize) -> bool {
    match neighbors(state.location).get(index) {
        Some(&dest) => select_location(state, dest),
        None => false,
    }
}

// ── Actions ───────────────────────────────────────────────────────────

pub fn available_actions(state: &GameState) -> Vec<ActionKind> {
    catalog::available_actions(state)
}

/// Perform the `index`-th available action. Out of range is a no-op.
pub fn perform_action(state: &mut GameState, index: usize) -> bool {
    match available_actions(state).get(index) {
        Some(&kind) => catalog::perform(state, kind),
        None => false,
    }
}

// ── Interviews ────────────────────────────────────────────────────────

pub fn start_interview(state: &mut GameState, stage_number: u8) -> bool {
    match Stage::from_number(stage_number) {
        Some(stage) => interview::start(state, stage),
        None => false,
    }
}

pub fn submit_interview_answer(state: &mut GameState, answer: Answer) -> bool {
    interview::submit_answer(state, answer)
}

pub fn advance_interview_question(state: &mut GameState) -> bool {
    interview::advance(state)
}

pub fn abandon_interview(state: &mut GameState) -> bool {
    interview::abandon(state)
}

// ── Day cycle ─────────────────────────────────────────────────────────

/// Advance one day. Past the last day the run ends before energy or rent
/// are touched.
pub fn sleep(state: &mut GameState) -> bool {
    if state.is_game_over() {
        return false;
    }
    state.active_interview = None;
    state.ledger.day += 1;
    if state.ledger.day > MAX_DAYS {
        end_game(state, Outcome::TimeUp);
        return true;
    }

    let restored = MAX_ENERGY.saturating_sub(state.ledger.energy);
    state.ledger.energy = MAX_ENERGY;
    state.notify(Stat::Energy, restored as i64);

    let rent = RENT.min(state.ledger.money);
    state.ledger.money -= rent;
    state.notify(Stat::Money, -(rent as i64));

    let day = state.ledger.day;
    state.say(
        Speaker::Narrator,
        format!(
            "You sleep. It's now day {}. Rent eats ¥{} like a boss monster.",
            day, rent
        ),
    );
    true
}

/// Terminal. Every entry point is a no-op afterwards.
pub fn end_game(state: &mut GameState, outcome: Outcome) {
    if state.is_game_over() {
        return;
    }
    state.outcome = Some(outcome);
    state.active_interview = None;
    state.events.push(GameEvent::Ended { outcome });
    let line = match outcome {
        Outcome::Hired => {
            "You found a full-time job within 30 days. Congratulations, you're now a responsible adult NPC."
        }
        Outcome::TimeUp => {
            "Day 31 arrives. No job, no money. New difficulty unlocked: \"Hard mode: Reality.\""
        }
    };
    state.say(Speaker::Narrator, line);
}
