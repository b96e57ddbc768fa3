//! Per-location actions and their effects.

use super::dialogue::{say_random, Speaker};
use super::interview;
use super::ledger::{gain, pay, spend_energy, spend_money};
use super::logic;
use super::map::LocationId;
use super::rng::chance;
use super::state::*;

const ALREADY_HIRED: &str = "You already got the job. Now you just grind salary instead of XP.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Sleep,
    Overthink,
    LookAround,
    WatchTrucks,
    Drink,
    TalkToStranger,
    Workout,
    Study,
    ConbiniShift,
    ApplyCallCenter,
    CallCenterShift,
    Bet,
    ChatDealer,
    BegRecruiter,
    Interview(Stage),
    ReceiveDecision,
    ChatRecruiter,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Sleep => "Sleep (restore, next day)",
            ActionKind::Overthink => "Overthink your future",
            ActionKind::LookAround => "Look around",
            ActionKind::WatchTrucks => "Watch the trucks",
            ActionKind::Drink => "Have a drink (+Charm, -Energy, -¥1500)",
            ActionKind::TalkToStranger => "Talk to a stranger",
            ActionKind::Workout => "Workout (+Endurance, -Energy, -¥1000)",
            ActionKind::Study => "Study (+Knowledge, -Energy, -¥500)",
            ActionKind::ConbiniShift => "Work a shift (+¥3500, +Endurance, -Energy)",
            ActionKind::ApplyCallCenter => "Apply for call center job",
            ActionKind::CallCenterShift => "Work a shift (+¥4500, +Charm, -Energy)",
            ActionKind::Bet => "Place a risky bet (-¥3000, 50% chance +¥9000)",
            ActionKind::ChatDealer => "Chat with the dealer",
            ActionKind::BegRecruiter => "Beg recruiter for mercy",
            ActionKind::Interview(Stage::Math) => "First interview: Math screening",
            ActionKind::Interview(Stage::Scenario) => "Second interview: Multiple-choice test",
            ActionKind::Interview(Stage::Reaction) => "Third interview: Color reaction test",
            ActionKind::Interview(Stage::Boss) => "Final boss interview: Big boss preferences",
            ActionKind::ReceiveDecision => "Receive final decision",
            ActionKind::ChatRecruiter => "Chat with recruiter",
        }
    }

    /// Requirement note shown next to gated actions.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            ActionKind::ApplyCallCenter => Some("Requires Charm ≥ 3 and Knowledge ≥ 2"),
            ActionKind::BegRecruiter => Some("Requires Charm, Knowledge and Endurance ≥ 2"),
            _ => None,
        }
    }
}

/// Actions offered at the current location, in display order.
pub fn available_actions(state: &GameState) -> Vec<ActionKind> {
    if state.is_game_over() {
        return Vec::new();
    }
    match state.location {
        LocationId::Home => vec![ActionKind::Sleep, ActionKind::Overthink],
        LocationId::Downtown => vec![ActionKind::LookAround],
        LocationId::Industrial => vec![ActionKind::WatchTrucks],
        LocationId::Bar => vec![ActionKind::Drink, ActionKind::TalkToStranger],
        LocationId::Gym => vec![ActionKind::Workout],
        LocationId::Library => vec![ActionKind::Study],
        LocationId::Conbini => vec![ActionKind::ConbiniShift],
        LocationId::CallCenter => {
            let mut actions = Vec::new();
            if !state.call_center_unlocked {
                actions.push(ActionKind::ApplyCallCenter);
            }
            actions.push(ActionKind::CallCenterShift);
            actions
        }
        LocationId::Gambling => vec![ActionKind::Bet, ActionKind::ChatDealer],
        LocationId::Recruiter => recruiter_actions(state),
    }
}

fn recruiter_actions(state: &GameState) -> Vec<ActionKind> {
    let mut actions = Vec::new();
    if state.ledger.level == 0 {
        actions.push(ActionKind::BegRecruiter);
    } else if let Some(stage) = ALL_STAGES.into_iter().find(|&s| !state.record(s).passed) {
        actions.push(ActionKind::Interview(stage));
    }
    if state.record(Stage::Boss).passed {
        actions.push(ActionKind::ReceiveDecision);
    }
    actions.push(ActionKind::ChatRecruiter);
    actions
}

/// Apply an action's effect. Returns true if it went through.
pub fn perform(state: &mut GameState, kind: ActionKind) -> bool {
    if state.is_game_over() {
        if kind == ActionKind::ReceiveDecision && state.outcome == Some(Outcome::Hired) {
            state.say(Speaker::Narrator, ALREADY_HIRED);
        }
        return false;
    }
    match kind {
        ActionKind::Sleep => logic::sleep(state),
        ActionKind::Overthink => {
            state.say(
                Speaker::You,
                "You imagine every possible failure. Somehow, it motivates you.",
            );
            true
        }
        ActionKind::LookAround => {
            state.say(
                Speaker::Narrator,
                "Neon, noise, and people who all look more prepared than you.",
            );
            true
        }
        ActionKind::WatchTrucks => {
            if !spend_energy(state, TRUCKS_ENERGY) {
                return false;
            }
            state.say(
                Speaker::Narrator,
                "You watch workers load trucks. Your back hurts in sympathy.",
            );
            true
        }
        ActionKind::Drink => drink(state),
        ActionKind::TalkToStranger => say_random(state, LocationId::Bar, Speaker::Stranger),
        ActionKind::Workout => train(
            state,
            WORKOUT_ENERGY,
            WORKOUT_PRICE,
            Stat::Endurance,
            LocationId::Gym,
            Speaker::Trainer,
        ),
        ActionKind::Study => train(
            state,
            STUDY_ENERGY,
            STUDY_PRICE,
            Stat::Knowledge,
            LocationId::Library,
            Speaker::Librarian,
        ),
        ActionKind::ConbiniShift => {
            if !spend_energy(state, CONBINI_ENERGY) {
                return false;
            }
            gain(state, Stat::Money, CONBINI_WAGE);
            gain(state, Stat::Endurance, 1);
            say_random(state, LocationId::Conbini, Speaker::Boss);
            true
        }
        ActionKind::ApplyCallCenter => apply_call_center(state),
        ActionKind::CallCenterShift => call_center_shift(state),
        ActionKind::Bet => bet(state),
        ActionKind::ChatDealer => say_random(state, LocationId::Gambling, Speaker::Dealer),
        ActionKind::BegRecruiter => beg_recruiter(state),
        ActionKind::Interview(stage) => interview::start(state, stage),
        ActionKind::ReceiveDecision => receive_decision(state),
        ActionKind::ChatRecruiter => {
            say_random(state, LocationId::Recruiter, Speaker::Recruiter)
        }
    }
}

fn drink(state: &mut GameState) -> bool {
    if !pay(state, DRINK_ENERGY, DRINK_PRICE) {
        return false;
    }
    gain(state, Stat::Charm, 1);
    state.say(
        Speaker::Narrator,
        "You talk nonsense with strangers until your social skills level up.",
    );
    if chance(state.rng.as_mut(), STRANGER_HINT_CHANCE) {
        say_random(state, LocationId::Bar, Speaker::Stranger);
    }
    true
}

fn train(
    state: &mut GameState,
    energy: u32,
    price: u32,
    stat: Stat,
    location: LocationId,
    speaker: Speaker,
) -> bool {
    if !pay(state, energy, price) {
        return false;
    }
    gain(state, stat, 1);
    say_random(state, location, speaker);
    true
}

fn apply_call_center(state: &mut GameState) -> bool {
    if state.call_center_unlocked {
        return false;
    }
    let l = &state.ledger;
    if l.charm < CALL_CENTER_MIN_CHARM || l.knowledge < CALL_CENTER_MIN_KNOWLEDGE {
        state.say(
            Speaker::CallCenterBoss,
            "The supervisor squints. \"Come back when you sound less like a dying potato.\"",
        );
        return false;
    }
    state.call_center_unlocked = true;
    state.say(
        Speaker::Narrator,
        "The supervisor nods. \"Fine. You sound just barely acceptable.\"",
    );
    say_random(state, LocationId::CallCenter, Speaker::Boss);
    true
}

fn call_center_shift(state: &mut GameState) -> bool {
    if !state.call_center_unlocked {
        state.say(Speaker::Narrator, "You haven't been accepted here yet.");
        return false;
    }
    if !spend_energy(state, CALL_CENTER_ENERGY) {
        return false;
    }
    gain(state, Stat::Money, CALL_CENTER_WAGE);
    gain(state, Stat::Charm, 1);
    state.say(
        Speaker::Narrator,
        "You survive a full day of complaints. Your empathy and sarcasm both gain XP.",
    );
    true
}

/// The stake is taken before the energy check and handed back if that fails.
fn bet(state: &mut GameState) -> bool {
    if !spend_money(state, BET_STAKE) {
        return false;
    }
    if !spend_energy(state, BET_ENERGY) {
        state.ledger.add(Stat::Money, BET_STAKE);
        state.notify(Stat::Money, BET_STAKE as i64);
        return false;
    }
    if state.rng.below(2) == 0 {
        gain(state, Stat::Money, BET_PAYOUT);
        state.say(
            Speaker::Dealer,
            "You win this round. The dealer looks annoyed. You immediately fear karma.",
        );
    } else {
        state.say(
            Speaker::Dealer,
            "You lose. The dealer smiles like they just got promoted.",
        );
    }
    true
}

fn beg_recruiter(state: &mut GameState) -> bool {
    if state.ledger.level != 0 {
        return false;
    }
    let l = &state.ledger;
    let meets = [l.charm, l.knowledge, l.endurance]
        .iter()
        .all(|&v| v >= RECRUITER_MIN_STAT);
    if !meets {
        state.say(
            Speaker::Recruiter,
            "\"Work on yourself first. I am not a miracle worker.\"",
        );
        return false;
    }
    state.ledger.level = 1;
    state.say(
        Speaker::Recruiter,
        "\"Fine. Your stats are barely above tragic. I'll take you as a client.\"",
    );
    state.say(
        Speaker::Narrator,
        "First interview is now open. Try not to self-destruct.",
    );
    true
}

fn receive_decision(state: &mut GameState) -> bool {
    if !state.record(Stage::Boss).passed {
        return false;
    }
    state.ledger.level = HIRED_LEVEL;
    state.say(
        Speaker::Recruiter,
        "The recruiter calls. \"They hired you. Somehow.\"",
    );
    logic::end_game(state, Outcome::Hired);
    true
}
