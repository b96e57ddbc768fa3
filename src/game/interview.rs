//! The four-stage interview ladder: gating, mini-game state machines, scoring.

use super::dialogue::{say_random, Speaker};
use super::map::LocationId;
use super::state::{
    ActiveInterview, Answer, Format, GameState, MathQuestion, Op, Signal, Stage, ALL_SIGNALS,
};

pub const MATH_QUESTION_COUNT: usize = 5;
pub const REACTION_ROUNDS: u32 = 10;

pub struct ChoiceQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 3],
    pub correct: usize,
}

pub const SCENARIO_QUESTIONS: [ChoiceQuestion; 4] = [
    ChoiceQuestion {
        prompt: "A client sends you an angry email about a small delay. What do you do first?",
        options: [
            "Ignore it and hope it disappears.",
            "Reply quickly, apologize, and propose a clear next step.",
            "Forward it to everyone and complain.",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "You notice a mistake in a report you already sent to your manager.",
        options: [
            "Wait and see if they notice.",
            "Tell them fast, explain the impact, and send a fixed version.",
            "Blame another colleague.",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "In a meeting, you don't understand part of the discussion.",
        options: [
            "Stay silent so nobody notices.",
            "Ask a short, clear question to understand.",
            "Change the topic.",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "You are on a long task and feel your focus drop.",
        options: [
            "Take a short break, then continue.",
            "Scroll social media for 30 minutes.",
            "Give up for the day right away.",
        ],
        correct: 0,
    },
];

/// Answers line up with the stranger's hints at the bar.
pub const BOSS_QUESTIONS: [ChoiceQuestion; 4] = [
    ChoiceQuestion {
        prompt: "The big boss sets a meeting at 09:00. When do you arrive?",
        options: [
            "08:55, ready and calm.",
            "09:00 exactly.",
            "09:05, meetings always start late.",
        ],
        correct: 0,
    },
    ChoiceQuestion {
        prompt: "In a meeting, a colleague starts gossiping about another team.",
        options: [
            "Join in to bond.",
            "Stay neutral and move the talk back to work.",
            "Add more gossip to the story.",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "The boss asks a question you can answer in one short line.",
        options: [
            "Give a long story to show effort.",
            "Give a short, clear answer, then offer details if needed.",
            "Avoid answering and change the topic.",
        ],
        correct: 1,
    },
    ChoiceQuestion {
        prompt: "The boss shares an opinion you don't fully agree with.",
        options: [
            "Say it's wrong and argue hard.",
            "Add your view in a calm and short way.",
            "Stay silent and never speak up again.",
        ],
        correct: 1,
    },
];

/// Fixed questions for the multiple-choice stages; empty otherwise.
pub fn choice_questions(stage: Stage) -> &'static [ChoiceQuestion] {
    match stage {
        Stage::Scenario => &SCENARIO_QUESTIONS,
        Stage::Boss => &BOSS_QUESTIONS,
        Stage::Math | Stage::Reaction => &[],
    }
}

pub fn instructions(stage: Stage) -> &'static str {
    match stage {
        Stage::Math => "Answer a few short math questions. You need at least 60% correct.",
        Stage::Scenario => "Pick the best answer. You need at least 75% correct.",
        Stage::Reaction => {
            "Press the button that matches the color name. You need at least 70% correct."
        }
        Stage::Boss => {
            "The big boss listens quietly. You get no feedback on each answer. \
             Trust what you learned around the city."
        }
    }
}

// ── Gate ──────────────────────────────────────────────────────────────

/// Stage 1 opens once the recruiter takes you on; later stages need the one before.
pub fn is_unlocked(state: &GameState, stage: Stage) -> bool {
    match stage.previous() {
        None => state.ledger.level >= 1,
        Some(prev) => state.record(prev).passed,
    }
}

/// Once per day, and never after passing.
pub fn can_attempt(state: &GameState, stage: Stage) -> bool {
    let record = state.record(stage);
    record.last_attempt_day != state.ledger.day && !record.passed
}

fn gate_rejection(stage: Stage) -> (Speaker, &'static str) {
    match stage {
        Stage::Math => (
            Speaker::Interviewer,
            "The interviewer sighs. \"One attempt per day. This isn't a gacha game.\"",
        ),
        Stage::Scenario => (
            Speaker::Interviewer,
            "\"One attempt per day. Let your brain cool down.\"",
        ),
        Stage::Reaction => (
            Speaker::Interviewer,
            "\"Reflexes only get one chance per day.\"",
        ),
        Stage::Boss => (
            Speaker::BigBoss,
            "\"Final interview: one chance per day. Save-scumming not allowed.\"",
        ),
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────

/// Begin an attempt. The day's slot is consumed here, not on completion.
pub fn start(state: &mut GameState, stage: Stage) -> bool {
    if state.is_game_over() || !is_unlocked(state, stage) {
        return false;
    }
    if !can_attempt(state, stage) {
        let (speaker, line) = gate_rejection(stage);
        state.say(speaker, line);
        return false;
    }

    let day = state.ledger.day;
    state.record_mut(stage).last_attempt_day = day;
    state.ledger.level = state.ledger.level.max(stage.number());

    let (format, total) = match stage {
        Stage::Math => {
            let questions: Vec<MathQuestion> = (0..MATH_QUESTION_COUNT)
                .map(|_| generate_question(state))
                .collect();
            (Format::Arithmetic { questions }, MATH_QUESTION_COUNT as u32)
        }
        Stage::Scenario | Stage::Boss => (
            Format::Choice { selected: None },
            choice_questions(stage).len() as u32,
        ),
        Stage::Reaction => (
            Format::Reaction {
                target: draw_signal(state),
            },
            REACTION_ROUNDS,
        ),
    };

    if stage == Stage::Boss {
        say_random(state, LocationId::Recruiter, Speaker::Boss);
    }

    state.active_interview = Some(ActiveInterview {
        stage,
        index: 0,
        correct: 0,
        total,
        format,
    });
    true
}

fn generate_question(state: &mut GameState) -> MathQuestion {
    let a = state.rng.below(10) as i32 + 1;
    let b = state.rng.below(10) as i32 + 1;
    let op = if state.rng.below(2) == 0 { Op::Add } else { Op::Sub };
    MathQuestion { a, b, op }
}

fn draw_signal(state: &mut GameState) -> Signal {
    ALL_SIGNALS[state.rng.below(ALL_SIGNALS.len() as u32) as usize]
}

/// Feed one answer to the running interview.
///
/// Stage 1 and 3 answers are scored and advance at once. Stage 2 and 4
/// answers only select an option; `advance` scores it.
pub fn submit_answer(state: &mut GameState, answer: Answer) -> bool {
    if state.is_game_over() {
        return false;
    }
    let Some(active) = state.active_interview.as_mut() else {
        return false;
    };

    let finished = match (&mut active.format, answer) {
        (Format::Arithmetic { questions }, Answer::Number(value)) => {
            let Some(q) = questions.get(active.index) else {
                return false;
            };
            if value == Some(q.answer()) {
                active.correct += 1;
            }
            active.index += 1;
            active.index >= active.total as usize
        }
        (Format::Choice { selected }, Answer::Pick(option)) => {
            if option >= 3 {
                return false;
            }
            *selected = Some(option);
            false
        }
        (Format::Reaction { target }, Answer::Press(signal)) => {
            if signal == *target {
                active.correct += 1;
            }
            active.index += 1;
            let done = active.index >= active.total as usize;
            if !done {
                *target = ALL_SIGNALS[state.rng.below(ALL_SIGNALS.len() as u32) as usize];
            }
            done
        }
        _ => return false,
    };

    if finished {
        finish(state);
    }
    true
}

/// Score the selected option and move on (multiple-choice stages only).
pub fn advance(state: &mut GameState) -> bool {
    if state.is_game_over() {
        return false;
    }
    let Some(active) = state.active_interview.as_mut() else {
        return false;
    };
    let stage = active.stage;
    let Format::Choice { selected } = &mut active.format else {
        return false;
    };

    let Some(choice) = selected.take() else {
        match stage {
            Stage::Boss => state.say(Speaker::BigBoss, "The boss stares. \"Answer.\""),
            _ => state.say(
                Speaker::Interviewer,
                "The interviewer frowns. \"Pick something, not nothing.\"",
            ),
        }
        return false;
    };

    if choice_questions(stage)
        .get(active.index)
        .is_some_and(|q| q.correct == choice)
    {
        active.correct += 1;
    }
    active.index += 1;

    if active.index >= active.total as usize {
        finish(state);
    }
    true
}

/// Walk out. The day's attempt stays spent.
pub fn abandon(state: &mut GameState) -> bool {
    if state.is_game_over() || state.active_interview.take().is_none() {
        return false;
    }
    state.say(
        Speaker::Narrator,
        "You walk out mid-interview. Today's attempt is gone.",
    );
    true
}

pub fn score(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

fn finish(state: &mut GameState) {
    let Some(active) = state.active_interview.take() else {
        return;
    };
    let stage = active.stage;
    let pct = score(active.correct, active.total);
    let passed = pct >= stage.threshold();

    if passed {
        state.record_mut(stage).passed = true;
        let next = (stage.number() + 1).min(4);
        state.ledger.level = state.ledger.level.max(next);
    }

    match (stage, passed) {
        (Stage::Math, true) => state.say(
            Speaker::Interviewer,
            format!("\"Barely good enough. But it passes.\" (Score: {:.0}%)", pct),
        ),
        (Stage::Math, false) => state.say(
            Speaker::Interviewer,
            format!(
                "\"That was weak. Even my calculator is disappointed.\" (Score: {:.0}%)",
                pct
            ),
        ),
        (Stage::Scenario, true) => state.say(
            Speaker::Interviewer,
            format!(
                "\"You made mostly good choices. You might survive in an office.\" (Score: {:.0}%)",
                pct
            ),
        ),
        (Stage::Scenario, false) => state.say(
            Speaker::Interviewer,
            format!(
                "\"If you treated real clients like that, HR would cry.\" (Score: {:.0}%)",
                pct
            ),
        ),
        (Stage::Reaction, true) => state.say(
            Speaker::Interviewer,
            format!(
                "\"Your reactions are acceptable. You may face the final boss.\" (Score: {:.0}%)",
                pct
            ),
        ),
        (Stage::Reaction, false) => state.say(
            Speaker::Interviewer,
            format!(
                "\"Too slow. The boss's temper is faster than you.\" (Score: {:.0}%)",
                pct
            ),
        ),
        (Stage::Boss, true) => {
            state.say(
                Speaker::BigBoss,
                "\"Your answers are acceptable.\" He does not smile, but he does not dismiss you.",
            );
            state.say(
                Speaker::Narrator,
                "You leave the room not sure of the result. The recruiter will call you later.",
            );
        }
        (Stage::Boss, false) => state.say(
            Speaker::Narrator,
            "The boss simply says, \"That is all.\" The door closes behind you. \
             The silence crits for 9999 damage.",
        ),
    }
}

// ── Display helpers ───────────────────────────────────────────────────

/// The question or round line for the running interview.
pub fn prompt(active: &ActiveInterview) -> String {
    let n = active.index + 1;
    match &active.format {
        Format::Arithmetic { questions } => match questions.get(active.index) {
            Some(q) => format!("Q{}: {} {} {} = ?", n, q.a, q.op.symbol(), q.b),
            None => String::new(),
        },
        Format::Choice { .. } => match choice_questions(active.stage).get(active.index) {
            Some(q) => format!("Q{}: {}", n, q.prompt),
            None => String::new(),
        },
        Format::Reaction { target } => format!(
            "Round {}/{}: Press \"{}\"",
            n,
            active.total,
            target.name().to_uppercase()
        ),
    }
}

/// Options for the current multiple-choice question.
pub fn options(active: &ActiveInterview) -> &'static [&'static str] {
    match choice_questions(active.stage).get(active.index) {
        Some(q) => &q.options,
        None => &[],
    }
}
