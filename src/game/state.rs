//! Thirty Days game state: data structures and balance constants, no logic.

use serde::Serialize;

use super::dialogue::Speaker;
use super::map::LocationId;
use super::rng::RandomSource;

// ── Balance ───────────────────────────────────────────────────

/// Last playable day. Sleeping past it ends the game.
pub const MAX_DAYS: u32 = 30;
/// Energy after a night's sleep.
pub const MAX_ENERGY: u32 = 100;
pub const START_MONEY: u32 = 5_000;
/// Charged on every sleep that doesn't end the game.
pub const RENT: u32 = 2_000;
/// Level reached when the final decision is received.
pub const HIRED_LEVEL: u8 = 5;

pub const TRUCKS_ENERGY: u32 = 5;
pub const DRINK_ENERGY: u32 = 15;
pub const DRINK_PRICE: u32 = 1_500;
/// Chance (%) that a drink loosens a stranger's tongue.
pub const STRANGER_HINT_CHANCE: u32 = 35;
pub const WORKOUT_ENERGY: u32 = 25;
pub const WORKOUT_PRICE: u32 = 1_000;
pub const STUDY_ENERGY: u32 = 20;
pub const STUDY_PRICE: u32 = 500;
pub const CONBINI_ENERGY: u32 = 30;
pub const CONBINI_WAGE: u32 = 3_500;
pub const CALL_CENTER_ENERGY: u32 = 25;
pub const CALL_CENTER_WAGE: u32 = 4_500;
pub const CALL_CENTER_MIN_CHARM: u32 = 3;
pub const CALL_CENTER_MIN_KNOWLEDGE: u32 = 2;
pub const BET_STAKE: u32 = 3_000;
pub const BET_ENERGY: u32 = 10;
pub const BET_PAYOUT: u32 = 9_000;
/// Minimum charm, knowledge and endurance before the recruiter takes you on.
pub const RECRUITER_MIN_STAT: u32 = 2;

// ── Ledger ────────────────────────────────────────────────────

/// A player resource that can change through actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Energy,
    Charm,
    Knowledge,
    Endurance,
    Money,
}

impl Stat {
    pub fn name(self) -> &'static str {
        match self {
            Stat::Energy => "Energy",
            Stat::Charm => "Charm",
            Stat::Knowledge => "Knowledge",
            Stat::Endurance => "Endurance",
            Stat::Money => "Money",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Stat::Energy => "⚡",
            Stat::Charm => "✨",
            Stat::Knowledge => "📚",
            Stat::Endurance => "🏃",
            Stat::Money => "¥",
        }
    }
}

/// The mutable numbers of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Ledger {
    pub day: u32,
    pub energy: u32,
    pub charm: u32,
    pub knowledge: u32,
    pub endurance: u32,
    pub money: u32,
    /// 0 = not a recruiter client yet, 1–4 = interview stage reached, 5 = hired.
    pub level: u8,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            day: 1,
            energy: MAX_ENERGY,
            charm: 1,
            knowledge: 1,
            endurance: 1,
            money: START_MONEY,
            level: 0,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// ── Interviews ────────────────────────────────────────────────

/// The four interview stages, in ladder order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Math,
    Scenario,
    Reaction,
    Boss,
}

pub const ALL_STAGES: [Stage; 4] = [Stage::Math, Stage::Scenario, Stage::Reaction, Stage::Boss];

impl Stage {
    /// 1-based stage number.
    pub fn number(self) -> u8 {
        match self {
            Stage::Math => 1,
            Stage::Scenario => 2,
            Stage::Reaction => 3,
            Stage::Boss => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Stage> {
        ALL_STAGES.get((n as usize).checked_sub(1)?).copied()
    }

    pub fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Minimum score (percent) to pass.
    pub fn threshold(self) -> f64 {
        match self {
            Stage::Math => 60.0,
            Stage::Scenario => 75.0,
            Stage::Reaction => 70.0,
            Stage::Boss => 75.0,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Math => "First Interview: Math Screening",
            Stage::Scenario => "Second Interview: Workplace Scenarios",
            Stage::Reaction => "Third Interview: Color Reaction Test",
            Stage::Boss => "Final Boss Interview",
        }
    }

    pub fn previous(self) -> Option<Stage> {
        Stage::from_number(self.number() - 1)
    }
}

/// Per-stage attempt bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InterviewRecord {
    /// 0 until the first attempt.
    pub last_attempt_day: u32,
    pub passed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
        }
    }
}

/// A generated stage-1 question `a op b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MathQuestion {
    pub a: i32,
    pub b: i32,
    pub op: Op,
}

impl MathQuestion {
    pub fn answer(&self) -> i32 {
        match self.op {
            Op::Add => self.a + self.b,
            Op::Sub => self.a - self.b,
        }
    }
}

/// Target colours of the reaction test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Green,
    Blue,
    Yellow,
}

pub const ALL_SIGNALS: [Signal; 3] = [Signal::Green, Signal::Blue, Signal::Yellow];

impl Signal {
    pub fn name(self) -> &'static str {
        match self {
            Signal::Green => "Green",
            Signal::Blue => "Blue",
            Signal::Yellow => "Yellow",
        }
    }
}

/// Stage-specific progress of a running interview.
#[derive(Clone, Debug, PartialEq)]
pub enum Format {
    /// Stage 1: freshly generated arithmetic.
    Arithmetic { questions: Vec<MathQuestion> },
    /// Stages 2 and 4: fixed multiple choice, select then advance.
    Choice { selected: Option<usize> },
    /// Stage 3: one scored click per round.
    Reaction { target: Signal },
}

/// A mini-game in progress. Dropped on completion, travel, or walking out.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveInterview {
    pub stage: Stage,
    /// Questions answered (or rounds played) so far.
    pub index: usize,
    pub correct: u32,
    pub total: u32,
    pub format: Format,
}

/// Player input for the running interview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Answer {
    /// Stage 1. `None` when the typed text isn't a number.
    Number(Option<i32>),
    /// Stages 2 and 4: option index.
    Pick(usize),
    /// Stage 3.
    Press(Signal),
}

// ── Notifications ─────────────────────────────────────────────

/// One line for the single-line dialogue box.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DialogueLine {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Hired,
    TimeUp,
}

/// Everything the presentation layer is told about, in order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    Line(DialogueLine),
    Resource { stat: Stat, delta: i64 },
    Ended { outcome: Outcome },
}

// ── Session ───────────────────────────────────────────────────

pub struct GameState {
    pub ledger: Ledger,
    pub location: LocationId,
    pub call_center_unlocked: bool,
    /// Indexed by `Stage::index()`.
    pub interviews: [InterviewRecord; 4],
    pub active_interview: Option<ActiveInterview>,
    /// `Some` once the run is over; terminal.
    pub outcome: Option<Outcome>,
    /// The line currently shown; replaced, never queued.
    pub dialogue: Option<DialogueLine>,
    /// Outbox drained by the presentation layer.
    pub events: Vec<GameEvent>,
    pub rng: Box<dyn RandomSource>,
}

impl GameState {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            ledger: Ledger::new(),
            location: LocationId::Home,
            call_center_unlocked: false,
            interviews: [InterviewRecord::default(); 4],
            active_interview: None,
            outcome: None,
            dialogue: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Snapshot for stat display.
    pub fn ledger(&self) -> Ledger {
        self.ledger
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn record(&self, stage: Stage) -> &InterviewRecord {
        &self.interviews[stage.index()]
    }

    pub fn record_mut(&mut self, stage: Stage) -> &mut InterviewRecord {
        &mut self.interviews[stage.index()]
    }

    /// Show a narrative line, replacing the previous one.
    pub fn say(&mut self, speaker: Speaker, text: impl Into<String>) {
        let line = DialogueLine {
            speaker,
            text: text.into(),
        };
        self.events.push(GameEvent::Line(line.clone()));
        self.dialogue = Some(line);
    }

    /// Report a resource change. Zero deltas are not reported.
    pub fn notify(&mut self, stat: Stat, delta: i64) {
        if delta != 0 {
            self.events.push(GameEvent::Resource { stat, delta });
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
