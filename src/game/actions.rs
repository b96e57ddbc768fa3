//! Semantic action IDs for Thirty Days click targets.

// ── Main screen ──────────────────────────────────────────────
pub const ACTION_BASE: u16 = 10; // +index 0..19
pub const OPEN_MOVE: u16 = 30;
pub const OPEN_STATS: u16 = 31;
pub const BACK: u16 = 32;
pub const RESTART: u16 = 33;

// ── Move panel ───────────────────────────────────────────────
pub const TRAVEL_BASE: u16 = 40; // +index 0..9

// ── Interview: arithmetic keypad ─────────────────────────────
pub const KEYPAD_BASE: u16 = 60; // +digit 0..9
pub const KEYPAD_MINUS: u16 = 70;
pub const KEYPAD_DELETE: u16 = 71;
pub const SUBMIT: u16 = 72;

// ── Interview: multiple choice ───────────────────────────────
pub const PICK_BASE: u16 = 80; // +option 0..2
pub const NEXT_QUESTION: u16 = 90;

// ── Interview: reaction test ─────────────────────────────────
pub const SIGNAL_BASE: u16 = 100; // +index into ALL_SIGNALS

pub const WALK_OUT: u16 = 110;
