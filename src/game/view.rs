//! Presentation state: which panel is open, the typed answer, and the
//! floating resource-change particles. Nothing here affects game rules.

use super::state::{GameEvent, Stat};

/// Float lifetime in ticks (10 ticks/sec → ~1 s on screen).
pub const FLOAT_LIFE: u32 = 10;
pub const MAX_FLOATS: usize = 12;
/// Longest typed arithmetic answer, sign included.
pub const MAX_ANSWER_LEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Main,
    Move,
    Stats,
}

/// A "+1 ✨"-style label drifting up over the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Float {
    pub text: String,
    pub stat: Stat,
    /// Column offset from the centre of the scene.
    pub col_offset: i16,
    /// Remaining lifetime in ticks (counts down).
    pub life: u32,
    pub max_life: u32,
}

pub struct ViewState {
    pub screen: Screen,
    pub answer_input: String,
    pub floats: Vec<Float>,
    spawned: u32,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Main,
            answer_input: String::new(),
            floats: Vec::new(),
            spawned: 0,
        }
    }

    /// Turn resource events into floats. Other events are ignored.
    pub fn absorb(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Resource { stat, delta } = *event {
                self.push_float(stat, delta);
            }
        }
    }

    pub fn push_float(&mut self, stat: Stat, delta: i64) {
        if delta == 0 {
            return;
        }
        // Stagger neighbours so simultaneous floats don't overlap.
        let col_offset = ((self.spawned % 5) as i16 - 2) * 4;
        self.spawned = self.spawned.wrapping_add(1);
        self.floats.push(Float {
            text: float_text(stat, delta),
            stat,
            col_offset,
            life: FLOAT_LIFE,
            max_life: FLOAT_LIFE,
        });
        if self.floats.len() > MAX_FLOATS {
            self.floats.remove(0);
        }
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        for f in &mut self.floats {
            f.life = f.life.saturating_sub(delta_ticks);
        }
        self.floats.retain(|f| f.life > 0);
    }

    // ── Answer entry ──────────────────────────────────────────────

    /// Accept a digit anywhere and a minus sign only in front.
    pub fn push_answer_char(&mut self, c: char) -> bool {
        let ok = match c {
            '0'..='9' => true,
            '-' => self.answer_input.is_empty(),
            _ => false,
        };
        if !ok || self.answer_input.len() >= MAX_ANSWER_LEN {
            return false;
        }
        self.answer_input.push(c);
        true
    }

    pub fn pop_answer_char(&mut self) -> bool {
        self.answer_input.pop().is_some()
    }

    /// Parse and clear the typed answer. `None` when it isn't a number.
    pub fn take_answer(&mut self) -> Option<i32> {
        let parsed = self.answer_input.parse().ok();
        self.answer_input.clear();
        parsed
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn float_text(stat: Stat, delta: i64) -> String {
    let sign = if delta > 0 { "+" } else { "−" };
    let value = delta.unsigned_abs();
    match stat {
        Stat::Money => format!("{}¥{}", sign, value),
        _ => format!("{}{} {}", sign, value, stat.icon()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_text_formats() {
        assert_eq!(float_text(Stat::Money, 9_000), "+¥9000");
        assert_eq!(float_text(Stat::Money, -3_000), "−¥3000");
        assert_eq!(float_text(Stat::Charm, 1), "+1 ✨");
        assert_eq!(float_text(Stat::Energy, -15), "−15 ⚡");
    }

    #[test]
    fn absorb_only_resource_events() {
        let mut v = ViewState::new();
        v.absorb(&[
            GameEvent::Resource { stat: Stat::Knowledge, delta: 1 },
            GameEvent::Ended { outcome: crate::game::state::Outcome::TimeUp },
        ]);
        assert_eq!(v.floats.len(), 1);
        assert_eq!(v.floats[0].text, "+1 📚");
    }

    #[test]
    fn floats_expire() {
        let mut v = ViewState::new();
        v.push_float(Stat::Money, 100);
        v.tick(FLOAT_LIFE - 1);
        assert_eq!(v.floats.len(), 1);
        v.tick(1);
        assert!(v.floats.is_empty());
    }

    #[test]
    fn floats_capped() {
        let mut v = ViewState::new();
        for i in 0..(MAX_FLOATS as i64 + 5) {
            v.push_float(Stat::Money, i + 1);
        }
        assert_eq!(v.floats.len(), MAX_FLOATS);
        assert_eq!(v.floats[0].text, "+¥6");
    }

    #[test]
    fn zero_delta_spawns_nothing() {
        let mut v = ViewState::new();
        v.push_float(Stat::Energy, 0);
        assert!(v.floats.is_empty());
    }

    #[test]
    fn answer_entry() {
        let mut v = ViewState::new();
        assert!(v.push_answer_char('-'));
        assert!(v.push_answer_char('4'));
        assert!(!v.push_answer_char('-'));
        assert!(!v.push_answer_char('x'));
        assert_eq!(v.take_answer(), Some(-4));
        assert!(v.answer_input.is_empty());

        assert!(v.push_answer_char('-'));
        assert_eq!(v.take_answer(), None);

        for c in "12345".chars() {
            v.push_answer_char(c);
        }
        assert_eq!(v.answer_input, "1234");
        assert!(v.pop_answer_char());
        assert_eq!(v.answer_input, "123");
    }
}
