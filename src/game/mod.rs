//! Thirty Days: find a full-time job before the month runs out.

pub mod actions;
pub mod catalog;
pub mod dialogue;
pub mod interview;
pub mod journal;
pub mod ledger;
pub mod logic;
pub mod map;
pub mod render;
pub mod rng;
pub mod state;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, KEY_BACKSPACE, KEY_ENTER};

use actions::*;
use rng::{clock_seed, Lcg, RandomSource};
use state::{Answer, GameState, Signal, Stage, ALL_SIGNALS};
use view::{Screen, ViewState};

pub struct ThirtyDaysGame {
    pub state: GameState,
    pub view: ViewState,
}

impl ThirtyDaysGame {
    pub fn new() -> Self {
        Self::with_rng(Box::new(Lcg::new(clock_seed())))
    }

    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        let mut game = Self {
            state: GameState::new(rng),
            view: ViewState::new(),
        };
        logic::start(&mut game.state);
        game.flush_events();
        game
    }

    fn restart(&mut self) {
        *self = Self::new();
    }

    /// Hand queued events to the floats and the console journal.
    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        self.view.absorb(&events);
        journal::record(&events);
    }

    fn interview_stage(&self) -> Option<Stage> {
        self.state.active_interview.as_ref().map(|a| a.stage)
    }

    fn submit(&mut self, answer: Answer) -> bool {
        logic::submit_interview_answer(&mut self.state, answer)
    }

    fn submit_typed(&mut self) -> bool {
        let answer = self.view.take_answer();
        self.submit(Answer::Number(answer))
    }

    fn perform(&mut self, index: usize) -> bool {
        let had_interview = self.state.active_interview.is_some();
        let done = logic::perform_action(&mut self.state, index);
        if !had_interview && self.state.active_interview.is_some() {
            self.view.answer_input.clear();
        }
        done
    }

    fn travel(&mut self, index: usize) -> bool {
        let moved = logic::travel(&mut self.state, index);
        if moved {
            self.view.screen = Screen::Main;
            self.view.answer_input.clear();
        }
        moved
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        if self.state.is_game_over() {
            if action_id == RESTART {
                self.restart();
                return true;
            }
            return false;
        }

        match action_id {
            OPEN_MOVE => {
                self.view.screen = Screen::Move;
                true
            }
            OPEN_STATS => {
                self.view.screen = Screen::Stats;
                true
            }
            BACK => {
                self.view.screen = Screen::Main;
                true
            }
            id if (ACTION_BASE..ACTION_BASE + 20).contains(&id) => {
                self.perform((id - ACTION_BASE) as usize)
            }
            id if (TRAVEL_BASE..TRAVEL_BASE + 10).contains(&id) => {
                self.travel((id - TRAVEL_BASE) as usize)
            }
            id if (KEYPAD_BASE..KEYPAD_BASE + 10).contains(&id) => {
                let digit = char::from(b'0' + (id - KEYPAD_BASE) as u8);
                self.view.push_answer_char(digit)
            }
            KEYPAD_MINUS => self.view.push_answer_char('-'),
            KEYPAD_DELETE => self.view.pop_answer_char(),
            SUBMIT => self.submit_typed(),
            id if (PICK_BASE..PICK_BASE + 3).contains(&id) => {
                self.submit(Answer::Pick((id - PICK_BASE) as usize))
            }
            NEXT_QUESTION => logic::advance_interview_question(&mut self.state),
            id if (SIGNAL_BASE..SIGNAL_BASE + ALL_SIGNALS.len() as u16).contains(&id) => {
                self.submit(Answer::Press(ALL_SIGNALS[(id - SIGNAL_BASE) as usize]))
            }
            WALK_OUT => logic::abandon_interview(&mut self.state),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        if self.state.is_game_over() {
            if key == 'r' {
                self.restart();
                return true;
            }
            return false;
        }

        match self.view.screen {
            Screen::Move => match key {
                '1'..='9' => self.travel(digit_index(key)),
                '-' | 'q' | 'm' => {
                    self.view.screen = Screen::Main;
                    true
                }
                _ => false,
            },
            Screen::Stats => match key {
                '-' | 'q' | 's' => {
                    self.view.screen = Screen::Main;
                    true
                }
                _ => false,
            },
            Screen::Main => {
                if self.state.active_interview.is_some() {
                    self.handle_interview_key(key)
                } else {
                    self.handle_main_key(key)
                }
            }
        }
    }

    fn handle_main_key(&mut self, key: char) -> bool {
        match key {
            '1'..='9' => self.perform(digit_index(key)),
            'm' => {
                self.view.screen = Screen::Move;
                true
            }
            's' => {
                self.view.screen = Screen::Stats;
                true
            }
            _ => false,
        }
    }

    fn handle_interview_key(&mut self, key: char) -> bool {
        match key {
            'q' => return logic::abandon_interview(&mut self.state),
            'm' => {
                self.view.screen = Screen::Move;
                return true;
            }
            's' => {
                self.view.screen = Screen::Stats;
                return true;
            }
            _ => {}
        }

        match self.interview_stage() {
            Some(Stage::Math) => match key {
                '0'..='9' | '-' => self.view.push_answer_char(key),
                KEY_BACKSPACE => self.view.pop_answer_char(),
                KEY_ENTER => self.submit_typed(),
                _ => false,
            },
            Some(Stage::Scenario | Stage::Boss) => match key {
                '1'..='3' => self.submit(Answer::Pick(digit_index(key))),
                KEY_ENTER | 'n' => logic::advance_interview_question(&mut self.state),
                _ => false,
            },
            Some(Stage::Reaction) => match key {
                'g' | '1' => self.submit(Answer::Press(Signal::Green)),
                'b' | '2' => self.submit(Answer::Press(Signal::Blue)),
                'y' | '3' => self.submit(Answer::Press(Signal::Yellow)),
                _ => false,
            },
            None => false,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let consumed = match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        };
        self.flush_events();
        consumed
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        self.view.tick(delta_ticks);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, &self.view, f, area, click_state);
    }
}

/// '1' → 0, '2' → 1, …
fn digit_index(key: char) -> usize {
    (key as u8 - b'1') as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::map::LocationId;
    use crate::game::rng::ScriptedRng;
    use crate::game::state::{Outcome, Stat};

    fn game(rolls: Vec<u32>) -> ThirtyDaysGame {
        ThirtyDaysGame::with_rng(Box::new(ScriptedRng::new(rolls)))
    }

    fn key(g: &mut ThirtyDaysGame, c: char) -> bool {
        g.handle_input(&InputEvent::Key(c))
    }

    fn click(g: &mut ThirtyDaysGame, id: u16) -> bool {
        g.handle_input(&InputEvent::Click(id))
    }

    #[test]
    fn opens_with_home_line() {
        let g = game(vec![0]);
        assert_eq!(g.state.location, LocationId::Home);
        assert!(g.state.dialogue.is_some());
        assert!(g.state.events.is_empty());
    }

    #[test]
    fn move_panel_via_keys() {
        let mut g = game(vec![0]);
        assert!(key(&mut g, 'm'));
        assert_eq!(g.view.screen, Screen::Move);
        assert!(key(&mut g, '1'));
        assert_eq!(g.state.location, LocationId::Downtown);
        assert_eq!(g.view.screen, Screen::Main);

        key(&mut g, 'm');
        assert!(!key(&mut g, '9'));
        assert_eq!(g.view.screen, Screen::Move);
        assert!(key(&mut g, '-'));
        assert_eq!(g.view.screen, Screen::Main);
    }

    #[test]
    fn move_panel_via_clicks() {
        let mut g = game(vec![0]);
        click(&mut g, OPEN_MOVE);
        click(&mut g, TRAVEL_BASE);
        assert_eq!(g.state.location, LocationId::Downtown);
        click(&mut g, OPEN_MOVE);
        click(&mut g, TRAVEL_BASE + 2);
        assert_eq!(g.state.location, LocationId::Bar);
    }

    #[test]
    fn stats_panel_toggles() {
        let mut g = game(vec![0]);
        key(&mut g, 's');
        assert_eq!(g.view.screen, Screen::Stats);
        key(&mut g, 's');
        assert_eq!(g.view.screen, Screen::Main);
        click(&mut g, OPEN_STATS);
        click(&mut g, BACK);
        assert_eq!(g.view.screen, Screen::Main);
    }

    #[test]
    fn sleep_key_spawns_floats() {
        let mut g = game(vec![0]);
        g.state.ledger.energy = 50;
        assert!(key(&mut g, '1'));
        assert_eq!(g.state.ledger.day, 2);
        let texts: Vec<&str> = g.view.floats.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["+50 ⚡", "−¥2000"]);
        assert!(g.state.events.is_empty());
    }

    #[test]
    fn floats_fade_with_ticks() {
        let mut g = game(vec![0]);
        click(&mut g, ACTION_BASE);
        assert!(!g.view.floats.is_empty());
        g.tick(view::FLOAT_LIFE);
        assert!(g.view.floats.is_empty());
    }

    #[test]
    fn math_interview_by_keyboard() {
        let mut g = game(vec![0]);
        g.state.location = LocationId::Recruiter;
        g.state.ledger.level = 1;
        // Recruiter at level 1: [Interview 1, Chat].
        assert!(key(&mut g, '1'));
        assert!(g.state.active_interview.is_some());
        for _ in 0..5 {
            key(&mut g, '2');
            key(&mut g, KEY_ENTER);
        }
        assert!(g.state.record(Stage::Math).passed);
        assert!(g.state.active_interview.is_none());
    }

    #[test]
    fn keypad_clicks_build_answer() {
        let mut g = game(vec![0]);
        g.state.location = LocationId::Recruiter;
        g.state.ledger.level = 1;
        click(&mut g, ACTION_BASE);
        click(&mut g, KEYPAD_MINUS);
        click(&mut g, KEYPAD_BASE + 3);
        assert_eq!(g.view.answer_input, "-3");
        click(&mut g, KEYPAD_DELETE);
        click(&mut g, KEYPAD_DELETE);
        click(&mut g, KEYPAD_BASE + 2);
        click(&mut g, SUBMIT);
        let active = g.state.active_interview.as_ref().unwrap();
        assert_eq!((active.index, active.correct), (1, 1));
        assert!(g.view.answer_input.is_empty());
    }

    #[test]
    fn choice_interview_by_clicks() {
        let mut g = game(vec![0]);
        g.state.location = LocationId::Recruiter;
        g.state.ledger.level = 2;
        g.state.record_mut(Stage::Math).passed = true;
        click(&mut g, ACTION_BASE);
        assert!(!click(&mut g, NEXT_QUESTION));
        for q in &interview::SCENARIO_QUESTIONS {
            click(&mut g, PICK_BASE + q.correct as u16);
            click(&mut g, NEXT_QUESTION);
        }
        assert!(g.state.record(Stage::Scenario).passed);
    }

    #[test]
    fn reaction_interview_by_keys() {
        let mut g = game(vec![0]);
        g.state.location = LocationId::Recruiter;
        g.state.ledger.level = 3;
        g.state.record_mut(Stage::Math).passed = true;
        g.state.record_mut(Stage::Scenario).passed = true;
        key(&mut g, '1');
        for _ in 0..10 {
            key(&mut g, 'g');
        }
        assert!(g.state.record(Stage::Reaction).passed);
    }

    #[test]
    fn walk_out_key() {
        let mut g = game(vec![0]);
        g.state.location = LocationId::Recruiter;
        g.state.ledger.level = 1;
        key(&mut g, '1');
        assert!(key(&mut g, 'q'));
        assert!(g.state.active_interview.is_none());
        assert_eq!(g.state.record(Stage::Math).last_attempt_day, 1);
    }

    #[test]
    fn game_over_only_restarts() {
        let mut g = game(vec![0]);
        g.state.ledger.day = 30;
        key(&mut g, '1');
        assert_eq!(g.state.outcome, Some(Outcome::TimeUp));
        let before = g.state.ledger();
        assert!(!key(&mut g, '1'));
        assert!(!click(&mut g, OPEN_MOVE));
        assert_eq!(g.state.ledger(), before);

        assert!(key(&mut g, 'r'));
        assert_eq!(g.state.outcome, None);
        assert_eq!(g.state.ledger.day, 1);
        assert_eq!(g.state.ledger.get(Stat::Money), 5_000);
    }
}
