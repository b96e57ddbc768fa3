//! Speakers and the fixed dialogue pools, keyed by (location, speaker).

use serde::{Serialize, Serializer};

use super::map::LocationId;
use super::rng::RandomSource;
use super::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speaker {
    You,
    Bartender,
    Stranger,
    Trainer,
    Librarian,
    Boss,
    Dealer,
    Recruiter,
    Interviewer,
    // Narrative-only: no pools.
    Narrator,
    CallCenterBoss,
    BigBoss,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Bartender => "Bartender",
            Speaker::Stranger => "Stranger",
            Speaker::Trainer => "Trainer",
            Speaker::Librarian => "Librarian",
            Speaker::Boss => "Boss",
            Speaker::Dealer => "Dealer",
            Speaker::Recruiter => "Recruiter",
            Speaker::Interviewer => "Interviewer",
            Speaker::Narrator => "Narrator",
            Speaker::CallCenterBoss => "Call Center Boss",
            Speaker::BigBoss => "Big Boss",
        }
    }
}

impl Serialize for Speaker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Lines a speaker may say at a location. Empty for pairs with no pool.
pub fn pool(location: LocationId, speaker: Speaker) -> &'static [&'static str] {
    use LocationId as L;
    use Speaker as S;
    match (location, speaker) {
        (L::Home, S::You) => &[
            "You wake up. 30 days to find a full-time job.",
            "Another day. You need money, stats, and luck.",
        ],
        (L::Downtown, S::You) => &[
            "Downtown is busy. Lights, people, noise everywhere.",
            "From here, you can reach most places you need.",
        ],
        (L::Industrial, S::You) => &[
            "The industrial area is rough but full of work.",
            "Warehouses, factories, and tired workers.",
        ],
        (L::Bar, S::Bartender) => &[
            "Welcome. Take it slow. A drink can help your confidence.",
            "Charm isn't just looks. It's how you talk and listen.",
        ],
        // Each of these maps to one of the final interview's answers.
        (L::Bar, S::Stranger) => &[
            "They say the big boss loves punctual people.",
            "He hates gossip. If you talk behind backs, you're done.",
            "He likes short, clear answers. No long speeches.",
            "He respects people who refuse to gossip about others.",
        ],
        (L::Gym, S::Trainer) => &[
            "Strong legs, strong mind. Keep moving.",
            "Endurance keeps you calm in long interviews.",
        ],
        (L::Library, S::Librarian) => &[
            "Quiet is good for thinking.",
            "Study now. Impress them later.",
        ],
        (L::Conbini, S::Boss) => &[
            "You're hired. Right now. Grab an apron.",
            "This job won't make you rich, but it helps.",
        ],
        (L::CallCenter, S::Boss) => &[
            "We only take people who can talk clearly.",
            "Okay. You can try a shift. Don't scare the customers.",
        ],
        (L::Gambling, S::Dealer) => &[
            "High risk, high reward. Or just loss.",
            "Only bet what you can lose, kid.",
        ],
        (L::Recruiter, S::Recruiter) => &[
            "You want me to represent you? Show me something.",
            "Stats matter. So does how you handle pressure.",
        ],
        (L::Recruiter, S::Interviewer) => &[
            "First we do a small test. Try not to fail too hard.",
            "If you fail, rest and try again tomorrow.",
        ],
        (L::Recruiter, S::Boss) => &[
            "So, you are the candidate. I dislike wasted time.",
            "We will see if your choices fit my taste.",
        ],
        _ => &[],
    }
}

/// Uniformly pick a line, or `None` if the pair has no pool.
pub fn pick(
    rng: &mut dyn RandomSource,
    location: LocationId,
    speaker: Speaker,
) -> Option<&'static str> {
    let lines = pool(location, speaker);
    if lines.is_empty() {
        return None;
    }
    lines.get(rng.below(lines.len() as u32) as usize).copied()
}

/// Show a random line from the pool. Returns false when there is none.
pub fn say_random(state: &mut GameState, location: LocationId, speaker: Speaker) -> bool {
    match pick(state.rng.as_mut(), location, speaker) {
        Some(line) => {
            state.say(speaker, line);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::map::ALL_LOCATIONS;
    use crate::game::rng::ScriptedRng;

    #[test]
    fn pick_uses_rng_index() {
        let mut rng = ScriptedRng::new(vec![2]);
        assert_eq!(
            pick(&mut rng, LocationId::Bar, Speaker::Stranger),
            Some("He likes short, clear answers. No long speeches.")
        );
    }

    #[test]
    fn pick_missing_pool_is_none() {
        let mut rng = ScriptedRng::new(vec![0]);
        assert_eq!(pick(&mut rng, LocationId::Gym, Speaker::Dealer), None);
        assert_eq!(pick(&mut rng, LocationId::Home, Speaker::Narrator), None);
    }

    #[test]
    fn every_location_has_its_ambient_pool() {
        for loc in ALL_LOCATIONS {
            if let Some(speaker) = crate::game::map::location_info(loc).ambient {
                assert!(!pool(loc, speaker).is_empty(), "{:?} has no ambient lines", loc);
            }
        }
    }

    #[test]
    fn narrative_speakers_have_no_pools() {
        for loc in ALL_LOCATIONS {
            for s in [Speaker::Narrator, Speaker::CallCenterBoss, Speaker::BigBoss] {
                assert!(pool(loc, s).is_empty());
            }
        }
    }

    #[test]
    fn say_random_sets_dialogue() {
        let mut s = GameState::new(Box::new(ScriptedRng::new(vec![1])));
        assert!(say_random(&mut s, LocationId::Gambling, Speaker::Dealer));
        let line = s.dialogue.clone().unwrap();
        assert_eq!(line.speaker, Speaker::Dealer);
        assert_eq!(line.text, "Only bet what you can lose, kid.");
        assert!(!say_random(&mut s, LocationId::Conbini, Speaker::Dealer));
        assert_eq!(s.dialogue, Some(line));
    }

    #[test]
    fn speaker_serializes_as_label() {
        let json = serde_json::to_string(&Speaker::CallCenterBoss).unwrap();
        assert_eq!(json, "\"Call Center Boss\"");
    }
}
