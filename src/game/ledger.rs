//! Resource ledger operations: fail-closed spends and gains.

use super::dialogue::Speaker;
use super::state::{GameState, Ledger, Stat};

const TOO_TIRED: &str =
    "You are too tired. Even your eyebags have eyebags. Go home and sleep.";
const NO_MONEY: &str = "You reach for your wallet. The wallet reaches for help.";

impl Ledger {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Energy => self.energy,
            Stat::Charm => self.charm,
            Stat::Knowledge => self.knowledge,
            Stat::Endurance => self.endurance,
            Stat::Money => self.money,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Energy => &mut self.energy,
            Stat::Charm => &mut self.charm,
            Stat::Knowledge => &mut self.knowledge,
            Stat::Endurance => &mut self.endurance,
            Stat::Money => &mut self.money,
        }
    }

    /// Subtract `amount` if there is enough; otherwise leave everything as is.
    pub fn try_spend(&mut self, stat: Stat, amount: u32) -> bool {
        let slot = self.slot(stat);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    pub fn add(&mut self, stat: Stat, amount: u32) {
        let slot = self.slot(stat);
        *slot = slot.saturating_add(amount);
    }
}

/// Spend energy, or explain why not. Returns false without mutating on failure.
pub fn spend_energy(state: &mut GameState, cost: u32) -> bool {
    if !state.ledger.try_spend(Stat::Energy, cost) {
        state.say(Speaker::Narrator, TOO_TIRED);
        return false;
    }
    state.notify(Stat::Energy, -(cost as i64));
    true
}

/// Spend money, or explain why not. Returns false without mutating on failure.
pub fn spend_money(state: &mut GameState, amount: u32) -> bool {
    if !state.ledger.try_spend(Stat::Money, amount) {
        state.say(Speaker::Narrator, NO_MONEY);
        return false;
    }
    state.notify(Stat::Money, -(amount as i64));
    true
}

pub fn gain(state: &mut GameState, stat: Stat, amount: u32) {
    state.ledger.add(stat, amount);
    state.notify(stat, amount as i64);
}

/// Check energy then money, and only commit both once both hold.
pub fn pay(state: &mut GameState, energy: u32, money: u32) -> bool {
    if state.ledger.energy < energy {
        state.say(Speaker::Narrator, TOO_TIRED);
        return false;
    }
    if state.ledger.money < money {
        state.say(Speaker::Narrator, NO_MONEY);
        return false;
    }
    spend_energy(state, energy) && spend_money(state, money)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::game::rng::ScriptedRng;
    use proptest::prelude::*;

    fn arb_stat() -> impl Strategy<Value = Stat> {
        prop_oneof![
            Just(Stat::Energy),
            Just(Stat::Charm),
            Just(Stat::Knowledge),
            Just(Stat::Endurance),
            Just(Stat::Money),
        ]
    }

    proptest! {
        #[test]
        fn prop_failed_spend_leaves_ledger_unchanged(
            stat in arb_stat(),
            have in 0u32..10_000,
            extra in 1u32..10_000,
        ) {
            let mut ledger = Ledger::new();
            *ledger.slot(stat) = have;
            let before = ledger;
            prop_assert!(!ledger.try_spend(stat, have + extra));
            prop_assert_eq!(ledger, before);
        }

        #[test]
        fn prop_successful_spend_subtracts_exactly(
            stat in arb_stat(),
            have in 0u32..10_000,
            cost in 0u32..10_000,
        ) {
            prop_assume!(cost <= have);
            let mut ledger = Ledger::new();
            *ledger.slot(stat) = have;
            prop_assert!(ledger.try_spend(stat, cost));
            prop_assert_eq!(ledger.get(stat), have - cost);
        }

        #[test]
        fn prop_pay_failure_is_byte_identical(
            energy in 0u32..=100,
            money in 0u32..10_000,
            cost_e in 0u32..=100,
            cost_m in 0u32..10_000,
        ) {
            let mut s = GameState::new(Box::new(ScriptedRng::new(vec![0])));
            s.ledger.energy = energy;
            s.ledger.money = money;
            let before = s.ledger();
            let ok = pay(&mut s, cost_e, cost_m);
            prop_assert_eq!(ok, energy >= cost_e && money >= cost_m);
            if !ok {
                prop_assert_eq!(s.ledger(), before);
            }
        }
    }
}
