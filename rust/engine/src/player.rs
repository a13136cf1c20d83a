use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

pub type PlayerId = usize;

/// Represents a player decision returned by a decision provider.
/// Actions can involve betting amounts or no-cost moves like check/fold.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting with the specified amount
    Bet(u32),
    /// Raise the current bet by the specified amount
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seated player: chip stack, hole cards and the per-hand betting flags.
///
/// `chips + total_bet()` only changes within a hand through pot payouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    chips: u32,
    hole: [Option<Card>; 2],
    /// Chips committed on the current street
    current_bet: u32,
    /// Chips committed across the whole hand
    total_bet: u32,
    active: bool,
    all_in: bool,
    acted: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: u32) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            hole: [None, None],
            current_bet: 0,
            total_bet: 0,
            active: true,
            all_in: false,
            acted: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.chips
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// Still contesting the pot and able to put more chips in.
    pub fn can_act(&self) -> bool {
        self.active && !self.all_in
    }

    pub fn to_call(&self, table_bet: u32) -> u32 {
        table_bet.saturating_sub(self.current_bet)
    }

    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(GameError::HoleCardsFull {
                player_id: self.id,
            })
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Moves up to `amount` chips from the stack into the pot commitment and
    /// returns what was actually paid. An emptied stack marks the player all-in.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        self.total_bet += paid;
        if self.chips == 0 {
            self.all_in = true;
        }
        paid
    }

    pub fn fold(&mut self) {
        self.active = false;
    }

    pub fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }

    pub(crate) fn reset_for_hand(&mut self) {
        self.clear_cards();
        self.current_bet = 0;
        self.total_bet = 0;
        self.active = self.chips > 0;
        self.all_in = false;
        self.acted = false;
    }

    pub(crate) fn reset_for_street(&mut self) {
        self.current_bet = 0;
        self.acted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn commit_is_clamped_and_marks_all_in() {
        let mut p = Player::new(0, "Alice", 30);
        assert_eq!(p.commit(10), 10);
        assert!(!p.is_all_in());
        assert_eq!(p.commit(50), 20);
        assert_eq!(p.stack(), 0);
        assert_eq!(p.current_bet(), 30);
        assert_eq!(p.total_bet(), 30);
        assert!(p.is_all_in());
    }

    #[test]
    fn third_hole_card_is_rejected() {
        let mut p = Player::new(3, "Bob", 100);
        let c = Card::new(Rank::Ace, Suit::Spades);
        p.give_card(c).unwrap();
        p.give_card(c).unwrap();
        assert_eq!(
            p.give_card(c),
            Err(GameError::HoleCardsFull { player_id: 3 })
        );
    }

    #[test]
    fn street_reset_keeps_hand_total() {
        let mut p = Player::new(0, "Alice", 100);
        p.commit(40);
        p.set_acted(true);
        p.reset_for_street();
        assert_eq!(p.current_bet(), 0);
        assert_eq!(p.total_bet(), 40);
        assert!(!p.has_acted());
        p.reset_for_hand();
        assert_eq!(p.total_bet(), 0);
        assert!(p.is_active());
    }
}
