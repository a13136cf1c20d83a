//! Baseline rule bot.
//!
//! Deterministic: preflop strength from a starting-hand table, postflop
//! strength from the made hand category, calls weighed against pot odds.

use async_trait::async_trait;
use holdem_engine::cards::Card;
use holdem_engine::decision::{DecisionProvider, DecisionView};
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::logger::Street;
use holdem_engine::player::PlayerAction;
use tracing::debug;

/// Simple baseline bot for filling seats and for tests.
///
/// **Preflop:** premium pairs and big aces raise, playable hands call when it
/// is cheap, the rest check or fold.
///
/// **Postflop:** two pair or better bets and calls, one pair calls small bets,
/// anything weaker checks and folds to pressure.
///
/// It only ever answers with one of the options it was offered.
#[derive(Debug, Clone)]
pub struct BaselineAI {
    name: String,
}

impl BaselineAI {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Preflop strength on a 0-10 scale.
    ///
    /// - 9-10: AA, KK, QQ, JJ, AKs
    /// - 7-8: TT-99, AK, AQ, KQs
    /// - 5-6: 88-77, AJ, suited connectors
    /// - 3-4: small pairs, Ax, broadways
    /// - 0-2: everything else
    pub fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank as u8;
        let r2 = hole[1].rank as u8;
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength on the same scale, from the made hand.
    pub fn postflop_strength(hole: [Card; 2], board: &[Card]) -> u8 {
        let hand = evaluate(&hole, board);
        let base = match hand.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let top_boost = match hand.kickers.first() {
            Some(r) if *r as u8 >= 12 => 1,
            _ => 0,
        };
        (base + top_boost).min(10)
    }

    /// pot / (pot + call); 1.0 when calling is free.
    pub fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn strength(view: &DecisionView<'_>) -> u8 {
        let Some(hole) = view.player.hole_cards() else {
            return 0;
        };
        match view.round.street() {
            Street::Preflop => Self::preflop_strength(hole),
            _ => Self::postflop_strength(hole, view.round.community_cards()),
        }
    }

    /// Picks an action from the offered options.
    pub fn decide(view: &DecisionView<'_>) -> PlayerAction {
        let strength = Self::strength(view);
        let to_call = view.to_call();
        let stack = view.player.stack();
        let pot = view.round.pot();

        let wanted = if to_call == 0 {
            Self::unopened(view, strength, pot, stack)
        } else if to_call >= stack {
            if strength >= 7 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            }
        } else {
            Self::facing_bet(view, strength, to_call, pot, stack)
        };

        if view.possible_actions.iter().any(|o| o.matches(&wanted)) {
            wanted
        } else if view.can_check() {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }

    fn unopened(view: &DecisionView<'_>, strength: u8, pot: u32, stack: u32) -> PlayerAction {
        let share = match strength {
            9..=10 => pot * 2 / 3,
            7..=8 => pot / 2,
            _ => return PlayerAction::Check,
        };
        if let Some(min) = view.min_bet() {
            return PlayerAction::Bet(share.max(min).min(stack));
        }
        // big blind's option: the street is open but nothing is owed
        match view.min_raise() {
            Some(min) => PlayerAction::Raise(share.max(min).min(stack)),
            None => PlayerAction::Check,
        }
    }

    fn facing_bet(
        view: &DecisionView<'_>,
        strength: u8,
        to_call: u32,
        pot: u32,
        stack: u32,
    ) -> PlayerAction {
        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => match view.min_raise() {
                Some(min) if stack >= to_call + min => {
                    PlayerAction::Raise((pot / 2).max(min).min(stack - to_call))
                }
                _ => PlayerAction::Call,
            },
            7..=8 => PlayerAction::Call,
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new("BaselineAI")
    }
}

#[async_trait]
impl DecisionProvider for BaselineAI {
    fn name(&self) -> &str {
        &self.name
    }

    async fn make_decision(&mut self, view: &DecisionView<'_>) -> PlayerAction {
        let action = Self::decide(view);
        debug!(player = %self.name, ?action, "baseline decision");
        action
    }
}
