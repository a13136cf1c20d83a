use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::player::{Player, PlayerAction, PlayerId};
use crate::round::RoundState;
use crate::rules::PossibleAction;

/// Public information about one seat, as any player at the table sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub player_id: PlayerId,
    pub name: String,
    pub chips: u32,
    pub current_bet: u32,
    pub total_bet: u32,
    pub active: bool,
    pub all_in: bool,
}

impl From<&Player> for SeatView {
    fn from(p: &Player) -> Self {
        Self {
            player_id: p.id(),
            name: p.name().to_string(),
            chips: p.stack(),
            current_bet: p.current_bet(),
            total_bet: p.total_bet(),
            active: p.is_active(),
            all_in: p.is_all_in(),
        }
    }
}

/// Everything a decision provider is shown when it is asked to act.
#[derive(Debug, Clone)]
pub struct DecisionView<'a> {
    pub round: &'a RoundState,
    /// The acting player, including their own hole cards
    pub player: &'a Player,
    pub seats: Vec<SeatView>,
    pub possible_actions: Vec<PossibleAction>,
}

impl DecisionView<'_> {
    pub fn to_call(&self) -> u32 {
        self.player.to_call(self.round.current_bet())
    }

    pub fn can_check(&self) -> bool {
        self.possible_actions.contains(&PossibleAction::Check)
    }

    pub fn min_bet(&self) -> Option<u32> {
        self.possible_actions.iter().find_map(|a| match a {
            PossibleAction::Bet { minimal_amount } => Some(*minimal_amount),
            _ => None,
        })
    }

    pub fn min_raise(&self) -> Option<u32> {
        self.possible_actions.iter().find_map(|a| match a {
            PossibleAction::Raise { minimal_amount } => Some(*minimal_amount),
            _ => None,
        })
    }

    /// `fold, call, raise 10 or more, all-in`
    pub fn describe_options(&self) -> String {
        self.possible_actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A source of betting decisions: a bot, a console user, a scripted double.
///
/// The engine polls exactly one provider at a time and validates whatever it
/// returns against the live state; anything illegal is treated as a fold.
#[async_trait]
pub trait DecisionProvider: Send {
    fn name(&self) -> &str;

    async fn make_decision(&mut self, view: &DecisionView<'_>) -> PlayerAction;
}

/// Providers keyed by the id of the player they decide for.
pub type Providers = HashMap<PlayerId, Box<dyn DecisionProvider>>;
