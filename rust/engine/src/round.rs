use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::game::Blinds;
use crate::logger::{Action, Street};

/// Mutable record of one hand: pot, bet levels, board and the action log.
///
/// Owned by the [`Engine`](crate::engine::Engine) and reset when a hand starts.
/// Decision providers only ever see it through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) blinds: Blinds,
    pub(crate) street: Street,
    pub(crate) pot: u32,
    /// Highest street commitment among the players this street
    pub(crate) current_bet: u32,
    /// Size of the last full raise; the minimum for the next one
    pub(crate) last_raise_by: u32,
    pub(crate) community_cards: Vec<Card>,
    pub(crate) actions: Vec<Action>,
    pub(crate) log: Vec<String>,
}

impl RoundState {
    pub fn new(blinds: Blinds) -> Self {
        Self {
            blinds,
            street: Street::Preflop,
            pot: 0,
            current_bet: 0,
            last_raise_by: blinds.big,
            community_cards: Vec::with_capacity(5),
            actions: Vec::new(),
            log: Vec::new(),
        }
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn last_raise_by(&self) -> u32 {
        self.last_raise_by
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub(crate) fn reset(&mut self) {
        *self = RoundState::new(self.blinds);
    }

    pub(crate) fn add_log(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!(street = %self.street, "{}", line);
        self.log.push(line);
    }

    /// Logs the action's description and appends it to the action list.
    pub(crate) fn record(&mut self, action: Action) {
        self.add_log(action.to_string());
        self.actions.push(action);
    }

    pub(crate) fn reveal(&mut self, card: Card) {
        self.community_cards.push(card);
    }

    pub(crate) fn open_street(&mut self, street: Street) {
        self.street = street;
        self.current_bet = 0;
    }

    /// Community cards as `K♥ K♣ 4♠`.
    pub fn board_text(&self) -> String {
        self.community_cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
