#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use holdem_engine::betting::passive_action;
use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::decision::{DecisionProvider, DecisionView};
use holdem_engine::deck::Deck;
use holdem_engine::engine::Engine;
use holdem_engine::game::Blinds;
use holdem_engine::logger::HandIds;
use holdem_engine::player::{Player, PlayerAction};

/// Plays back a fixed list of decisions, then folds.
pub struct Scripted {
    name: String,
    queue: VecDeque<PlayerAction>,
}

impl Scripted {
    pub fn new(name: &str, actions: Vec<PlayerAction>) -> Self {
        Self {
            name: name.to_string(),
            queue: actions.into(),
        }
    }
}

#[async_trait]
impl DecisionProvider for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    async fn make_decision(&mut self, _view: &DecisionView<'_>) -> PlayerAction {
        self.queue.pop_front().unwrap_or(PlayerAction::Fold)
    }
}

/// Checks when it can, calls otherwise. Never folds or raises.
pub struct CallingStation;

#[async_trait]
impl DecisionProvider for CallingStation {
    fn name(&self) -> &str {
        "station"
    }

    async fn make_decision(&mut self, view: &DecisionView<'_>) -> PlayerAction {
        passive_action(view.player, view.round)
    }
}

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

pub fn hole(s: &str) -> [Card; 2] {
    let v = cards(s);
    [v[0], v[1]]
}

pub fn deck(s: &str) -> Deck {
    Deck::from_cards(cards(s))
}

/// A table of scripted players named after their seat ids.
pub fn scripted_table(
    seats: Vec<(&str, u32, Vec<PlayerAction>)>,
    blinds: Blinds,
) -> Engine {
    let seats: Vec<(Player, Box<dyn DecisionProvider>)> = seats
        .into_iter()
        .enumerate()
        .map(|(id, (name, chips, script))| {
            (
                Player::new(id, name, chips),
                Box::new(Scripted::new(name, script)) as Box<dyn DecisionProvider>,
            )
        })
        .collect();
    Engine::new(seats, blinds, 7)
        .expect("valid table")
        .with_hand_ids(HandIds::with_date("20240101"))
}

pub fn stacks(engine: &Engine) -> Vec<(String, u32)> {
    engine
        .players()
        .iter()
        .map(|p| (p.name().to_string(), p.stack()))
        .collect()
}

pub fn chips_of(engine: &Engine, name: &str) -> u32 {
    engine
        .players()
        .iter()
        .find(|p| p.name() == name)
        .map(|p| p.stack())
        .unwrap_or(0)
}
