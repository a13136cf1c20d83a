mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::Scripted;
use holdem_engine::betting::{BettingRound, StreetState};
use holdem_engine::decision::{DecisionProvider, DecisionView, Providers};
use holdem_engine::game::Blinds;
use holdem_engine::logger::{ActionKind, Street};
use holdem_engine::player::{Player, PlayerAction, PlayerAction::*};
use holdem_engine::round::RoundState;
use holdem_engine::rules::PossibleAction;

/// Checks or calls, remembering every option list it was shown.
struct Recording(Arc<Mutex<Vec<Vec<PossibleAction>>>>);

#[async_trait]
impl DecisionProvider for Recording {
    fn name(&self) -> &str {
        "recording"
    }

    async fn make_decision(&mut self, view: &DecisionView<'_>) -> PlayerAction {
        self.0
            .lock()
            .unwrap()
            .push(view.possible_actions.clone());
        if view.can_check() { Check } else { Call }
    }
}

fn table(stacks: &[u32], scripts: Vec<Vec<PlayerAction>>) -> (Vec<Player>, Providers) {
    let mut providers = Providers::new();
    let players = stacks
        .iter()
        .zip(scripts)
        .enumerate()
        .map(|(i, (&chips, script))| {
            providers.insert(i, Box::new(Scripted::new("s", script)) as Box<dyn DecisionProvider>);
            Player::new(i, format!("P{i}"), chips)
        })
        .collect();
    (players, providers)
}

#[tokio::test]
async fn checked_around_street_visits_each_seat_once() {
    let (mut players, mut providers) = table(
        &[100, 100, 100, 100],
        vec![vec![Check], vec![Check], vec![Check], vec![Check]],
    );
    let mut round = RoundState::new(Blinds::new(5, 10));
    let mut street = BettingRound::new(Street::Flop);
    street.run(&mut players, &mut providers, &mut round).await.unwrap();

    assert_eq!(street.state(), StreetState::Closed);
    assert_eq!(street.visits(), 4);
    assert_eq!(round.actions().len(), 4);
}

#[tokio::test]
async fn re_raises_are_answered_until_bets_match() {
    let (mut players, mut providers) = table(
        &[500, 500, 500],
        vec![vec![Bet(20), Raise(60)], vec![Raise(40), Call], vec![Call, Call]],
    );
    let mut round = RoundState::new(Blinds::new(5, 10));
    let mut street = BettingRound::new(Street::Turn);
    street.run(&mut players, &mut providers, &mut round).await.unwrap();

    // 20, +40 to 60, call 60, +60 to 120, calls
    assert_eq!(round.pot(), 360);
    assert_eq!(round.last_raise_by(), 60);
    assert!(players.iter().all(|p| p.stack() == 380));
    assert_eq!(street.visits(), 6);
}

#[tokio::test]
async fn all_in_raise_reopens_the_action() {
    let (mut players, mut providers) = table(
        &[500, 50, 500],
        vec![vec![Bet(20), Call], vec![AllIn], vec![Call, Call]],
    );
    let mut round = RoundState::new(Blinds::new(5, 10));
    BettingRound::new(Street::Flop)
        .run(&mut players, &mut providers, &mut round)
        .await
        .unwrap();

    assert!(players[1].is_all_in());
    assert_eq!(round.pot(), 150);
    assert_eq!(players[0].total_bet(), 50);
    assert_eq!(players[2].total_bet(), 50);
}

#[tokio::test]
async fn oversized_bet_is_clamped_to_all_in() {
    let (mut players, mut providers) =
        table(&[80, 300], vec![vec![Bet(5000)], vec![Call]]);
    let mut round = RoundState::new(Blinds::new(5, 10));
    BettingRound::new(Street::River)
        .run(&mut players, &mut providers, &mut round)
        .await
        .unwrap();

    assert_eq!(round.actions()[0].kind, ActionKind::AllIn);
    assert_eq!(round.pot(), 160);
    assert_eq!(players[1].stack(), 220);
}

#[tokio::test]
async fn providers_are_shown_the_legal_options() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut players = vec![Player::new(0, "A", 100), Player::new(1, "B", 100)];
    let mut providers = Providers::new();
    providers.insert(0, Box::new(Scripted::new("A", vec![Bet(30)])));
    providers.insert(1, Box::new(Recording(seen.clone())));
    let mut round = RoundState::new(Blinds::new(5, 10));
    BettingRound::new(Street::Flop)
        .run(&mut players, &mut providers, &mut round)
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0],
        vec![
            PossibleAction::Fold,
            PossibleAction::Call,
            PossibleAction::Raise { minimal_amount: 30 },
            PossibleAction::AllIn,
        ]
    );
    assert_eq!(players[1].stack(), 70);
}

#[tokio::test]
async fn exhausted_script_folds() {
    let (mut players, mut providers) =
        table(&[100, 100, 100], vec![vec![Bet(10)], vec![], vec![Call]]);
    let mut round = RoundState::new(Blinds::new(5, 10));
    BettingRound::new(Street::Flop)
        .run(&mut players, &mut providers, &mut round)
        .await
        .unwrap();

    assert!(!players[1].is_active());
    assert_eq!(round.pot(), 20);
    assert_eq!(
        round.log(),
        [
            "Player P0 bets 10.",
            "Player P1 folds.",
            "Player P2 calls.",
        ]
    );
}
