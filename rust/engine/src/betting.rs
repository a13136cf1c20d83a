use tracing::{debug, warn};

use crate::decision::{DecisionView, Providers, SeatView};
use crate::errors::GameError;
use crate::logger::{Action, ActionKind, Street};
use crate::player::{Player, PlayerAction};
use crate::round::RoundState;
use crate::rules::{possible_actions, validate_action, ValidatedAction};

/// Lifecycle of a single betting street.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StreetState {
    NotStarted,
    InProgress,
    Closed,
}

/// Drives one street of betting to completion.
///
/// Seats are polled one at a time in table order, starting at seat 2 before
/// the flop (first after the blinds) and at seat 0 afterwards.
#[derive(Debug)]
pub struct BettingRound {
    street: Street,
    state: StreetState,
    visits: usize,
}

impl BettingRound {
    pub fn new(street: Street) -> Self {
        Self {
            street,
            state: StreetState::NotStarted,
            visits: 0,
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn state(&self) -> StreetState {
        self.state
    }

    /// Decisions requested from providers so far.
    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn first_to_act(&self, seats: usize) -> usize {
        match self.street {
            Street::Preflop => 2 % seats,
            _ => 0,
        }
    }

    /// Runs the street until [`street_closed`] holds, then clears per-street
    /// bets and acted flags.
    pub async fn run(
        &mut self,
        players: &mut [Player],
        providers: &mut Providers,
        round: &mut RoundState,
    ) -> Result<(), GameError> {
        if players.is_empty() {
            return Err(GameError::NoActivePlayers);
        }
        self.state = StreetState::InProgress;
        debug!(street = %self.street, pot = round.pot(), "street opened");

        let n = players.len();
        let mut seat = self.first_to_act(n);
        while !street_closed(players, round) {
            if needs_action(&players[seat], round) {
                self.take_turn(seat, players, providers, round).await?;
            }
            seat = (seat + 1) % n;
        }

        for p in players.iter_mut() {
            p.reset_for_street();
        }
        round.current_bet = 0;
        self.state = StreetState::Closed;
        debug!(street = %self.street, pot = round.pot(), visits = self.visits, "street closed");
        Ok(())
    }

    async fn take_turn(
        &mut self,
        seat: usize,
        players: &mut [Player],
        providers: &mut Providers,
        round: &mut RoundState,
    ) -> Result<(), GameError> {
        self.visits += 1;
        let player_id = players[seat].id();
        let provider = providers
            .get_mut(&player_id)
            .ok_or(GameError::MissingProvider { player_id })?;

        let view = DecisionView {
            round,
            player: &players[seat],
            seats: players.iter().map(SeatView::from).collect(),
            possible_actions: possible_actions(&players[seat], round),
        };
        let decision = provider.make_decision(&view).await;
        let offered = view.possible_actions.iter().any(|o| o.matches(&decision));
        drop(view);

        let validated = if offered {
            validate_action(&players[seat], round, &decision)
        } else {
            Err(GameError::invalid(format!("{decision:?} was not offered")))
        };
        let validated = validated.unwrap_or_else(|e| {
            warn!(player = players[seat].name(), ?decision, error = %e, "forcing fold");
            ValidatedAction::Fold
        });

        let kind = apply(seat, validated, players, round);
        round.record(Action {
            player_id,
            player_name: players[seat].name().to_string(),
            street: self.street,
            kind,
        });
        Ok(())
    }
}

/// Moves the chips for an accepted action and returns what gets recorded.
fn apply(
    seat: usize,
    action: ValidatedAction,
    players: &mut [Player],
    round: &mut RoundState,
) -> ActionKind {
    let table_before = round.current_bet;
    let p = &mut players[seat];
    let kind = match action {
        ValidatedAction::Fold => {
            p.fold();
            ActionKind::Fold
        }
        ValidatedAction::Check => ActionKind::Check,
        ValidatedAction::Call(n) => {
            round.pot += p.commit(n);
            ActionKind::Call
        }
        ValidatedAction::Bet(n) => {
            round.pot += p.commit(n);
            round.current_bet = p.current_bet();
            round.last_raise_by = round.last_raise_by.max(n);
            ActionKind::Bet(n)
        }
        ValidatedAction::Raise { increment, chips } => {
            round.pot += p.commit(chips);
            round.current_bet = p.current_bet();
            round.last_raise_by = round.last_raise_by.max(increment);
            ActionKind::Raise(increment)
        }
        ValidatedAction::AllIn(n) => {
            round.pot += p.commit(n);
            if p.current_bet() > table_before {
                round.last_raise_by = round.last_raise_by.max(p.current_bet() - table_before);
                round.current_bet = p.current_bet();
            }
            ActionKind::AllIn
        }
    };
    // A commit that empties the stack is an all-in whatever was asked for
    let kind = if p.is_all_in() && kind != ActionKind::Fold {
        ActionKind::AllIn
    } else {
        kind
    };
    p.set_acted(true);

    if round.current_bet > table_before {
        for (i, other) in players.iter_mut().enumerate() {
            if i != seat && other.can_act() {
                other.set_acted(false);
            }
        }
    }
    kind
}

/// Whether the seat still owes a decision on this street.
pub fn needs_action(player: &Player, round: &RoundState) -> bool {
    player.can_act() && (!player.has_acted() || player.current_bet() != round.current_bet())
}

/// A street is over once nothing is left to contest or every player who can
/// still bet has acted and matched the table bet.
pub fn street_closed(players: &[Player], round: &RoundState) -> bool {
    if players.iter().filter(|p| p.is_active()).count() <= 1 {
        return true;
    }
    let contenders: Vec<&Player> = players.iter().filter(|p| p.can_act()).collect();
    match contenders.as_slice() {
        [] => true,
        // Everyone else is all-in: only a shortfall is left to settle
        [only] if only.current_bet() >= round.current_bet() => true,
        _ => contenders.iter().all(|p| !needs_action(p, round)),
    }
}

/// Convenience used by tests and tooling: the action a seat would have to
/// take to stay in without raising.
pub fn passive_action(player: &Player, round: &RoundState) -> PlayerAction {
    if player.to_call(round.current_bet()) == 0 {
        PlayerAction::Check
    } else {
        PlayerAction::Call
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::*;
    use crate::decision::DecisionProvider;
    use crate::game::Blinds;

    struct Script(VecDeque<PlayerAction>);

    #[async_trait]
    impl DecisionProvider for Script {
        fn name(&self) -> &str {
            "script"
        }
        async fn make_decision(&mut self, _view: &DecisionView<'_>) -> PlayerAction {
            self.0.pop_front().unwrap_or(PlayerAction::Fold)
        }
    }

    fn table(stacks: &[u32], scripts: Vec<Vec<PlayerAction>>) -> (Vec<Player>, Providers) {
        let players: Vec<Player> = stacks
            .iter()
            .enumerate()
            .map(|(i, &c)| Player::new(i, format!("P{i}"), c))
            .collect();
        let mut providers = Providers::new();
        for (i, s) in scripts.into_iter().enumerate() {
            providers.insert(i, Box::new(Script(s.into())) as Box<dyn DecisionProvider>);
        }
        (players, providers)
    }

    #[tokio::test]
    async fn all_checks_close_the_street_after_one_lap() {
        use PlayerAction::*;
        let (mut players, mut providers) =
            table(&[100, 100, 100], vec![vec![Check], vec![Check], vec![Check]]);
        let mut round = RoundState::new(Blinds::new(5, 10));
        round.open_street(Street::Flop);
        let mut br = BettingRound::new(Street::Flop);
        assert_eq!(br.state(), StreetState::NotStarted);
        br.run(&mut players, &mut providers, &mut round).await.unwrap();
        assert_eq!(br.state(), StreetState::Closed);
        assert_eq!(br.visits(), 3);
        assert_eq!(round.pot(), 0);
    }

    #[tokio::test]
    async fn raise_reopens_action_for_earlier_seats() {
        use PlayerAction::*;
        let (mut players, mut providers) = table(
            &[100, 100, 100],
            vec![vec![Bet(10), Call], vec![Raise(20)], vec![Call]],
        );
        let mut round = RoundState::new(Blinds::new(5, 10));
        round.open_street(Street::Flop);
        BettingRound::new(Street::Flop)
            .run(&mut players, &mut providers, &mut round)
            .await
            .unwrap();
        assert_eq!(round.pot(), 90);
        assert_eq!(round.last_raise_by(), 20);
        assert_eq!(round.current_bet(), 0);
        assert!(players.iter().all(|p| p.stack() == 70));
        assert!(players.iter().all(|p| p.current_bet() == 0 && !p.has_acted()));
    }

    #[tokio::test]
    async fn illegal_check_is_coerced_to_fold() {
        use PlayerAction::*;
        let (mut players, mut providers) =
            table(&[100, 100], vec![vec![Bet(20)], vec![Check]]);
        let mut round = RoundState::new(Blinds::new(5, 10));
        round.open_street(Street::Flop);
        BettingRound::new(Street::Flop)
            .run(&mut players, &mut providers, &mut round)
            .await
            .unwrap();
        assert!(!players[1].is_active());
        assert_eq!(round.actions().last().map(|a| &a.kind), Some(&ActionKind::Fold));
    }

    #[tokio::test]
    async fn short_call_is_recorded_as_all_in() {
        use PlayerAction::*;
        let (mut players, mut providers) = table(&[100, 40], vec![vec![Bet(60)], vec![Call]]);
        let mut round = RoundState::new(Blinds::new(5, 10));
        round.open_street(Street::Flop);
        BettingRound::new(Street::Flop)
            .run(&mut players, &mut providers, &mut round)
            .await
            .unwrap();
        assert!(players[1].is_all_in());
        assert_eq!(round.pot(), 100);
        assert_eq!(round.actions()[1].kind, ActionKind::AllIn);
    }

    #[tokio::test]
    async fn missing_provider_is_an_error() {
        let (mut players, _) = table(&[100, 100], vec![]);
        let mut providers = Providers::new();
        let mut round = RoundState::new(Blinds::new(5, 10));
        let err = BettingRound::new(Street::Flop)
            .run(&mut players, &mut providers, &mut round)
            .await
            .unwrap_err();
        assert_eq!(err, GameError::MissingProvider { player_id: 0 });
    }

    #[test]
    fn lone_contender_against_all_ins_is_closed_once_matched() {
        let mut players = vec![Player::new(0, "A", 50), Player::new(1, "B", 100)];
        players[0].commit(50);
        let mut round = RoundState::new(Blinds::new(5, 10));
        round.current_bet = 50;
        assert!(!street_closed(&players, &round));
        players[1].commit(50);
        assert!(street_closed(&players, &round));
    }

    #[test]
    fn passive_action_checks_when_nothing_is_owed() {
        let p = Player::new(0, "A", 100);
        let mut round = RoundState::new(Blinds::new(5, 10));
        assert_eq!(passive_action(&p, &round), PlayerAction::Check);
        round.current_bet = 10;
        assert_eq!(passive_action(&p, &round), PlayerAction::Call);
    }
}
