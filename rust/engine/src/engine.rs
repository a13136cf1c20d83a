use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::betting::BettingRound;
use crate::decision::{DecisionProvider, Providers};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{rotate_and_eliminate, Blinds};
use crate::logger::{timestamp, Action, ActionKind, HandIds, HandRecord, SeatResult, Street};
use crate::player::{Player, PlayerId};
use crate::pot::settle;
use crate::round::RoundState;

/// Runs a table hand after hand: blinds, dealing, the four streets, payouts,
/// then elimination and blind rotation.
///
/// Seat 0 posts the small blind and seat 1 the big blind. After each hand the
/// seats rotate left by one and busted players leave the table.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use holdem_engine::decision::{DecisionProvider, DecisionView};
/// use holdem_engine::engine::Engine;
/// use holdem_engine::game::Blinds;
/// use holdem_engine::player::{Player, PlayerAction};
///
/// struct AlwaysFold;
///
/// #[async_trait]
/// impl DecisionProvider for AlwaysFold {
///     fn name(&self) -> &str {
///         "fold"
///     }
///     async fn make_decision(&mut self, _view: &DecisionView<'_>) -> PlayerAction {
///         PlayerAction::Fold
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let seats: Vec<(Player, Box<dyn DecisionProvider>)> = vec![
///     (Player::new(0, "Alice", 1000), Box::new(AlwaysFold)),
///     (Player::new(1, "Bob", 1000), Box::new(AlwaysFold)),
/// ];
/// let mut engine = Engine::new(seats, Blinds::new(5, 10), 42).unwrap();
/// let record = engine.play_round().await.unwrap();
///
/// // heads-up, the small blind acts first and folds to the big blind
/// assert_eq!(record.pot, 15);
/// assert_eq!(record.payout_for(1), 15);
/// # });
/// ```
pub struct Engine {
    players: Vec<Player>,
    providers: Providers,
    round: RoundState,
    seed: u64,
    rng: ChaCha20Rng,
    hand_ids: HandIds,
    history: Vec<HandRecord>,
    /// Busted players, in the order they left the table
    eliminated: Vec<Player>,
}

impl Engine {
    pub fn new(
        seats: Vec<(Player, Box<dyn DecisionProvider>)>,
        blinds: Blinds,
        seed: u64,
    ) -> Result<Self, GameError> {
        blinds.validate()?;
        if seats.len() < 2 {
            return Err(GameError::NotEnoughPlayers { count: seats.len() });
        }
        let mut seen = HashSet::new();
        let mut players = Vec::with_capacity(seats.len());
        let mut providers = Providers::new();
        for (player, provider) in seats {
            if !seen.insert(player.id()) {
                return Err(GameError::DuplicatePlayer {
                    player_id: player.id(),
                });
            }
            if player.stack() == 0 {
                return Err(GameError::EmptyStack {
                    player_id: player.id(),
                });
            }
            providers.insert(player.id(), provider);
            players.push(player);
        }
        // pot and side-pot sums never exceed the table total
        players
            .iter()
            .try_fold(0u32, |sum, p| sum.checked_add(p.stack()))
            .ok_or(GameError::ChipOverflow)?;
        Ok(Self {
            players,
            providers,
            round: RoundState::new(blinds),
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            hand_ids: HandIds::today(),
            history: Vec::new(),
            eliminated: Vec::new(),
        })
    }

    /// Replaces the hand id sequence, e.g. with a fixed date for replays.
    pub fn with_hand_ids(mut self, ids: HandIds) -> Self {
        self.hand_ids = ids;
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }
    pub fn round(&self) -> &RoundState {
        &self.round
    }
    pub fn blinds(&self) -> Blinds {
        self.round.blinds()
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn history(&self) -> &[HandRecord] {
        &self.history
    }

    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(Player::stack).sum()
    }

    /// True once fewer than two players have chips left.
    pub fn is_finished(&self) -> bool {
        self.players.iter().filter(|p| p.stack() > 0).count() < 2
    }

    /// Seated players by chip count, then the eliminated, last out first.
    pub fn standings(&self) -> Vec<SeatResult> {
        let mut seated: Vec<&Player> = self.players.iter().collect();
        seated.sort_by(|a, b| b.stack().cmp(&a.stack()));
        seated
            .into_iter()
            .chain(self.eliminated.iter().rev())
            .map(seat_result)
            .collect()
    }

    /// Plays one hand with a deck shuffled from the table's seeded RNG.
    pub async fn play_round(&mut self) -> Result<HandRecord, GameError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.play_hand(deck, Some(self.seed)).await
    }

    /// Plays one hand dealing `deck` front to back: two cards to each seat in
    /// turn, then three, one and one to the board.
    pub async fn play_round_with_deck(&mut self, deck: Deck) -> Result<HandRecord, GameError> {
        self.play_hand(deck, None).await
    }

    /// Plays hands until one player holds every chip or `max_hands` is reached.
    /// Returns the number of hands played.
    pub async fn play_tournament(&mut self, max_hands: Option<u32>) -> Result<u32, GameError> {
        let mut played = 0;
        while !self.is_finished() && max_hands.map_or(true, |max| played < max) {
            self.play_round().await?;
            played += 1;
        }
        match self.players.as_slice() {
            [winner] => info!(winner = winner.name(), hands = played, "tournament won"),
            _ => info!(hands = played, remaining = self.players.len(), "hand limit reached"),
        }
        Ok(played)
    }

    async fn play_hand(&mut self, mut deck: Deck, seed: Option<u64>) -> Result<HandRecord, GameError> {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: self.players.len(),
            });
        }
        let hand_id = self.hand_ids.next_id();
        info!(%hand_id, players = self.players.len(), "hand started");

        self.round.reset();
        for p in self.players.iter_mut() {
            p.reset_for_hand();
        }
        self.post_blinds();
        self.deal_hole_cards(&mut deck)?;

        for street in Street::ALL {
            if self.active_count() < 2 {
                break;
            }
            if street != Street::Preflop {
                self.round.open_street(street);
                for _ in 0..street.cards_to_deal() {
                    let card = deck.deal()?;
                    self.round.reveal(card);
                }
                let board = self.round.board_text();
                self.round.add_log(format!("{street}: {board}"));
            }
            BettingRound::new(street)
                .run(&mut self.players, &mut self.providers, &mut self.round)
                .await?;
        }

        let pot = self.round.pot();
        let settlement = settle(&mut self.players, self.round.community_cards(), pot)?;
        for payout in &settlement.payouts {
            let name = self.name_of(payout.player_id);
            self.round
                .add_log(format!("Player {name} wins {}.", payout.amount));
        }
        for entry in &settlement.showdown {
            let name = self.name_of(entry.player_id);
            self.round
                .add_log(format!("Player {name} shows {}", entry.description));
        }
        let final_chips: Vec<SeatResult> = self.players.iter().map(seat_result).collect();

        let busted = rotate_and_eliminate(&mut self.players);
        let eliminated: Vec<PlayerId> = busted.iter().map(Player::id).collect();
        for player in busted {
            self.providers.remove(&player.id());
            self.round
                .add_log(format!("Player {} is eliminated.", player.name()));
            self.eliminated.push(player);
        }

        let record = HandRecord {
            hand_id,
            seed,
            actions: self.round.actions().to_vec(),
            board: self.round.community_cards().to_vec(),
            pot,
            showdown: settlement.showdown,
            payouts: settlement.payouts,
            final_chips,
            eliminated,
            log: self.round.log().to_vec(),
            ts: Some(timestamp()),
        };
        self.history.push(record.clone());
        Ok(record)
    }

    /// Seat 0 posts the small blind, seat 1 the big blind, each capped at the
    /// payer's stack.
    fn post_blinds(&mut self) {
        let blinds = self.round.blinds();
        for (seat, amount) in [(0, blinds.small), (1, blinds.big)] {
            let player = &mut self.players[seat];
            let paid = player.commit(amount);
            self.round.pot += paid;
            let kind = if seat == 0 {
                ActionKind::SmallBlind(paid)
            } else {
                ActionKind::BigBlind(paid)
            };
            let all_in = player.is_all_in();
            let name = player.name().to_string();
            self.round.record(Action {
                player_id: player.id(),
                player_name: name.clone(),
                street: Street::Preflop,
                kind,
            });
            if all_in {
                self.round.add_log(format!("Player {name} is all in."));
            }
        }
        self.round.current_bet = self.players[0]
            .current_bet()
            .max(self.players[1].current_bet());
    }

    fn deal_hole_cards(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        for p in self.players.iter_mut() {
            p.give_card(deck.deal()?)?;
            p.give_card(deck.deal()?)?;
        }
        Ok(())
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    fn name_of(&self, id: PlayerId) -> String {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }
}

fn seat_result(p: &Player) -> SeatResult {
    SeatResult {
        player_id: p.id(),
        name: p.name().to_string(),
        chips: p.stack(),
    }
}
