mod common;

use common::hole;
use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::errors::GameError;
use holdem_engine::player::Player;
use holdem_engine::pot::{create_side_pots, settle};

fn seat(id: usize, committed: u32, cards: &str) -> Player {
    let mut p = Player::new(id, format!("P{id}"), 1000);
    p.commit(committed);
    for c in hole(cards) {
        p.give_card(c).unwrap();
    }
    p
}

#[test]
fn staggered_contributions_nest_eligibility() {
    let players = vec![
        seat(0, 100, "2c 3c"),
        seat(1, 200, "2d 3d"),
        seat(2, 300, "2h 3h"),
        seat(3, 400, "2s 3s"),
    ];
    let pots = create_side_pots(&players);
    let amounts: Vec<u32> = pots.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, [400, 300, 200, 100]);
    assert_eq!(pots[0].players.len(), 4);
    assert_eq!(pots[1].players, [1, 2, 3]);
    assert_eq!(pots[2].players, [2, 3]);
    assert_eq!(pots[3].players, [3]);
}

#[test]
fn every_contributor_is_in_some_pot() {
    let players = vec![
        seat(0, 35, "2c 3c"),
        seat(1, 0, "2d 3d"),
        seat(2, 80, "2h 3h"),
        seat(3, 80, "2s 3s"),
    ];
    let pots = create_side_pots(&players);
    for p in players.iter().filter(|p| p.total_bet() > 0) {
        assert!(pots.iter().any(|pot| pot.players.contains(&p.id())));
    }
    assert!(pots.iter().all(|pot| !pot.players.contains(&1)));
    let total: u32 = pots.iter().map(|p| p.amount).sum();
    assert_eq!(total, 195);
}

#[test]
fn folded_players_fund_pots_they_cannot_win() {
    // folded player holds the best cards
    let mut players = vec![
        seat(0, 100, "As Ah"),
        seat(1, 100, "Kd Kh"),
        seat(2, 100, "7c 2d"),
    ];
    players[0].fold();
    let total = pot(&players);
    let s = settle(&mut players, &board(), total).unwrap();
    assert_eq!(s.payouts.len(), 1);
    assert_eq!(s.payouts[0].player_id, 1);
    assert_eq!(s.payouts[0].amount, 300);
    assert_eq!(s.showdown.len(), 2);
}

#[test]
fn short_all_in_only_wins_the_main_pot() {
    let mut players = vec![
        seat(0, 50, "As Ah"),
        seat(1, 200, "Kd Kh"),
        seat(2, 200, "7c 2d"),
    ];
    let total = pot(&players);
    let s = settle(&mut players, &board(), total).unwrap();
    // kings make a set on this board and take both pots
    assert_eq!(s.payouts.len(), 1);
    assert_eq!(players[1].stack(), 800 + 450);

    let mut players = vec![
        seat(0, 50, "Kd Kh"),
        seat(1, 200, "As Ah"),
        seat(2, 200, "7c 2d"),
    ];
    let total = pot(&players);
    let s = settle(&mut players, &board(), total).unwrap();
    assert_eq!(players[0].stack(), 950 + 150);
    assert_eq!(players[1].stack(), 800 + 300);
    assert_eq!(s.pots.len(), 2);
}

#[test]
fn lone_survivor_takes_the_pot_without_showdown() {
    let mut players = vec![seat(0, 5, "As Ah"), seat(1, 10, "Kd Kh")];
    players[0].fold();
    let total = pot(&players);
    let s = settle(&mut players, &[], total).unwrap();
    assert!(s.showdown.is_empty());
    assert_eq!(players[1].stack(), 990 + 15);
}

#[test]
fn settlement_without_active_players_fails() {
    let mut players = vec![seat(0, 5, "As Ah"), seat(1, 10, "Kd Kh")];
    players.iter_mut().for_each(Player::fold);
    assert_eq!(
        settle(&mut players, &board(), 15).unwrap_err(),
        GameError::NoActivePlayers
    );
}

fn board() -> Vec<Card> {
    parse_cards("Ks 9h 4c 3d Jh").unwrap()
}

fn pot(players: &[Player]) -> u32 {
    players.iter().map(Player::total_bet).sum()
}
