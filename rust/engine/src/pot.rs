use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{evaluate, rank_players};
use crate::logger::{Payout, ShowdownEntry};
use crate::player::{Player, PlayerId};

/// One contribution tier of the pot and the players eligible to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePot {
    pub amount: u32,
    pub players: Vec<PlayerId>,
}

/// Outcome of paying out a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    pub pots: Vec<SidePot>,
    pub payouts: Vec<Payout>,
    /// Empty when the pot was won without a showdown
    pub showdown: Vec<ShowdownEntry>,
}

/// Splits the hand's contributions into side pots, largest tier first.
///
/// Folded players appear in the tiers they paid into; eligibility to actually
/// win is decided at settlement against the players still active.
pub fn create_side_pots(players: &[Player]) -> Vec<SidePot> {
    let contributions: Vec<(PlayerId, u32)> =
        players.iter().map(|p| (p.id(), p.total_bet())).collect();
    side_pots_from(&contributions)
}

/// Tiering over raw `(player, total contribution)` pairs.
pub fn side_pots_from(contributions: &[(PlayerId, u32)]) -> Vec<SidePot> {
    let mut remaining: Vec<(PlayerId, u32)> = contributions
        .iter()
        .copied()
        .filter(|&(_, c)| c > 0)
        .collect();
    remaining.sort_by_key(|&(_, c)| c);

    let mut pots = Vec::new();
    while let Some(&(_, level)) = remaining.first() {
        pots.push(SidePot {
            amount: level * remaining.len() as u32,
            players: remaining.iter().map(|&(id, _)| id).collect(),
        });
        for entry in remaining.iter_mut() {
            entry.1 -= level;
        }
        remaining.retain(|&(_, c)| c > 0);
    }
    pots
}

/// Pays the pot to the players still in the hand and returns who got what.
///
/// A lone active player takes everything. Otherwise each side pot goes to the
/// strongest active hand among its eligible players; ties split it evenly and
/// any odd chips go to the first winner in seat order.
pub fn settle(players: &mut [Player], board: &[Card], pot: u32) -> Result<Settlement, GameError> {
    let active: Vec<usize> = (0..players.len())
        .filter(|&i| players[i].is_active())
        .collect();

    match active.as_slice() {
        [] => Err(GameError::NoActivePlayers),
        [only] => {
            let winner = &mut players[*only];
            let amount = pot;
            winner.add_chips(amount);
            debug!(player = winner.name(), amount, "uncontested pot");
            Ok(Settlement {
                pots: vec![SidePot {
                    amount,
                    players: vec![winner.id()],
                }],
                payouts: vec![Payout {
                    player_id: winner.id(),
                    amount,
                }],
                showdown: Vec::new(),
            })
        }
        _ => showdown(players, board),
    }
}

fn showdown(players: &mut [Player], board: &[Card]) -> Result<Settlement, GameError> {
    let tiers = rank_players(players.iter().filter(|p| p.is_active()), board);
    let pots = create_side_pots(players);

    let mut won: BTreeMap<PlayerId, u32> = BTreeMap::new();
    for pot in &pots {
        let winners: Vec<PlayerId> = tiers
            .iter()
            .map(|tier| {
                tier.players
                    .iter()
                    .copied()
                    .filter(|id| pot.players.contains(id))
                    .collect::<Vec<_>>()
            })
            .find(|w| !w.is_empty())
            .ok_or(GameError::NoEligibleWinner { pot: pot.amount })?;
        debug!(amount = pot.amount, eligible = ?pot.players, ?winners, "side pot");

        let share = pot.amount / winners.len() as u32;
        let odd = pot.amount % winners.len() as u32;
        for (i, id) in winners.iter().enumerate() {
            let extra = if i == 0 { odd } else { 0 };
            *won.entry(*id).or_default() += share + extra;
        }
    }

    let showdown = players
        .iter()
        .filter(|p| p.is_active())
        .filter_map(|p| {
            let hole = p.hole_cards()?;
            let hand = evaluate(&hole, board);
            Some(ShowdownEntry {
                player_id: p.id(),
                hole,
                description: hand.describe(),
                hand,
            })
        })
        .collect();

    // Seat order, not id order, so the log reads like the table
    let mut payouts = Vec::new();
    for p in players.iter_mut() {
        if let Some(&amount) = won.get(&p.id()) {
            p.add_chips(amount);
            debug!(player = p.name(), amount, "pot share");
            payouts.push(Payout {
                player_id: p.id(),
                amount,
            });
        }
    }

    Ok(Settlement {
        pots,
        payouts,
        showdown,
    })
}
