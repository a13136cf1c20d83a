use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::player::{Player, PlayerId};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Evaluated strength of a player's best hand.
///
/// `kickers` is ordered for tie-breaks and starts with the ranks that make the
/// category (the pair rank, the trip rank, the straight's top card...).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub kickers: Vec<Rank>,
}

impl HandRank {
    fn new(category: Category, kickers: Vec<Rank>) -> Self {
        Self { category, kickers }
    }

    /// Human readable form, e.g. `One Pair (K; kickers A, 10, 4)`.
    pub fn describe(&self) -> String {
        let join = |rs: &[Rank]| {
            rs.iter()
                .map(|r| r.symbol())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let made = match self.category {
            Category::HighCard | Category::Flush => 0,
            Category::TwoPair | Category::FullHouse => 2,
            _ => 1,
        }
        .min(self.kickers.len());
        let (head, tail) = self.kickers.split_at(made);
        match (head.is_empty(), tail.is_empty()) {
            (true, _) => format!("{} ({})", self.category, join(tail)),
            (false, true) => format!("{} ({})", self.category, join(head)),
            (false, false) => format!(
                "{} ({}; kickers {})",
                self.category,
                join(head),
                join(tail)
            ),
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A tier of players whose hands are exactly equal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRank {
    pub players: Vec<PlayerId>,
    pub hand: HandRank,
}

/// Evaluates two hole cards plus up to five community cards.
pub fn evaluate(hole: &[Card; 2], community: &[Card]) -> HandRank {
    let mut cards = Vec::with_capacity(2 + community.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    evaluate_cards(&cards)
}

/// Evaluates the best hand available in `cards` (5 to 7 cards).
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    let counts = rank_histogram(cards);
    let mut by_suit: [Vec<Card>; 4] = Default::default();
    for &c in cards {
        by_suit[c.suit.index()].push(c);
    }
    let flush = by_suit.iter().find(|bucket| bucket.len() >= 5);

    // Straight flush: the straight must live inside the flush suit
    if let Some(suited) = flush {
        if let Some(high) = straight_high(&rank_histogram(suited)) {
            return HandRank::new(Category::StraightFlush, vec![high]);
        }
    }

    if let Some(quad) = highest_with_count(&counts, |n| n == 4, None) {
        let mut k = vec![quad];
        k.extend(kickers(&counts, &[quad], 1));
        return HandRank::new(Category::FourOfAKind, k);
    }

    let trips = highest_with_count(&counts, |n| n == 3, None);
    if let Some(t) = trips {
        if let Some(pair) = highest_with_count(&counts, |n| n >= 2, Some(t)) {
            return HandRank::new(Category::FullHouse, vec![t, pair]);
        }
    }

    if let Some(suited) = flush {
        let mut ranks: Vec<Rank> = suited.iter().map(|c| c.rank).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.truncate(5);
        return HandRank::new(Category::Flush, ranks);
    }

    if let Some(high) = straight_high(&counts) {
        return HandRank::new(Category::Straight, vec![high]);
    }

    if let Some(t) = trips {
        let mut k = vec![t];
        k.extend(kickers(&counts, &[t], 2));
        return HandRank::new(Category::ThreeOfAKind, k);
    }

    let pairs: Vec<Rank> = (0..13)
        .rev()
        .filter(|&i| counts[i] == 2)
        .map(Rank::from_index)
        .collect();
    if pairs.len() >= 2 {
        let top = [pairs[0], pairs[1]];
        let mut k = top.to_vec();
        k.extend(kickers(&counts, &top, 1));
        return HandRank::new(Category::TwoPair, k);
    }
    if let Some(&p) = pairs.first() {
        let mut k = vec![p];
        k.extend(kickers(&counts, &[p], 3));
        return HandRank::new(Category::OnePair, k);
    }

    HandRank::new(Category::HighCard, kickers(&counts, &[], 5))
}

/// Category first, then kickers element by element.
pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.category.cmp(&b.category).then_with(|| {
        a.kickers
            .iter()
            .zip(b.kickers.iter())
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Groups `players` into tiers of equal hands, strongest tier first.
///
/// Players without hole cards are skipped. Within a tier, players keep the
/// order in which they were supplied.
pub fn rank_players<'a, I>(players: I, community: &[Card]) -> Vec<PlayerRank>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut tiers: Vec<PlayerRank> = Vec::new();
    for player in players {
        let Some(hole) = player.hole_cards() else {
            continue;
        };
        let hand = evaluate(&hole, community);
        insert_into_tiers(&mut tiers, player.id(), hand);
    }
    tiers
}

fn insert_into_tiers(tiers: &mut Vec<PlayerRank>, id: PlayerId, hand: HandRank) {
    for i in 0..tiers.len() {
        match compare_hands(&hand, &tiers[i].hand) {
            Ordering::Greater => {
                tiers.insert(
                    i,
                    PlayerRank {
                        players: vec![id],
                        hand,
                    },
                );
                return;
            }
            Ordering::Equal => {
                tiers[i].players.push(id);
                return;
            }
            Ordering::Less => {}
        }
    }
    tiers.push(PlayerRank {
        players: vec![id],
        hand,
    });
}

fn rank_histogram(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank.index()] += 1;
    }
    counts
}

/// Highest rank whose five-card run is fully occupied. Index 12 (Ace) also
/// closes the wheel through the `(i - 4 + 13) % 13` wrap.
fn straight_high(counts: &[u8; 13]) -> Option<Rank> {
    (3..13)
        .rev()
        .find(|&i| {
            counts[i] > 0
                && counts[i - 1] > 0
                && counts[i - 2] > 0
                && counts[i - 3] > 0
                && counts[(i + 13 - 4) % 13] > 0
        })
        .map(Rank::from_index)
}

fn highest_with_count(
    counts: &[u8; 13],
    pred: impl Fn(u8) -> bool,
    exclude: Option<Rank>,
) -> Option<Rank> {
    (0..13)
        .rev()
        .map(Rank::from_index)
        .find(|&r| Some(r) != exclude && pred(counts[r.index()]))
}

fn kickers(counts: &[u8; 13], exclude: &[Rank], n: usize) -> Vec<Rank> {
    (0..13)
        .rev()
        .map(Rank::from_index)
        .filter(|r| !exclude.contains(r))
        .flat_map(|r| std::iter::repeat_n(r, counts[r.index()] as usize))
        .take(n)
        .collect()
}
