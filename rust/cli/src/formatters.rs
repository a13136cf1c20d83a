//! Terminal rendering for cards, hand summaries and standings.
//!
//! Suits print as ♥ ♦ ♣ ♠ where the terminal can show them and fall back to
//! `h d c s` on legacy Windows consoles.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::format_board;
//!
//! let flop = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Hearts),
//! ];
//! let text = format_board(&flop);
//! assert!(text == "[A♠ T♥]" || text == "[As Th]");
//! ```

use std::fmt::Write as _;

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::logger::{HandRecord, SeatResult};
use holdem_engine::player::PlayerId;

/// Windows consoles only render suit symbols inside modern terminal hosts.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> char {
    if supports_unicode() {
        suit.symbol()
    } else {
        match suit {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

/// Single character ranks, `T` for ten, so cards line up in columns.
pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Ten => "T",
        other => other.symbol(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// `[A♠ K♥ Q♦]`, or `[]` before the flop.
pub fn format_board(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// Multi-line summary of one finished hand.
pub fn format_hand_summary(record: &HandRecord) -> String {
    let name = |id: PlayerId| {
        record
            .final_chips
            .iter()
            .find(|s| s.player_id == id)
            .map_or_else(|| format!("#{id}"), |s| s.name.clone())
    };

    let mut s = String::new();
    let _ = writeln!(s, "Hand {}  pot {}", record.hand_id, record.pot);
    let _ = writeln!(s, "Board: {}", format_board(&record.board));
    for entry in &record.showdown {
        let hole = format_board(&entry.hole);
        let _ = writeln!(s, "  {} shows {} {}", name(entry.player_id), hole, entry.description);
    }
    for payout in &record.payouts {
        let _ = writeln!(s, "  {} wins {}", name(payout.player_id), payout.amount);
    }
    for &id in &record.eliminated {
        let _ = writeln!(s, "  {} is eliminated", name(id));
    }
    s
}

/// Numbered standings, best first.
pub fn format_standings(standings: &[SeatResult]) -> String {
    let width = standings.iter().map(|s| s.name.len()).max().unwrap_or(0);
    standings
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{:>2}. {:<width$}  {}\n", i + 1, s.name, s.chips))
        .collect()
}
