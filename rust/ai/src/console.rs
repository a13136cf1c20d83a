//! Text prompt player.
//!
//! Renders the table as a one-paragraph question and turns a free-text answer
//! back into an action. The same prompt works for a person at a terminal or
//! any other text-in, text-out responder.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use async_trait::async_trait;
use holdem_engine::decision::{DecisionProvider, DecisionView};
use holdem_engine::player::PlayerAction;
use tracing::warn;

/// Amount used when a bet or raise answer carries no number.
pub const DEFAULT_AMOUNT: u32 = 10;

pub fn build_prompt(view: &DecisionView<'_>) -> String {
    let hand = match view.player.hole_cards() {
        Some([a, b]) => format!("{a} and {b}"),
        None => "not dealt yet".to_string(),
    };
    let board = view.round.community_cards();
    let board = if board.is_empty() {
        "not dealt yet".to_string()
    } else {
        board
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "You are playing Texas Hold'em poker. Your hand is {hand}. \
         The community cards are {board}. The pot is {} chips. \
         It's your turn. Do you {}?",
        view.round.pot(),
        view.describe_options()
    )
}

/// Keyword priority is fold, call, raise, check, bet; then all-in. Anything
/// else folds.
pub fn parse_response(response: &str) -> PlayerAction {
    let text = response.to_lowercase();
    let amount = || extract_amount(response).unwrap_or(DEFAULT_AMOUNT);
    if text.contains("fold") {
        PlayerAction::Fold
    } else if text.contains("call") {
        PlayerAction::Call
    } else if text.contains("raise") {
        PlayerAction::Raise(amount())
    } else if text.contains("check") {
        PlayerAction::Check
    } else if text.contains("bet") {
        PlayerAction::Bet(amount())
    } else if text.contains("all-in") || text.contains("all in") || text.contains("allin") {
        PlayerAction::AllIn
    } else {
        PlayerAction::Fold
    }
}

/// First run of digits in the text; zero counts as missing.
pub fn extract_amount(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok().filter(|&n| n > 0)
}

/// Asks on `output`, reads one line from `input`.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Everything written so far, for writers that keep it.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(io::stdin()), io::stdout())
    }
}

#[async_trait]
impl<R, W> DecisionProvider for ConsolePlayer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn make_decision(&mut self, view: &DecisionView<'_>) -> PlayerAction {
        let prompt = build_prompt(view);
        match self.ask(&prompt) {
            Ok(Some(answer)) => parse_response(&answer),
            Ok(None) => {
                warn!(player = %self.name, "input closed, folding");
                PlayerAction::Fold
            }
            Err(e) => {
                warn!(player = %self.name, error = %e, "failed to read answer, folding");
                PlayerAction::Fold
            }
        }
    }
}
