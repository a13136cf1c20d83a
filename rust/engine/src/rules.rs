use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::{Player, PlayerAction as A};
use crate::round::RoundState;

/// An option offered to a player at decision time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PossibleAction {
    Fold,
    Check,
    Call,
    Bet { minimal_amount: u32 },
    Raise { minimal_amount: u32 },
    AllIn,
}

impl PossibleAction {
    /// True when `action` is of this option's type (amounts are not checked).
    pub fn matches(&self, action: &A) -> bool {
        matches!(
            (self, action),
            (PossibleAction::Fold, A::Fold)
                | (PossibleAction::Check, A::Check)
                | (PossibleAction::Call, A::Call)
                | (PossibleAction::Bet { .. }, A::Bet(_))
                | (PossibleAction::Raise { .. }, A::Raise(_))
                | (PossibleAction::AllIn, A::AllIn)
        )
    }
}

impl fmt::Display for PossibleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PossibleAction::Fold => f.write_str("fold"),
            PossibleAction::Check => f.write_str("check"),
            PossibleAction::Call => f.write_str("call"),
            PossibleAction::Bet { minimal_amount } => write!(f, "bet {minimal_amount} or more"),
            PossibleAction::Raise { minimal_amount } => {
                write!(f, "raise {minimal_amount} or more")
            }
            PossibleAction::AllIn => f.write_str("all-in"),
        }
    }
}

/// The chip movement an accepted action turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    /// Raise by `increment` over the table bet, paying `chips` in total
    Raise { increment: u32, chips: u32 },
    AllIn(u32),
}

/// Options for `player` given the table's current bet and last raise size.
///
/// Fold and all-in are always offered. Bet minimums and raise minimums are
/// capped by what the player can actually put in.
pub fn possible_actions(player: &Player, round: &RoundState) -> Vec<PossibleAction> {
    let table = round.current_bet();
    let mut v = vec![PossibleAction::Fold];
    if table == 0 || player.current_bet() == table {
        v.push(PossibleAction::Check);
    }
    if table > player.current_bet() {
        v.push(PossibleAction::Call);
    }
    if table == 0 {
        v.push(PossibleAction::Bet {
            minimal_amount: player.stack().min(round.last_raise_by()),
        });
    }
    let to_call = player.to_call(table);
    if table > 0 && player.stack() > to_call {
        v.push(PossibleAction::Raise {
            minimal_amount: (player.stack() - to_call).min(round.last_raise_by()),
        });
    }
    v.push(PossibleAction::AllIn);
    v
}

/// Validates a decision against the state at the moment it is applied.
///
/// Converts a [`PlayerAction`](crate::player::PlayerAction) into a
/// [`ValidatedAction`]. Requests that need at least the player's whole stack
/// become [`ValidatedAction::AllIn`] instead of failing.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] when the action type is not available
/// (check facing a bet, bet after the street was opened, raise with no bet to
/// raise) or when the amount is zero or under the minimum.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::Blinds;
/// use holdem_engine::player::{Player, PlayerAction};
/// use holdem_engine::round::RoundState;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let round = RoundState::new(Blinds::new(5, 10));
/// let player = Player::new(0, "Alice", 1000);
///
/// assert_eq!(
///     validate_action(&player, &round, &PlayerAction::Bet(50)),
///     Ok(ValidatedAction::Bet(50))
/// );
/// // below the last raise size
/// assert!(validate_action(&player, &round, &PlayerAction::Bet(5)).is_err());
/// // more than the stack is clamped to an all-in
/// assert_eq!(
///     validate_action(&player, &round, &PlayerAction::Bet(5000)),
///     Ok(ValidatedAction::AllIn(1000))
/// );
/// ```
pub fn validate_action(
    player: &Player,
    round: &RoundState,
    action: &A,
) -> Result<ValidatedAction, GameError> {
    let table = round.current_bet();
    let stack = player.stack();
    let to_call = player.to_call(table);
    match *action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::AllIn => Ok(ValidatedAction::AllIn(stack)),
        A::Check => {
            if table == 0 || player.current_bet() == table {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::invalid(format!("cannot check facing {to_call}")))
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::invalid("nothing to call"))
            } else if to_call >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if table > 0 {
                return Err(GameError::invalid("cannot bet after the street is opened"));
            }
            let minimum = stack.min(round.last_raise_by());
            if amount == 0 || amount < minimum {
                return Err(GameError::invalid(format!(
                    "bet {amount} below minimum {minimum}"
                )));
            }
            if amount >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::Raise(amount) => {
            if table == 0 {
                return Err(GameError::invalid("no bet to raise"));
            }
            if stack <= to_call {
                return Err(GameError::invalid("not enough chips to raise"));
            }
            let minimum = (stack - to_call).min(round.last_raise_by());
            if amount == 0 || amount < minimum {
                return Err(GameError::invalid(format!(
                    "raise {amount} below minimum {minimum}"
                )));
            }
            let chips = to_call.saturating_add(amount);
            if chips >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise { increment: amount, chips })
            }
        }
    }
}
