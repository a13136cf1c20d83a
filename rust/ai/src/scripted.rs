use std::collections::VecDeque;

use async_trait::async_trait;
use holdem_engine::decision::{DecisionProvider, DecisionView};
use holdem_engine::player::PlayerAction;

/// Replays a fixed queue of decisions and folds once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    name: String,
    queue: VecDeque<PlayerAction>,
}

impl ScriptedPlayer {
    pub fn new(name: impl Into<String>, actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            name: name.into(),
            queue: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: PlayerAction) {
        self.queue.push_back(action);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl DecisionProvider for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn make_decision(&mut self, _view: &DecisionView<'_>) -> PlayerAction {
        self.queue.pop_front().unwrap_or(PlayerAction::Fold)
    }
}
