//! Cross-turn search context
//!
//! One record per agent per game. The harness persists it between turns
//! (as JSON) and hands it back untouched; the agent bumps the round and opens
//! a fresh node-count slot at the start of every turn.

use crate::error::EngineResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    /// Turns taken before the current one
    pub round: u32,
    /// Nodes visited per turn; the last slot belongs to the current turn
    pub node_counts: Vec<u64>,
}

impl Default for SearchContext {
    fn default() -> Self {
        SearchContext {
            round: 0,
            node_counts: vec![0],
        }
    }
}

impl SearchContext {
    /// Context for an agent's first turn
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the next turn: increment the round and start a zeroed slot
    pub fn advance(&mut self) {
        self.round += 1;
        self.node_counts.push(0);
    }

    /// Start a turn on an optional context, creating it on the first call
    pub fn begin_turn(slot: &mut Option<SearchContext>) -> &mut SearchContext {
        match slot.as_mut() {
            Some(context) => context.advance(),
            None => *slot = Some(SearchContext::new()),
        }
        slot.get_or_insert_with(SearchContext::new)
    }

    /// Count one visited node against the current turn
    pub fn record_node(&mut self) {
        if let Some(slot) = self.node_counts.last_mut() {
            *slot += 1;
        }
    }

    /// Nodes visited so far this turn
    pub fn current_nodes(&self) -> u64 {
        self.node_counts.last().copied().unwrap_or(0)
    }

    pub fn total_nodes(&self) -> u64 {
        self.node_counts.iter().sum()
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_turn_initializes() {
        let mut slot = None;
        let context = SearchContext::begin_turn(&mut slot);
        assert_eq!(context.round, 0);
        assert_eq!(context.node_counts, vec![0]);
    }

    #[test]
    fn test_each_turn_adds_one_round_and_one_slot() {
        let mut slot = None;
        for turn in 0..5u32 {
            let context = SearchContext::begin_turn(&mut slot);
            assert_eq!(context.round, turn);
            assert_eq!(context.node_counts.len(), turn as usize + 1);
        }
    }

    #[test]
    fn test_nodes_land_in_current_slot() {
        let mut context = SearchContext::new();
        context.record_node();
        context.record_node();
        context.advance();
        context.record_node();
        assert_eq!(context.node_counts, vec![2, 1]);
        assert_eq!(context.current_nodes(), 1);
        assert_eq!(context.total_nodes(), 3);
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let context = SearchContext {
            round: 3,
            node_counts: vec![10, 250, 0, 7],
        };
        let encoded = context.to_json().unwrap();
        assert_eq!(SearchContext::from_json(&encoded).unwrap(), context);
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(SearchContext::from_json("{\"round\": \"three\"}").is_err());
    }
}
