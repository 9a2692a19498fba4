//! Minimum-flip search over pancake stack states.
//!
//! The search runs in rounds over a frontier of stacks. The default
//! greedy policy only expands the stacks with the fewest partitions and
//! lets each of them produce a single child; the exhaustive policy is a
//! plain breadth-first search over every prefix flip.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::pancake::PancakeStack;
use crate::vlog;

/// How the frontier is expanded each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    /// Partition-pruned, one child per candidate
    #[default]
    Greedy,
    /// Every unvisited child of every candidate
    Exhaustive,
}

/// Configuration for the flip search
#[derive(Debug, Clone)]
pub struct FlipSearchConfig {
    pub policy: SearchPolicy,
    /// Maximum number of flips; `None` means one more than the stack length
    pub max_depth: Option<usize>,
    /// Maximum visited states for the exhaustive policy
    pub max_states: usize,
}

impl Default for FlipSearchConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::Greedy,
            max_depth: None,
            max_states: 1 << 20,
        }
    }
}

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSearchResult {
    /// Flips needed to serve the stack
    pub flips: usize,
    /// Size of each flip, in the order applied
    pub flip_order: Vec<usize>,
    /// Rounds of frontier expansion performed
    pub rounds: usize,
    /// States marked visited during the search
    pub states_visited: usize,
}

impl FlipSearchResult {
    fn from_stack(stack: &PancakeStack, rounds: usize, states_visited: usize) -> Self {
        Self {
            flips: stack.depth(),
            flip_order: stack.flip_order().to_vec(),
            rounds,
            states_visited,
        }
    }
}

/// Minimum number of flips to serve a stack, using the default greedy search
pub fn min_flips(orientations: &[bool]) -> Result<usize, SearchError> {
    let stack = PancakeStack::new(orientations);
    find_optimal_stack(&stack, &FlipSearchConfig::default()).map(|result| result.flips)
}

/// Search from `stack` until a stack with every pancake up is found
pub fn find_optimal_stack(
    stack: &PancakeStack,
    config: &FlipSearchConfig,
) -> Result<FlipSearchResult, SearchError> {
    let max_depth = config.max_depth.unwrap_or(stack.len() + 1);

    match config.policy {
        SearchPolicy::Greedy => greedy_search(stack, max_depth),
        SearchPolicy::Exhaustive => exhaustive_search(stack, max_depth, config.max_states),
    }
}

fn greedy_search(origin: &PancakeStack, max_depth: usize) -> Result<FlipSearchResult, SearchError> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = vec![origin.clone()];
    let mut rounds = 0;

    while !frontier.is_empty() {
        vlog!("evaluating {} stacks", frontier.len());

        if let Some(served) = frontier.iter().find(|s| s.is_ready_to_serve()) {
            vlog!(
                "found best stack, {} flips, order {:?}",
                served.depth(),
                served.flip_order()
            );
            return Ok(FlipSearchResult::from_stack(served, rounds, visited.len()));
        }

        if rounds >= max_depth {
            return Err(SearchError::DepthLimit { limit: max_depth });
        }
        rounds += 1;

        let min_partitions = frontier
            .iter()
            .map(PancakeStack::partitions)
            .min()
            .unwrap_or(0);
        vlog!("minimum partitions is {}", min_partitions);

        let mut next = Vec::new();
        for candidate in frontier.iter().filter(|s| s.partitions() == min_partitions) {
            visited.insert(candidate.canonical_hash());
            if let Some(child) = first_unvisited_child(candidate, &visited) {
                next.push(child);
            }
        }

        frontier = next;
    }

    Err(SearchError::Exhausted { rounds })
}

/// Smallest flip that does not add partitions and leads somewhere new
fn first_unvisited_child(parent: &PancakeStack, visited: &HashSet<String>) -> Option<PancakeStack> {
    let parent_partitions = parent.partitions();

    (1..=parent.len())
        .map(|count| parent.flip(count))
        .filter(|child| child.partitions() <= parent_partitions)
        .find(|child| !visited.contains(&child.canonical_hash()))
}

fn exhaustive_search(
    origin: &PancakeStack,
    max_depth: usize,
    max_states: usize,
) -> Result<FlipSearchResult, SearchError> {
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(origin.canonical_hash());
    let mut frontier = vec![origin.clone()];
    let mut rounds = 0;

    while !frontier.is_empty() {
        vlog!("evaluating {} stacks", frontier.len());

        if let Some(served) = frontier.iter().find(|s| s.is_ready_to_serve()) {
            return Ok(FlipSearchResult::from_stack(served, rounds, visited.len()));
        }

        if rounds >= max_depth {
            return Err(SearchError::DepthLimit { limit: max_depth });
        }
        rounds += 1;

        let mut next = Vec::new();
        for candidate in &frontier {
            for count in 1..=candidate.len() {
                let child = candidate.flip(count);
                if visited.insert(child.canonical_hash()) {
                    if visited.len() > max_states {
                        return Err(SearchError::StateLimit { limit: max_states });
                    }
                    next.push(child);
                }
            }
        }

        frontier = next;
    }

    Err(SearchError::Exhausted { rounds })
}
