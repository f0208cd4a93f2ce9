use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest evolution path accepted from a snapshot.
pub const MAX_CHAIN_DEPTH: u32 = 16;

// =============================================================================
// EvolutionNode
// =============================================================================

/// One species in an evolution tree together with what it evolves into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: String,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    #[must_use]
    pub fn leaf(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            evolves_to: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_evolutions(species: impl Into<String>, evolves_to: Vec<Self>) -> Self {
        Self {
            species: species.into(),
            evolves_to,
        }
    }
}

// =============================================================================
// ChainError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("evolution chain revisits species '{species}'")]
    Cycle { species: String },
    #[error("evolution chain is deeper than {limit} stages")]
    TooDeep { limit: u32 },
}

// =============================================================================
// chain_depth
// =============================================================================

enum Frame<'a> {
    Enter(&'a EvolutionNode, u32),
    Leave,
}

/// Returns the number of evolution steps on the longest path from `root`.
///
/// A lone species has depth 0. The walk keeps an explicit stack, so hostile
/// input cannot exhaust the call stack.
///
/// # Errors
///
/// [`ChainError::Cycle`] when a species appears twice on one path, and
/// [`ChainError::TooDeep`] when a path exceeds [`MAX_CHAIN_DEPTH`].
///
/// # Examples
///
/// ```
/// use dexdle_domain::catalog::{EvolutionNode, chain_depth};
///
/// let chain = EvolutionNode::with_evolutions(
///     "pichu",
///     vec![EvolutionNode::with_evolutions(
///         "pikachu",
///         vec![EvolutionNode::leaf("raichu")],
///     )],
/// );
/// assert_eq!(chain_depth(&chain), Ok(2));
/// ```
pub fn chain_depth(root: &EvolutionNode) -> Result<u32, ChainError> {
    let mut stack = vec![Frame::Enter(root, 0)];
    let mut path: Vec<&str> = Vec::new();
    let mut deepest = 0;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node, depth) => {
                if depth > MAX_CHAIN_DEPTH {
                    return Err(ChainError::TooDeep {
                        limit: MAX_CHAIN_DEPTH,
                    });
                }
                if path.contains(&node.species.as_str()) {
                    return Err(ChainError::Cycle {
                        species: node.species.clone(),
                    });
                }
                path.push(&node.species);
                deepest = deepest.max(depth);
                stack.push(Frame::Leave);
                stack.extend(
                    node.evolves_to
                        .iter()
                        .rev()
                        .map(|child| Frame::Enter(child, depth + 1)),
                );
            }
            Frame::Leave => {
                path.pop();
            }
        }
    }

    Ok(deepest)
}
