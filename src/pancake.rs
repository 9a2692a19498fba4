//! Pancake stack representation for Revenge of the Pancakes.
//!
//! Index 0 is the top of the stack. `true` means happy side up (`+`).

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Orientation buffer; contest stacks rarely exceed this inline size
pub type Orientations = SmallVec<[bool; 128]>;

/// An immutable stack snapshot reached from the origin by `depth` flips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PancakeStack {
    orientations: Orientations,
    depth: usize,
    flip_order: Vec<usize>,
}

impl PancakeStack {
    /// A fresh stack at depth 0
    pub fn new(orientations: &[bool]) -> Self {
        Self {
            orientations: SmallVec::from_slice(orientations),
            depth: 0,
            flip_order: Vec::new(),
        }
    }

    pub fn orientations(&self) -> &[bool] {
        &self.orientations
    }

    pub fn len(&self) -> usize {
        self.orientations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orientations.is_empty()
    }

    /// Number of flips applied since the origin
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sizes of each flip applied since the origin, oldest first
    pub fn flip_order(&self) -> &[usize] {
        &self.flip_order
    }

    /// Turn over the top `count` pancakes, producing a child one flip deeper.
    ///
    /// Sizes larger than the stack are clamped to the whole stack.
    pub fn flip(&self, count: usize) -> PancakeStack {
        let count = count.min(self.len());
        let mut orientations = self.orientations.clone();

        for pancake in &mut orientations[..count] {
            *pancake = !*pancake;
        }

        let mut flip_order = self.flip_order.clone();
        flip_order.push(count);

        PancakeStack {
            orientations,
            depth: self.depth + 1,
            flip_order,
        }
    }

    /// Count maximal runs of pancakes facing the same way.
    ///
    /// An empty stack has no partitions.
    pub fn partitions(&self) -> usize {
        match self.orientations.first() {
            None => 0,
            Some(_) => {
                1 + self
                    .orientations
                    .windows(2)
                    .filter(|pair| pair[0] != pair[1])
                    .count()
            }
        }
    }

    /// True when every pancake is happy side up
    pub fn is_ready_to_serve(&self) -> bool {
        self.orientations.iter().all(|&up| up)
    }

    /// Deterministic encoding of the orientations, `1` for up and `0` for down.
    ///
    /// Depth and flip history do not take part, so two stacks reached by
    /// different routes share a hash.
    pub fn canonical_hash(&self) -> String {
        self.orientations
            .iter()
            .map(|&up| if up { '1' } else { '0' })
            .collect()
    }
}

/// Error from parsing a `+`/`-` stack description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStackError {
    pub position: usize,
    pub found: char,
}

impl fmt::Display for ParseStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected {:?} at position {}, expected '+' or '-'",
            self.found, self.position
        )
    }
}

impl std::error::Error for ParseStackError {}

impl FromStr for PancakeStack {
    type Err = ParseStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let orientations = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '+' => Ok(true),
                '-' => Ok(false),
                found => Err(ParseStackError { position, found }),
            })
            .collect::<Result<Orientations, _>>()?;

        Ok(PancakeStack {
            orientations,
            depth: 0,
            flip_order: Vec::new(),
        })
    }
}

impl fmt::Display for PancakeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &up in &self.orientations {
            f.write_str(if up { "+" } else { "-" })?;
        }
        Ok(())
    }
}
