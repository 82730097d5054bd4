//! Stack values.
//!
//! A stack is the ordered pile of tokens on one cell, bottom first. It is
//! immutable: moving a stack builds a new, merged one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Color;

/// Tokens on one cell, bottom to top. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Stack {
    colors: SmallVec<[Color; 4]>,
}

impl Stack {
    /// A single freshly placed token.
    #[must_use]
    pub fn new(color: Color) -> Self {
        let mut colors = SmallVec::new();
        colors.push(color);
        Self { colors }
    }

    /// Rebuild a stack from its colors, bottom first.
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self {
                colors: SmallVec::from_slice(colors),
            })
        }
    }

    /// Stack formed by moving `mover` on top of `destination`.
    ///
    /// Destination tokens stay at the bottom, so the mover's top token
    /// decides the owner.
    ///
    /// ```
    /// use rust_stacks::board::Stack;
    /// use rust_stacks::core::Color;
    ///
    /// let below = Stack::new(Color::Red);
    /// let mover = Stack::new(Color::White);
    /// let merged = Stack::merged(&mover, &below);
    ///
    /// assert_eq!(merged.colors(), &[Color::Red, Color::White]);
    /// assert_eq!(merged.owner(), Color::White);
    /// assert!(merged.has_anchor());
    /// ```
    #[must_use]
    pub fn merged(mover: &Stack, destination: &Stack) -> Self {
        let mut colors = SmallVec::with_capacity(destination.height() + mover.height());
        colors.extend_from_slice(&destination.colors);
        colors.extend_from_slice(&mover.colors);
        Self { colors }
    }

    /// Color of the top token.
    #[must_use]
    pub fn owner(&self) -> Color {
        // Constructors never produce an empty stack.
        self.colors[self.colors.len() - 1]
    }

    /// Number of tokens.
    #[must_use]
    pub fn height(&self) -> usize {
        self.colors.len()
    }

    /// True if any token is the anchor color.
    #[must_use]
    pub fn has_anchor(&self) -> bool {
        self.colors.iter().any(|c| c.is_anchor())
    }

    /// Token colors, bottom first.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl TryFrom<Vec<Color>> for Stack {
    type Error = &'static str;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Stack::from_colors(&colors).ok_or("a stack needs at least one token")
    }
}

impl From<Stack> for Vec<Color> {
    fn from(stack: Stack) -> Self {
        stack.colors.into_vec()
    }
}
