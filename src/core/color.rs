//! Token colors and per-player storage.
//!
//! ## Color
//!
//! Three token colors exist. `White` and `Black` belong to the two players
//! and take turns; `Red` is the anchor color. Red tokens are only ever
//! placed during the opening of the placement phase, never take a turn, and
//! keep every stack connected to them alive during elimination.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by player color. Indexing with the anchor
//! color panics: it has no per-player data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Color of a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    /// Anchor color.
    Red,
}

impl Color {
    /// The two colors that take turns, in default turn order.
    pub const PLAYERS: [Color; 2] = [Color::White, Color::Black];

    /// The anchor color.
    pub const ANCHOR: Color = Color::Red;

    /// True for the anchor color.
    #[must_use]
    pub const fn is_anchor(self) -> bool {
        matches!(self, Color::Red)
    }

    /// True for the two colors that take turns.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !self.is_anchor()
    }

    /// The other player color.
    ///
    /// The anchor color has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Red => Color::Red,
        }
    }

    /// Slot in a `ColorMap`, `None` for the anchor color.
    #[must_use]
    pub const fn player_index(self) -> Option<usize> {
        match self {
            Color::White => Some(0),
            Color::Black => Some(1),
            Color::Red => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
            Color::Red => "RED",
        };
        f.write_str(name)
    }
}

/// Per-player data indexed by player color.
///
/// ```
/// use rust_stacks::core::{Color, ColorMap};
///
/// let mut scores: ColorMap<u32> = ColorMap::with_value(0);
/// scores[Color::Black] += 3;
///
/// assert_eq!(scores[Color::White], 0);
/// assert_eq!(scores[Color::Black], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Create a map from one value per player color.
    pub fn from_values(white: T, black: T) -> Self {
        Self {
            data: [white, black],
        }
    }

    /// Get a reference to a color's entry.
    ///
    /// # Panics
    ///
    /// Panics if `color` is the anchor color.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[Self::slot(color)]
    }

    /// Get a mutable reference to a color's entry.
    ///
    /// # Panics
    ///
    /// Panics if `color` is the anchor color.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[Self::slot(color)]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::PLAYERS.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::PLAYERS.into_iter().zip(self.data.iter_mut())
    }

    fn slot(color: Color) -> usize {
        match color.player_index() {
            Some(slot) => slot,
            None => panic!("{color} is the anchor color and has no player slot"),
        }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_kinds() {
        assert!(Color::White.is_player());
        assert!(Color::Black.is_player());
        assert!(!Color::Red.is_player());
        assert!(Color::Red.is_anchor());
        assert_eq!(Color::ANCHOR, Color::Red);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::Red.opponent(), Color::Red);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::White), "WHITE");
        assert_eq!(format!("{}", Color::Red), "RED");
    }

    #[test]
    fn test_color_map_new() {
        let map = ColorMap::new(|c| c.player_index().unwrap() * 10);
        assert_eq!(map[Color::White], 0);
        assert_eq!(map[Color::Black], 10);
    }

    #[test]
    fn test_color_map_from_values() {
        let map = ColorMap::from_values("white", "black");
        assert_eq!(map[Color::White], "white");
        assert_eq!(map[Color::Black], "black");
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<i32> = ColorMap::with_default();
        map[Color::White] = 4;
        *map.get_mut(Color::Black) += 2;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Color::White, &4), (Color::Black, &2)]);
    }

    #[test]
    fn test_color_map_serialization() {
        let map: ColorMap<u32> = ColorMap::new(|c| if c == Color::White { 5 } else { 7 });
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "anchor color")]
    fn test_color_map_rejects_anchor() {
        let map: ColorMap<u32> = ColorMap::with_value(0);
        let _ = map[Color::Red];
    }
}
