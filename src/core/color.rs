//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The two participants. Turn order alternates between them.
//!
//! ## ColorMap
//!
//! Per-color storage with O(1) access, indexable by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A participant in the game.
///
/// Red moves first in a fresh game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// Position in turn order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    /// The color that moves after this one.
    ///
    /// ```
    /// use ludo_engine::Color;
    ///
    /// assert_eq!(Color::Red.next(), Color::Blue);
    /// assert_eq!(Color::Blue.next(), Color::Red);
    /// ```
    #[must_use]
    pub const fn next(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Lowercase name, as used in config files and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// Serializes as a table keyed by color name, which keeps rule files
/// readable:
///
/// ```toml
/// [start_cells]
/// red = 0
/// blue = 26
/// ```
///
/// ## Example
///
/// ```
/// use ludo_engine::{Color, ColorMap};
///
/// let mut score: ColorMap<u32> = ColorMap::with_value(0);
/// score[Color::Blue] += 3;
///
/// assert_eq!(score[Color::Red], 0);
/// assert_eq!(score[Color::Blue], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    red: T,
    blue: T,
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            red: factory(Color::Red),
            blue: factory(Color::Blue),
        }
    }

    /// Create a map from explicit per-color values.
    pub fn from_values(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Red, &self.red), (Color::Blue, &self.blue)].into_iter()
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
