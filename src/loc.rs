//! Location registry
//!
//! Symbolic locations used to address panel sides, title slots and guides.
//! Every location parses from its canonical name and from the usual short aliases
//! (`"ul"`, `"upper_left"`, `"r"`, ...). Names are case insensitive and `_`/`-`
//! are read as spaces.
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::share::Axis;

fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A side of a main axes, where panels are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Left side
    Left,
    /// Right side
    Right,
    /// Bottom side
    Bottom,
    /// Top side
    Top,
}

impl Side {
    /// All sides, in storage order
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    pub(crate) const fn index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Top => 3,
        }
    }

    /// The canonical name of the side
    pub const fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Top => "top",
        }
    }

    /// The axis running along the panels stacked on this side.
    /// Bottom and top panels span the X axis of their parent, left and right panels the Y axis.
    pub const fn long_axis(&self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::Y,
            Side::Bottom | Side::Top => Axis::X,
        }
    }

    /// The axis across the thickness of the panels stacked on this side
    pub const fn short_axis(&self) -> Axis {
        self.long_axis().other()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            "bottom" | "b" => Ok(Side::Bottom),
            "top" | "t" => Ok(Side::Top),
            _ => Err(Error::InvalidSide(s.to_string())),
        }
    }
}

/// Horizontal alignment of a text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    /// Anchor on the left of the text
    Left,
    /// Anchor in the center of the text
    Center,
    /// Anchor on the right of the text
    Right,
}

/// Vertical alignment of a text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    /// Anchor at the top of the text
    Top,
    /// Anchor at the baseline of the text
    Baseline,
    /// Anchor at the bottom of the text
    Bottom,
}

/// A named title slot.
///
/// Each axes owns exactly one slot per location.
/// `Left`, `Center` and `Right` are the outer slots, above the axes.
/// The `Upper*` and `Lower*` slots are inside the axes.
/// `Abc` holds the a-b-c label, which is placed at one of the other locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleLoc {
    /// The a-b-c label
    Abc,
    /// Outer left title
    Left,
    /// Outer center title
    Center,
    /// Outer right title
    Right,
    /// Inner upper left title
    UpperLeft,
    /// Inner upper center title
    UpperCenter,
    /// Inner upper right title
    UpperRight,
    /// Inner lower left title
    LowerLeft,
    /// Inner lower center title
    LowerCenter,
    /// Inner lower right title
    LowerRight,
}

impl TitleLoc {
    /// All the slots, in storage order
    pub const ALL: [TitleLoc; 10] = [
        TitleLoc::Abc,
        TitleLoc::Left,
        TitleLoc::Center,
        TitleLoc::Right,
        TitleLoc::UpperLeft,
        TitleLoc::UpperCenter,
        TitleLoc::UpperRight,
        TitleLoc::LowerLeft,
        TitleLoc::LowerCenter,
        TitleLoc::LowerRight,
    ];

    /// The slots placed above the axes
    pub const OUTER: [TitleLoc; 3] = [TitleLoc::Left, TitleLoc::Center, TitleLoc::Right];

    pub(crate) const fn index(&self) -> usize {
        match self {
            TitleLoc::Abc => 0,
            TitleLoc::Left => 1,
            TitleLoc::Center => 2,
            TitleLoc::Right => 3,
            TitleLoc::UpperLeft => 4,
            TitleLoc::UpperCenter => 5,
            TitleLoc::UpperRight => 6,
            TitleLoc::LowerLeft => 7,
            TitleLoc::LowerCenter => 8,
            TitleLoc::LowerRight => 9,
        }
    }

    /// The canonical name of the slot
    pub const fn as_str(&self) -> &'static str {
        match self {
            TitleLoc::Abc => "abc",
            TitleLoc::Left => "left",
            TitleLoc::Center => "center",
            TitleLoc::Right => "right",
            TitleLoc::UpperLeft => "upper left",
            TitleLoc::UpperCenter => "upper center",
            TitleLoc::UpperRight => "upper right",
            TitleLoc::LowerLeft => "lower left",
            TitleLoc::LowerCenter => "lower center",
            TitleLoc::LowerRight => "lower right",
        }
    }

    /// Whether the slot is one of the outer slots, above the axes
    pub const fn is_outer(&self) -> bool {
        matches!(self, TitleLoc::Left | TitleLoc::Center | TitleLoc::Right)
    }

    /// Whether the slot is inside the axes
    pub const fn is_inner(&self) -> bool {
        !self.is_outer() && !matches!(self, TitleLoc::Abc)
    }

    /// Horizontal alignment of text in this slot
    pub const fn ha(&self) -> HAlign {
        match self {
            TitleLoc::Left | TitleLoc::UpperLeft | TitleLoc::LowerLeft => HAlign::Left,
            TitleLoc::Right | TitleLoc::UpperRight | TitleLoc::LowerRight => HAlign::Right,
            _ => HAlign::Center,
        }
    }

    /// Vertical alignment of text in this slot
    pub const fn va(&self) -> VAlign {
        match self {
            TitleLoc::UpperLeft | TitleLoc::UpperCenter | TitleLoc::UpperRight => VAlign::Top,
            TitleLoc::LowerLeft | TitleLoc::LowerCenter | TitleLoc::LowerRight => {
                VAlign::Bottom
            }
            _ => VAlign::Baseline,
        }
    }
}

impl fmt::Display for TitleLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TitleLoc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "abc" => Ok(TitleLoc::Abc),
            "left" | "l" => Ok(TitleLoc::Left),
            "center" | "centre" | "c" => Ok(TitleLoc::Center),
            "right" | "r" => Ok(TitleLoc::Right),
            "upper left" | "top left" | "ul" | "tl" => Ok(TitleLoc::UpperLeft),
            "upper center" | "top center" | "uc" | "tc" => Ok(TitleLoc::UpperCenter),
            "upper right" | "top right" | "ur" | "tr" => Ok(TitleLoc::UpperRight),
            "lower left" | "bottom left" | "ll" | "bl" => Ok(TitleLoc::LowerLeft),
            "lower center" | "bottom center" | "lc" | "bc" => Ok(TitleLoc::LowerCenter),
            "lower right" | "bottom right" | "lr" | "br" => Ok(TitleLoc::LowerRight),
            _ => Err(Error::UnknownSlot(s.to_string())),
        }
    }
}

/// Location of a legend or a colorbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideLoc {
    /// Outside the axes, in a panel on the given side
    Outer(Side),
    /// Filling the whole panel the guide is drawn into
    Fill,
    /// Inside the axes, where the backend finds the most room
    Best,
    /// Inside the axes, upper right corner
    UpperRight,
    /// Inside the axes, upper left corner
    UpperLeft,
    /// Inside the axes, lower left corner
    LowerLeft,
    /// Inside the axes, lower right corner
    LowerRight,
    /// Inside the axes, center of the left side
    CenterLeft,
    /// Inside the axes, center of the right side
    CenterRight,
    /// Inside the axes, center of the bottom side
    LowerCenter,
    /// Inside the axes, center of the top side
    UpperCenter,
    /// Inside the axes, at its center
    Center,
}

impl GuideLoc {
    /// Translate a numeric legend code (0 to 9) into a location
    pub fn from_code(code: u8) -> Result<Self, Error> {
        let loc = match code {
            0 => GuideLoc::Best,
            1 => GuideLoc::UpperRight,
            2 => GuideLoc::UpperLeft,
            3 => GuideLoc::LowerLeft,
            4 => GuideLoc::LowerRight,
            5 => GuideLoc::CenterLeft,
            6 => GuideLoc::CenterRight,
            7 => GuideLoc::LowerCenter,
            8 => GuideLoc::UpperCenter,
            9 => GuideLoc::Center,
            _ => return Err(Error::UnknownLoc(code.to_string())),
        };
        Ok(loc)
    }

    /// Whether the location is outside the axes
    pub const fn is_outer(&self) -> bool {
        matches!(self, GuideLoc::Outer(_))
    }

    /// The side of an outer location
    pub const fn side(&self) -> Option<Side> {
        match self {
            GuideLoc::Outer(side) => Some(*side),
            _ => None,
        }
    }

    /// Whether the location lies on the upper part of the axes
    pub const fn is_upper(&self) -> bool {
        matches!(
            self,
            GuideLoc::UpperLeft | GuideLoc::UpperCenter | GuideLoc::UpperRight
        )
    }

    /// Whether the location lies on the lower part of the axes
    pub const fn is_lower(&self) -> bool {
        matches!(
            self,
            GuideLoc::LowerLeft | GuideLoc::LowerCenter | GuideLoc::LowerRight
        )
    }

    /// The canonical name of the location
    pub const fn as_str(&self) -> &'static str {
        match self {
            GuideLoc::Outer(side) => side.as_str(),
            GuideLoc::Fill => "fill",
            GuideLoc::Best => "best",
            GuideLoc::UpperRight => "upper right",
            GuideLoc::UpperLeft => "upper left",
            GuideLoc::LowerLeft => "lower left",
            GuideLoc::LowerRight => "lower right",
            GuideLoc::CenterLeft => "center left",
            GuideLoc::CenterRight => "center right",
            GuideLoc::LowerCenter => "lower center",
            GuideLoc::UpperCenter => "upper center",
            GuideLoc::Center => "center",
        }
    }
}

impl From<Side> for GuideLoc {
    fn from(side: Side) -> Self {
        GuideLoc::Outer(side)
    }
}

impl fmt::Display for GuideLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuideLoc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        if let Ok(code) = norm.parse::<u8>() {
            return GuideLoc::from_code(code).map_err(|_| Error::UnknownLoc(s.to_string()));
        }
        if let Ok(side) = norm.parse::<Side>() {
            return Ok(GuideLoc::Outer(side));
        }
        match norm.as_str() {
            "fill" => Ok(GuideLoc::Fill),
            "best" | "inset" | "i" => Ok(GuideLoc::Best),
            "upper right" | "ur" => Ok(GuideLoc::UpperRight),
            "upper left" | "ul" => Ok(GuideLoc::UpperLeft),
            "lower left" | "ll" => Ok(GuideLoc::LowerLeft),
            "lower right" | "lr" => Ok(GuideLoc::LowerRight),
            "center left" | "cl" => Ok(GuideLoc::CenterLeft),
            "center right" | "cr" => Ok(GuideLoc::CenterRight),
            "lower center" | "lc" => Ok(GuideLoc::LowerCenter),
            "upper center" | "uc" => Ok(GuideLoc::UpperCenter),
            "center" | "c" => Ok(GuideLoc::Center),
            _ => Err(Error::UnknownLoc(s.to_string())),
        }
    }
}

/// An insertion-ordered map from locations to entries.
///
/// A location holds at most one entry.
/// Inserting at an occupied location retires the previous entry
/// and moves the location at the end of the iteration order.
#[derive(Debug, Clone)]
pub struct LocMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for LocMap<K, V> {
    fn default() -> Self {
        LocMap {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq + Copy, V> LocMap<K, V> {
    /// Build an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied locations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no location is occupied
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the location is occupied
    pub fn contains(&self, key: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// The entry at the location
    pub fn get(&self, key: K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// The mutable entry at the location
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Insert an entry, returning the one it replaces
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let prev = self.remove(key);
        self.entries.push((key, value));
        prev
    }

    /// Remove the entry at the location
    pub fn remove(&mut self, key: K) -> Option<V> {
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Iterate mutably over the entries in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut V)> {
        self.entries.iter_mut().map(|(k, v)| (*k, v))
    }

    /// The occupied locations in insertion order
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}
