//! Ship definitions and damage tracking.

use core::fmt;

/// Direction a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    /// Unit step along the orientation's axis.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship and the damage it has taken. Which cells it covers is the board's
/// business; the ship only counts hits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hits: usize,
}

impl Ship {
    /// Fresh, undamaged ship of the given type.
    pub const fn new(ship_type: ShipType) -> Self {
        Self { ship_type, hits: 0 }
    }

    /// Unnamed ship of `length` segments.
    pub const fn with_length(length: usize) -> Self {
        Self::new(ShipType::new("Ship", length))
    }

    /// Register one hit. Once sunk, further hits are ignored.
    pub fn hit(&mut self) {
        if !self.is_sunk() {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    /// Hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }
}

impl From<ShipType> for Ship {
    fn from(ship_type: ShipType) -> Self {
        Ship::new(ship_type)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, hits: {} }}",
            self.ship_type.name(),
            self.ship_type.length(),
            self.hits,
        )
    }
}
