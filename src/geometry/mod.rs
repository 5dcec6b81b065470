use std::{fmt, hash::{Hash, Hasher}};
use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    squared_euclidean(x1, y1, x2, y2).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// Immutable 2D coordinate
/// Equality and hashing are by value, so positions can key maps
#[derive(Clone, Copy, Debug, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight line distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }

    /// Coordinates as an array, the layout the spatial index expects
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    // -0.0 and 0.0 compare equal so they must hash equal
    fn key(&self) -> (u64, u64) {
        let normalize = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        (normalize(self.x), normalize(self.y))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
