use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Position of a room in the sparse world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCoord {
    pub x: i32,
    pub y: i32,
}

impl RoomCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The grid-adjacent coordinate in `dir`, or `None` if it would leave the `i32` range.
    pub fn neighbor(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.offset();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for RoomCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Errors from parsing a `"x,y"` room key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordError {
    #[error("room key {0:?} is not of the form \"x,y\"")]
    Shape(String),
    #[error("room key {key:?} has a non-integer segment {segment:?}")]
    Segment { key: String, segment: String },
    #[error("room key {0:?} is not written in canonical \"x,y\" form")]
    NonCanonical(String),
}

impl FromStr for RoomCoord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseCoordError::Shape(s.to_string()));
        };
        let parse = |segment: &str| {
            segment.parse::<i32>().map_err(|_| ParseCoordError::Segment {
                key: s.to_string(),
                segment: segment.to_string(),
            })
        };
        let coord = Self::new(parse(x)?, parse(y)?);
        // Only the canonical spelling is a key; "+1,0" or "-0,0" would alias "1,0" / "0,0".
        if coord.to_string() != s {
            return Err(ParseCoordError::NonCanonical(s.to_string()));
        }
        Ok(coord)
    }
}

impl Serialize for RoomCoord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RoomCoord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// One of the four cardinal directions a room can be linked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Grid offset `(dx, dy)`; `y` grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Key used for this direction in a tile's `tileExits` map.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
