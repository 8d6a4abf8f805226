use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tilestitch_common::{Direction, RoomCoord};

use crate::tile::{Exit, Tile};

/// A rectangular room: declared size plus a row-major tile grid (`tiles[y][x]`).
///
/// Before stitching the grid may be missing, short, or ragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tiles: Vec<Vec<Tile>>,
    /// Any other room fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Room {
    /// An empty room of the given size. Its grid is filled by [`Room::pad`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Fill the grid out to `height` rows of `width` tiles with grass.
    ///
    /// Existing tiles are never removed or truncated. Returns the number of
    /// tiles appended; a second call always returns 0.
    pub fn pad(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut added = 0;

        while self.tiles.len() < height {
            self.tiles.push((0..width).map(|_| Tile::grass()).collect());
            added += width;
        }
        for row in &mut self.tiles {
            while row.len() < width {
                row.push(Tile::grass());
                added += 1;
            }
        }
        added
    }

    /// Whether the grid holds exactly `height` rows of exactly `width` tiles.
    pub fn is_padded(&self) -> bool {
        self.tiles.len() == self.height as usize
            && self.tiles.iter().all(|row| row.len() == self.width as usize)
    }

    /// Whether the grid holds rows or tiles beyond the declared size.
    pub fn is_oversized(&self) -> bool {
        self.tiles.len() > self.height as usize
            || self.tiles.iter().any(|row| row.len() > self.width as usize)
    }

    pub fn tile(&self, x: u32, y: u32) -> Option<&Tile> {
        self.tiles.get(y as usize)?.get(x as usize)
    }

    pub fn tile_mut(&mut self, x: u32, y: u32) -> Option<&mut Tile> {
        self.tiles.get_mut(y as usize)?.get_mut(x as usize)
    }

    /// Local coordinates of the border tiles facing `dir`, in increasing order.
    ///
    /// Empty when the room has no width or no height.
    pub fn border(&self, dir: Direction) -> Vec<(u32, u32)> {
        let (w, h) = (self.width, self.height);
        if w == 0 || h == 0 {
            return Vec::new();
        }
        match dir {
            Direction::Right => (0..h).map(|y| (w - 1, y)).collect(),
            Direction::Left => (0..h).map(|y| (0, y)).collect(),
            Direction::Down => (0..w).map(|x| (x, h - 1)).collect(),
            Direction::Up => (0..w).map(|x| (x, 0)).collect(),
        }
    }

    /// Point every border tile facing `dir` at the mirrored entry tile of the
    /// room at `target`, whose declared size is `far_width` x `far_height`.
    ///
    /// Targets are not range-checked against the neighbor's grid. Returns the
    /// number of exits written.
    pub fn link_edge(
        &mut self,
        dir: Direction,
        target: RoomCoord,
        far_width: u32,
        far_height: u32,
    ) -> usize {
        let mut linked = 0;
        for (x, y) in self.border(dir) {
            let exit = match dir {
                Direction::Right => Exit::new(target, 0, y),
                Direction::Left => Exit::new(target, far_width.saturating_sub(1), y),
                Direction::Down => Exit::new(target, x, 0),
                Direction::Up => Exit::new(target, x, far_height.saturating_sub(1)),
            };
            if let Some(tile) = self.tile_mut(x, y) {
                tile.set_exit(dir, exit);
                linked += 1;
            }
        }
        linked
    }
}
