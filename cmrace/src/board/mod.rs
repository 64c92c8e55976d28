pub mod ser;

use smallvec::SmallVec;
use thiserror::Error;

use crate::dims::Dims;

/// Neighbor offsets in the fixed expansion order: up, down, left, right.
///
/// Every traversal and validity check iterates neighbors in this order, which
/// is what makes repeated runs on the same board deterministic.
pub const NEIGHBOR_OFFSETS: [Dims; 4] = [Dims(0, -1), Dims(0, 1), Dims(-1, 0), Dims(1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    Start,
    Exit,
}

impl Tile {
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '0' => Some(Tile::Open),
            '1' => Some(Tile::Wall),
            'e' => Some(Tile::Start),
            'x' => Some(Tile::Exit),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Open => '0',
            Tile::Wall => '1',
            Tile::Start => 'e',
            Tile::Exit => 'x',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    #[error("board has no start tile")]
    MissingStart,
    #[error("board has no exit tile")]
    MissingExit,
    #[error("board has more than one start tile")]
    DuplicateStart,
    #[error("board has more than one exit tile")]
    DuplicateExit,
}

/// Square grid of tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    size: i32,
}

impl Board {
    pub fn new_filled(size: i32, tile: Tile) -> Self {
        assert!(size >= 3, "board size must be at least 3");

        Board {
            tiles: vec![tile; (size * size) as usize],
            size,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        pos.all_non_negative() && pos.0 < self.size && pos.1 < self.size
    }

    pub fn get(&self, pos: Dims) -> Option<Tile> {
        if self.is_in_bounds(pos) {
            Some(self.tiles[self.index(pos)])
        } else {
            None
        }
    }

    /// Panics when `pos` is out of bounds, that is a bug in the caller.
    pub fn set(&mut self, pos: Dims, tile: Tile) {
        assert!(self.is_in_bounds(pos), "tile write out of bounds: {pos:?}");
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    /// In-bounds orthogonal neighbors of `pos`, in the fixed up, down, left,
    /// right order.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(|off| pos + off)
            .filter(|&n| self.is_in_bounds(n))
            .collect()
    }

    pub fn has_open_neighbor(&self, pos: Dims) -> bool {
        self.neighbors(pos)
            .into_iter()
            .any(|n| self.tiles[self.index(n)] == Tile::Open)
    }

    /// Finds the two distinguished tiles, validating that there is exactly one
    /// of each. Generator output always satisfies this, loaded boards may not.
    pub fn locate(&self) -> Result<(Dims, Dims), LocateError> {
        let mut start = None;
        let mut exit = None;

        for pos in Dims::iter_fill(Dims::ZERO, Dims(self.size, self.size)) {
            match self.tiles[self.index(pos)] {
                Tile::Start if start.is_some() => return Err(LocateError::DuplicateStart),
                Tile::Start => start = Some(pos),
                Tile::Exit if exit.is_some() => return Err(LocateError::DuplicateExit),
                Tile::Exit => exit = Some(pos),
                _ => {}
            }
        }

        match (start, exit) {
            (Some(start), Some(exit)) => Ok((start, exit)),
            (None, _) => Err(LocateError::MissingStart),
            (_, None) => Err(LocateError::MissingExit),
        }
    }

    fn index(&self, pos: Dims) -> usize {
        (pos.1 * self.size + pos.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let b = Board::new_filled(5, Tile::Open);
        assert_eq!(
            b.neighbors(Dims(2, 2)).as_slice(),
            [Dims(2, 1), Dims(2, 3), Dims(1, 2), Dims(3, 2)]
        );
    }

    #[test]
    fn neighbors_clipped_at_border() {
        let b = Board::new_filled(3, Tile::Open);
        assert_eq!(b.neighbors(Dims(0, 0)).as_slice(), [Dims(0, 1), Dims(1, 0)]);
    }

    #[test]
    fn locate_finds_both_markers() {
        let b = board("3\n1e1\n101\n1x1\n");
        assert_eq!(b.locate(), Ok((Dims(1, 0), Dims(1, 2))));
    }

    #[test]
    fn locate_rejects_missing_and_duplicate_markers() {
        assert_eq!(
            board("3\n101\n101\n1x1\n").locate(),
            Err(LocateError::MissingStart)
        );
        assert_eq!(
            board("3\n1e1\n101\n101\n").locate(),
            Err(LocateError::MissingExit)
        );
        assert_eq!(
            board("3\n1e1\n1e1\n1x1\n").locate(),
            Err(LocateError::DuplicateStart)
        );
        assert_eq!(
            board("3\n1e1\n1x1\n1x1\n").locate(),
            Err(LocateError::DuplicateExit)
        );
    }

    #[test]
    fn has_open_neighbor_ignores_walls_and_markers() {
        let b = board("3\n1e1\n101\n1x1\n");
        assert!(b.has_open_neighbor(Dims(1, 0)));
        assert!(!b.has_open_neighbor(Dims(0, 0)));
    }
}
