//! Textual board format: a decimal `size` line followed by `size` rows of
//! `size` characters each, drawn from `0` (open), `1` (wall), `e` (start)
//! and `x` (exit).

use std::{fs, io, path::Path};

use thiserror::Error;

use super::{Board, Tile};
use crate::dims::Dims;

#[derive(Debug, Error)]
pub enum ParseBoardError {
    #[error("failed to read board: {0}")]
    Io(#[from] io::Error),
    #[error("invalid size line {0:?}")]
    BadSizeLine(String),
    #[error("board size {0} is too small, must be at least 3")]
    TooSmall(i32),
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: i32, found: i32 },
    #[error("row {row} has {found} tiles, expected {expected}")]
    RowLength { row: i32, expected: i32, found: i32 },
    #[error("unknown tile character {0:?}")]
    UnknownTile(char),
}

impl Board {
    pub fn parse(text: &str) -> Result<Self, ParseBoardError> {
        let mut lines = text.lines();

        let size_line = lines.next().unwrap_or("");
        let size: i32 = size_line
            .trim()
            .parse()
            .map_err(|_| ParseBoardError::BadSizeLine(size_line.to_string()))?;
        if size < 3 {
            return Err(ParseBoardError::TooSmall(size));
        }

        let mut board = Board::new_filled(size, Tile::Open);
        let mut rows = 0;

        for (y, line) in lines.enumerate().take(size as usize) {
            let y = y as i32;

            let found = line.chars().count() as i32;
            if found != size {
                return Err(ParseBoardError::RowLength {
                    row: y,
                    expected: size,
                    found,
                });
            }

            for (x, c) in line.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or(ParseBoardError::UnknownTile(c))?;
                board.set(Dims(x as i32, y), tile);
            }
            rows += 1;
        }

        if rows != size {
            return Err(ParseBoardError::RowCount {
                expected: size,
                found: rows,
            });
        }

        Ok(board)
    }

    pub fn encode(&self) -> String {
        let size = self.size();
        let mut out = format!("{}\n", size);

        for y in 0..size {
            for x in 0..size {
                out.push(self.get(Dims(x, y)).unwrap().to_char());
            }
            out.push('\n');
        }

        out
    }

    pub fn load(path: &Path) -> Result<Self, ParseBoardError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "3\n111\n1e1\n1x1\n";

    #[test]
    fn encode_round_trips() {
        let board = Board::parse(SMALL).unwrap();
        assert_eq!(board.encode(), SMALL);
    }

    #[test]
    fn parse_rejects_bad_size_line() {
        assert!(matches!(
            Board::parse("three\n111\n"),
            Err(ParseBoardError::BadSizeLine(_))
        ));
        assert!(matches!(
            Board::parse("2\n11\n11\n"),
            Err(ParseBoardError::TooSmall(2))
        ));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        assert!(matches!(
            Board::parse("3\n111\n1e1\n"),
            Err(ParseBoardError::RowCount {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Board::parse("3\n111\n1e\n1x1\n"),
            Err(ParseBoardError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        assert!(matches!(
            Board::parse("3\n111\n1#1\n1x1\n"),
            Err(ParseBoardError::UnknownTile('#'))
        ));
    }

    #[test]
    fn longer_rows_are_an_error() {
        // Extra characters past `size` must not be silently dropped.
        let res = Board::parse("3\n1111\n1e1\n1x1\n");
        assert!(res.is_err());
    }
}
