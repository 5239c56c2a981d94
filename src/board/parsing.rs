use std::str::FromStr;

use bit_set::BitSet;

use super::{Board, BoardError};

/// Parses the bracketed row-major form `[[v00,v01,...],[v10,...],...]`.
///
/// Grounded in `original_source/src/Board.cpp::__parse`: a single forward
/// scan tracking bracket depth, with every rejection reported as a
/// `Malformed` error carrying the byte position that triggered it (the
/// original emits a caret at this position; the front end is responsible
/// for rendering that, this parser only reports where).
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let mut pos = 0usize;

        let expect = |pos: &mut usize, ch: u8| -> Result<(), BoardError> {
            if bytes.get(*pos) == Some(&ch) {
                *pos += 1;
                Ok(())
            } else {
                Err(BoardError::Malformed {
                    detail: format!("expected '{}'", ch as char),
                    position: *pos,
                })
            }
        };

        expect(&mut pos, b'[')?;

        let mut rows: Vec<Vec<u32>> = Vec::new();
        loop {
            expect(&mut pos, b'[')?;
            let mut row = Vec::new();
            loop {
                let start = pos;
                while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                    pos += 1;
                }
                if pos == start {
                    return Err(BoardError::Malformed {
                        detail: "expected an integer token".to_string(),
                        position: pos,
                    });
                }
                let token = std::str::from_utf8(&bytes[start..pos]).unwrap();
                let value: u32 = token.parse().map_err(|_| BoardError::Malformed {
                    detail: format!("value '{token}' out of range"),
                    position: start,
                })?;
                row.push(value);

                match bytes.get(pos) {
                    Some(b',') => {
                        pos += 1;
                    }
                    Some(b']') => {
                        pos += 1;
                        break;
                    }
                    _ => {
                        return Err(BoardError::Malformed {
                            detail: "expected ',' or ']'".to_string(),
                            position: pos,
                        });
                    }
                }
            }
            rows.push(row);

            match bytes.get(pos) {
                Some(b',') => {
                    pos += 1;
                }
                Some(b']') => {
                    pos += 1;
                    break;
                }
                _ => {
                    return Err(BoardError::Malformed {
                        detail: "expected ',' or ']'".to_string(),
                        position: pos,
                    });
                }
            }
        }

        if pos != bytes.len() {
            return Err(BoardError::Malformed {
                detail: "trailing data after closing bracket".to_string(),
                position: pos,
            });
        }

        let height = rows.len() as u32;
        let width = rows.first().map_or(0, Vec::len) as u32;
        if rows.iter().any(|row| row.len() as u32 != width) {
            return Err(BoardError::Malformed {
                detail: "uneven row widths".to_string(),
                position: 0,
            });
        }
        if width < 2 || height < 2 || width * height < 4 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let size = (width * height) as usize;
        let cells: Vec<u32> = rows.into_iter().flatten().collect();

        let mut seen = BitSet::with_capacity(size);
        for &tile in &cells {
            if tile as usize >= size {
                return Err(BoardError::Malformed {
                    detail: format!("tile value {tile} out of range for {size} cells"),
                    position: 0,
                });
            }
            if !seen.insert(tile as usize) {
                return Err(BoardError::Malformed {
                    detail: format!("duplicate tile value {tile}"),
                    position: 0,
                });
            }
        }
        if seen.len() != size {
            return Err(BoardError::Malformed {
                detail: "board is missing one or more tile values".to_string(),
                position: 0,
            });
        }

        Ok(Board::from_cells(width, height, cells.into_boxed_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_goal() {
        let board: Board = "[[1,2,3],[4,5,6],[7,8,0]]".parse().unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.value_at(2, 2), 0);
    }

    #[test]
    fn rejects_too_small_dimensions() {
        let err = "[[1,0]]".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::InvalidDimensions { .. }));
        assert_eq!(err.to_string(), "minimal board dimension is 2x2");
    }

    #[test]
    fn rejects_duplicate_tile() {
        let err = "[[1,1,3],[4,5,6],[7,8,0]]".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::Malformed { .. }));
    }

    #[test]
    fn rejects_missing_tile() {
        let err = "[[1,2,3],[4,5,6],[7,8,8]]".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::Malformed { .. }));
    }

    #[test]
    fn rejects_uneven_rows() {
        let err = "[[1,2,3],[4,5],[7,8,0]]".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::Malformed { .. }));
    }

    #[test]
    fn rejects_unmatched_bracket() {
        let err = "[[1,2,3],[4,5,6],[7,8,0]".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::Malformed { .. }));
    }

    #[test]
    fn round_trips_through_bracketed_string() {
        let board: Board = "[[1,2,3],[4,5,6],[7,8,0]]".parse().unwrap();
        let again: Board = board.to_bracketed_string().parse().unwrap();
        assert_eq!(board, again);
    }
}
