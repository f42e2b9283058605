use super::types::{BOARD_SIZE, Board, Mark};

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_SIZE]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(position, _)| position)
        .collect()
}

pub fn is_valid_move(board: &Board, position: usize) -> bool {
    position < BOARD_SIZE && board[position] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

pub fn occupied_count(board: &Board) -> usize {
    board.iter().filter(|&&cell| cell != Mark::Empty).count()
}

/// Parses nine cells written as `X`, `O` or `.`/`_`; whitespace and `|` are skipped.
pub fn parse_board(text: &str) -> Result<Board, String> {
    let mut board = empty_board();
    let mut count = 0;

    for ch in text.chars() {
        let mark = match ch {
            'X' | 'x' => Mark::X,
            'O' | 'o' => Mark::O,
            '.' | '_' => Mark::Empty,
            c if c.is_whitespace() || c == '|' => continue,
            other => return Err(format!("Unexpected board character '{}'", other)),
        };
        if count == BOARD_SIZE {
            return Err(format!("Board has more than {} cells", BOARD_SIZE));
        }
        board[count] = mark;
        count += 1;
    }

    if count != BOARD_SIZE {
        return Err(format!("Board has {} cells, expected {}", count, BOARD_SIZE));
    }
    Ok(board)
}

pub fn render_board(board: &Board) -> String {
    board
        .chunks(3)
        .map(|row| row.iter().map(Mark::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_moves_are_ascending() {
        let board = parse_board("X.O ... .X.").unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 4, 5, 6, 8]);
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_and_out_of_bounds() {
        let board = parse_board("X.. ... ...").unwrap();
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_is_board_full() {
        assert!(!is_board_full(&empty_board()));
        assert!(is_board_full(&parse_board("XOX OXO OXO").unwrap()));
    }

    #[test]
    fn test_parse_board_rejects_wrong_length() {
        assert!(parse_board("XO").is_err());
        assert!(parse_board("XOX OXO OXO X").is_err());
        assert!(parse_board("XOX OXO OX?").is_err());
    }

    #[test]
    fn test_render_board() {
        let board = parse_board("X.O .X. ..O").unwrap();
        assert_eq!(render_board(&board), "X.O\n.X.\n..O");
        assert_eq!(occupied_count(&board), 4);
    }
}
