use super::board::Board;
use super::types::{BOARD_SIZE, Player, Position, WinningLine};

// rows, columns, main diagonal, anti-diagonal
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.mark)
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let rows = board.rows();

    for [a, b, c] in LINES {
        let mark = rows[a.0][a.1];
        let Some(player) = mark.player() else {
            continue;
        };

        if rows[b.0][b.1] == mark && rows[c.0][c.1] == mark {
            return Some(WinningLine::new(player, a.into(), Position::from(c)));
        }
    }

    None
}
