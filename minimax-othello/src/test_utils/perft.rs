//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{OthelloBoard, Player};

/// Count leaves `depth` plies below `board` with `player` to move.
/// Follows tournament rules: a player without moves passes, and a pass counts as a ply.
pub fn run_perft(board: OthelloBoard, player: Player, depth: u64) -> u64 {
    leaves_below(board, player, depth, false)
}

fn leaves_below(board: OthelloBoard, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(player);
    if all_moves.len() == 0 {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .map(|loc| {
            let mut next = board;
            next.play_move_unchecked(loc, player);
            leaves_below(next, !player, depth - 1, false)
        })
        .sum()
}

#[cfg(test)]
fn standard_perft(depth: u64) -> u64 {
    run_perft(OthelloBoard::default(), Player::Black, depth)
}

#[test]
fn perft_01() {
    assert_eq!(standard_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(standard_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(standard_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(standard_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(standard_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(standard_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(standard_perft(7), 55092);
}

#[test]
fn perft_finished_game() {
    let full: OthelloBoard = "XO/OX".parse().unwrap();
    assert_eq!(run_perft(full, Player::Black, 5), 1);
}
