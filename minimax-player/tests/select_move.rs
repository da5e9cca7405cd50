//! End-to-end tests of move selection on Othello boards.

use minimax_othello::{OthelloBoard, Player};
use minimax_player::minimax::{backed_up_values, evaluate, terminal_utility, Level};
use minimax_player::successors::generate_successors;
use minimax_player::test_utils::{Scripted, ScriptedBoard};
use minimax_player::{
    best_choice, build_tree, select_move, Choice, MinimaxPlayer, Move, Outlook, PassRule,
    SearchConfig, SearchError, Sides, Strategy,
};

const SMALL_START: &str = "----/-OX-/-XO-/----";
const ENDGAME: &str = "OOXO-X--/XXOOOO-X/XXOXOOX-/XXXOOO-X/O-XOOOXX/OXXXXOOX/OOXXXXOO/OOXXXX-O";

const PASS_RULES: [PassRule; 2] = [PassRule::Terminal, PassRule::Standard];

fn board(text: &str) -> OthelloBoard {
    text.parse().unwrap()
}

fn config(pass_rule: PassRule) -> SearchConfig {
    SearchConfig::default().with_pass_rule(pass_rule)
}

/// Independent negamax search, straight on the board API: the score of the
/// game for `player`, with `player` to move.
fn negamax(board: OthelloBoard, player: Player, pass_rule: PassRule) -> i32 {
    let moves = board.legal_moves(player);
    if moves.len() == 0 {
        if pass_rule == PassRule::Standard && board.has_legal_move(!player) {
            return -negamax(board, !player, pass_rule);
        }
        return i32::from(board.count_score(player)) - i32::from(board.count_score(!player));
    }

    moves
        .map(|loc| {
            let mut next = board;
            next.play_move_unchecked(loc, player);
            -negamax(next, !player, pass_rule)
        })
        .max()
        .unwrap()
}

/// The oracle's best value at the root, where passing is never an option.
fn oracle_root_value(board: OthelloBoard, player: Player, pass_rule: PassRule) -> Option<i32> {
    board
        .legal_moves(player)
        .map(|loc| {
            let mut next = board;
            next.play_move_unchecked(loc, player);
            -negamax(next, !player, pass_rule)
        })
        .max()
}

fn brute_force_moves(board: &OthelloBoard, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for col in 0..board.num_cols() {
        for row in 0..board.num_rows() {
            if board.is_legal_move(col, row, player) {
                moves.push(Move::new(col, row));
            }
        }
    }
    moves
}

#[test]
fn small_start_picks_first_of_equal_moves() {
    // Every opening move on 4x4 loses by 6, so the first one scanned is chosen.
    let choice = select_move(&board(SMALL_START), Player::Black, SearchConfig::default());
    assert_eq!(
        choice,
        Ok(Some(Choice {
            mv: Move::new(0, 1),
            value: -6
        }))
    );

    let choice = select_move(&board(SMALL_START), Player::White, SearchConfig::default());
    assert_eq!(
        choice,
        Ok(Some(Choice {
            mv: Move::new(0, 2),
            value: -6
        }))
    );
}

#[test]
fn small_start_under_standard_passes() {
    let choice = select_move(&board(SMALL_START), Player::Black, config(PassRule::Standard))
        .unwrap()
        .unwrap();
    assert_eq!(choice.mv, Move::new(0, 1));
    assert_eq!(choice.value, -8);
    assert_eq!(choice.outlook(), Outlook::Loss);
}

#[test]
fn pass_rule_changes_the_value() {
    let position = board("XO--OX");

    let terminal = select_move(&position, Player::Black, config(PassRule::Terminal));
    assert_eq!(
        terminal,
        Ok(Some(Choice {
            mv: Move::new(2, 0),
            value: 3
        }))
    );

    let standard = select_move(&position, Player::Black, config(PassRule::Standard));
    assert_eq!(
        standard,
        Ok(Some(Choice {
            mv: Move::new(2, 0),
            value: 6
        }))
    );
}

#[test]
fn standard_opening_has_four_successors() {
    let start = OthelloBoard::default();
    let moves: Vec<Move> = generate_successors(&start, Player::Black)
        .into_iter()
        .map(|successor| successor.mv)
        .collect();
    assert_eq!(moves.len(), 4);
    assert_eq!(moves, brute_force_moves(&start, Player::Black));

    let names: Vec<String> = start
        .legal_moves(Player::Black)
        .map(|loc| loc.to_string())
        .collect();
    for name in ["C4", "D3", "E6", "F5"].iter() {
        assert!(names.iter().any(|n| n == name), "missing {}", name);
    }
}

#[test]
fn endgame_finds_the_only_good_move() {
    let position = board(ENDGAME);
    assert_eq!(position.count_empty(), 8);

    let choice = select_move(&position, Player::Black, SearchConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(
        choice,
        Choice {
            mv: Move::new(6, 7),
            value: -6
        }
    );
    assert_eq!(
        oracle_root_value(position, Player::Black, PassRule::Terminal),
        Some(-6)
    );
}

#[test]
fn selection_is_deterministic() {
    for &text in [SMALL_START, ENDGAME, "XO--OX/------/-OXXO-"].iter() {
        let position = board(text);
        let first = select_move(&position, Player::Black, SearchConfig::default());
        for _ in 0..3 {
            assert_eq!(
                select_move(&position, Player::Black, SearchConfig::default()),
                first
            );
        }
    }
}

#[test]
fn selected_moves_are_legal() {
    for &text in [SMALL_START, ENDGAME, "XO--OX", "XO--OX/------/-OXXO-"].iter() {
        let position = board(text);
        for &player in [Player::Black, Player::White].iter() {
            for &pass_rule in PASS_RULES.iter() {
                if let Some(choice) = select_move(&position, player, config(pass_rule)).unwrap() {
                    assert!(position.is_legal_move(choice.mv.col, choice.mv.row, player));
                }
            }
        }
    }
}

#[test]
fn root_expands_every_legal_move() {
    for &text in [SMALL_START, ENDGAME, "XO--OX/------/-OXXO-"].iter() {
        let position = board(text);
        for &player in [Player::Black, Player::White].iter() {
            let tree = build_tree(&position, player, SearchConfig::default()).unwrap();
            let root_moves: Vec<Move> = tree
                .node(tree.root())
                .children()
                .iter()
                .filter_map(|&child| tree.node(child).played_move())
                .collect();
            assert_eq!(root_moves, brute_force_moves(&position, player));
        }
    }
}

#[test]
fn finished_position_scores_piece_difference() {
    // Neither side can move.
    let position = board("XX--O");
    let sides = Sides {
        max: Player::Black,
        min: Player::White,
    };
    assert_eq!(terminal_utility(&position, sides), 1);

    let tree = build_tree(&position, Player::White, SearchConfig::default()).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(evaluate(&tree, tree.root(), Level::Max), -1);
}

#[test]
fn values_stay_within_the_board() {
    for &pass_rule in PASS_RULES.iter() {
        for &text in [SMALL_START, ENDGAME].iter() {
            let position = board(text);
            let cells = (position.num_cols() * position.num_rows()) as i32;
            let tree = build_tree(&position, Player::Black, config(pass_rule)).unwrap();

            for value in backed_up_values(&tree) {
                assert!(-cells <= value && value <= cells, "{} out of range", value);
            }
        }
    }
}

#[test]
fn sides_alternate_along_every_edge() {
    for &pass_rule in PASS_RULES.iter() {
        let tree = build_tree(&board("XO--OX/------/-OXXO-"), Player::Black, config(pass_rule))
            .unwrap();
        for id in tree.node_ids() {
            let node = tree.node(id);
            for &child in node.children() {
                let child = tree.node(child);
                assert_eq!(child.side_to_move(), !node.side_to_move());
                if child.played_move().is_none() {
                    assert_eq!(pass_rule, PassRule::Standard);
                    assert_eq!(child.board(), node.board());
                }
            }
        }
    }
}

#[test]
fn recursive_and_iterative_values_agree() {
    for &pass_rule in PASS_RULES.iter() {
        let tree = build_tree(&board(ENDGAME), Player::Black, config(pass_rule)).unwrap();
        let values = backed_up_values(&tree);
        assert_eq!(
            values[tree.root().index()],
            evaluate(&tree, tree.root(), Level::Max)
        );
        for &child in tree.node(tree.root()).children() {
            assert_eq!(values[child.index()], evaluate(&tree, child, Level::Min));
        }
    }
}

#[test]
fn matches_negamax_oracle() {
    let positions = [
        SMALL_START,
        ENDGAME,
        "XO--OX",
        "XO--OX/------/-OXXO-",
        "X-OX/-OO-/-XO-/----",
        "----/OOO-/-XO-/-X--",
    ];

    for &text in positions.iter() {
        let position = board(text);
        for &player in [Player::Black, Player::White].iter() {
            for &pass_rule in PASS_RULES.iter() {
                let choice = select_move(&position, player, config(pass_rule)).unwrap();
                let oracle = oracle_root_value(position, player, pass_rule);
                assert_eq!(
                    choice.map(|c| c.value),
                    oracle,
                    "{} {:?} {:?}",
                    text,
                    player,
                    pass_rule
                );

                // The chosen move is the first one achieving the best value.
                if let Some(choice) = choice {
                    let first_best = brute_force_moves(&position, player)
                        .into_iter()
                        .find(|mv| {
                            let mut next = position;
                            next.play_move(mv.col, mv.row, player).unwrap();
                            -negamax(next, !player, pass_rule) == choice.value
                        });
                    assert_eq!(first_best, Some(choice.mv));
                }
            }
        }
    }
}

#[test]
fn no_legal_move_is_reported() {
    let position = board("OXX-");
    assert!(!position.has_legal_move(Player::Black));

    for &pass_rule in PASS_RULES.iter() {
        assert_eq!(
            select_move(&position, Player::Black, config(pass_rule)),
            Ok(None)
        );
    }
}

#[test]
fn degenerate_or_foreign_symbols_are_rejected() {
    let script = Scripted::Branch(vec![(0, Scripted::Leaf(1, 0))]);

    let same = ScriptedBoard::new(script.clone()).with_symbols('A', 'A');
    assert!(matches!(
        select_move(&same, 'A', SearchConfig::default()),
        Err(SearchError::DegenerateSymbols { .. })
    ));

    let foreign = ScriptedBoard::new(script);
    assert!(matches!(
        select_move(&foreign, 'Z', SearchConfig::default()),
        Err(SearchError::SymbolNotInPlay { .. })
    ));
}

#[test]
fn scripted_tie_goes_to_the_first_column() {
    let board = ScriptedBoard::new(Scripted::Branch(vec![
        (2, Scripted::Branch(vec![(0, Scripted::Leaf(4, 4)), (1, Scripted::Leaf(6, 2))])),
        (5, Scripted::Leaf(3, 3)),
        (7, Scripted::Leaf(1, 2)),
    ]));
    let choice = select_move(&board, 'A', SearchConfig::default()).unwrap().unwrap();
    assert_eq!(choice.mv, Move::new(2, 0));
    assert_eq!(choice.value, 0);
    assert_eq!(choice.outlook(), Outlook::Draw);
}

#[test]
fn minimax_players_finish_a_game() {
    let rules = config(PassRule::Standard);
    let mut black = MinimaxPlayer::new(Player::Black).with_config(rules);
    let mut white = MinimaxPlayer::new(Player::White).with_config(rules);

    let mut position = board(SMALL_START);
    let mut to_move = Player::Black;
    let mut passes = 0;
    while passes < 2 {
        let player: &mut dyn Strategy<OthelloBoard> = match to_move {
            Player::Black => &mut black,
            Player::White => &mut white,
        };
        assert_eq!(player.symbol(), to_move);

        match player.choose_move(&position).unwrap() {
            Some(mv) => {
                position.play_move(mv.col, mv.row, to_move).unwrap();
                passes = 0;
            }
            None => passes += 1,
        }
        to_move = !to_move;
    }

    assert!(position.is_finished());
    let score = i32::from(position.count_score(Player::Black))
        - i32::from(position.count_score(Player::White));
    // Perfect play from the 4x4 start.
    assert_eq!(score, -8);
}

#[test]
fn one_tree_serves_rendering_and_selection() {
    for &pass_rule in PASS_RULES.iter() {
        let position = board("XO--OX/------/-OXXO-");
        let player = MinimaxPlayer::new(Player::Black).with_config(config(pass_rule));
        let tree = player.build_tree(&position).unwrap();

        let mut out = Vec::new();
        tree.render_dot(&mut out).unwrap();
        assert!(!out.is_empty());

        assert_eq!(Ok(best_choice(&tree)), player.select_move(&position));
    }
}
