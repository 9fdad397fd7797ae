/// Self-play demo: the game loop the move core deliberately does not own.
/// Black plays the weighted-corner strategy, White the max-flip strategy;
/// turn alternation, passes and the end of the game are all handled here.
use reversi_engines::{select_move_maxflip, select_move_weighted};
use reversi_rust::{Board, Cell, Player};

fn main() {
    let mut board = Board::new();
    let mut player = Player::Black;
    let mut passes = 0;
    let mut turn = 1;

    println!("=== Reversi self-play: weighted (Black) vs max-flip (White) ===\n");
    print_board(&board);

    // Two passes in a row means neither side can move.
    while passes < 2 {
        let chosen = match player {
            Player::Black => {
                let state: [u8; 64] = board.to_state().try_into().expect("standard board is 8x8");
                select_move_weighted(&state, player.as_u8())
            }
            Player::White => {
                let grid: Vec<Vec<u8>> = board
                    .to_state()
                    .chunks(8)
                    .map(|row| row.to_vec())
                    .collect();
                select_move_maxflip(&grid, player.as_u8())
            }
        };

        match chosen {
            Some((row, col)) => {
                passes = 0;
                board = board
                    .apply_move(player, row, col)
                    .expect("strategies only pick legal moves");
                println!("Turn {:2}: {:?} plays ({}, {})", turn, player, row, col);
            }
            None => {
                passes += 1;
                println!("Turn {:2}: {:?} passes", turn, player);
            }
        }

        player = player.opponent();
        turn += 1;
    }

    println!("\nFinal position:");
    print_board(&board);

    let state = board.to_state();
    let black = state.iter().filter(|&&v| v == 1).count();
    let white = state.iter().filter(|&&v| v == 2).count();
    println!("Game over: Black {} - White {}", black, white);
}

fn print_board(board: &Board) {
    println!("  0 1 2 3 4 5 6 7");
    for row in 0..board.size() {
        print!("{} ", row);
        for col in 0..board.size() {
            let symbol = match board.cell(row, col) {
                Some(Cell::Black) => "●",
                Some(Cell::White) => "○",
                _ => ".",
            };
            print!("{} ", symbol);
        }
        println!();
    }
    println!();
}
