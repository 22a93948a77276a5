use anyhow::Result;
use clap::Parser;
use destrier::{Board, Location, BOARD_DIM};

#[derive(Parser, Debug)]
#[command(version, about = "Walk a greedy knight's tour and print the numbered board", long_about = None)]
struct Args {
    /// Starting row, counted down from the top edge
    #[arg(long, default_value_t = Board::DEFAULT_START.0)]
    row: usize,

    /// Starting column, counted right from the left edge
    #[arg(long, default_value_t = Board::DEFAULT_START.1)]
    col: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut board = Board::new();
    board.reset(Location(args.row, args.col))?;
    log::info!("walking from ({}, {})", args.row, args.col);
    let claimed = board.run_to_end();

    print!("{}", board);
    if board.is_complete() {
        println!("full tour: every square covered");
    } else {
        println!(
            "stuck at {:?} with {} of {} squares covered",
            board.knight(),
            claimed,
            BOARD_DIM * BOARD_DIM,
        );
    }

    Ok(())
}
