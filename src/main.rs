#![cfg(feature = "demo")]

use hasami_shogi::game::GameStatus::Won;
use hasami_shogi::game::StandardGame;
use hasami_shogi::pieces::Side::{Black, Red};
use hasami_shogi::play::Play;
use std::io::stdin;
use std::str::FromStr;

fn input(prompt: &str) -> std::io::Result<Option<String>> {
    println!("{prompt}");
    let mut s: String = String::new();
    if stdin().read_line(&mut s)? == 0 {
        return Ok(None)
    }
    Ok(Some(s.trim().to_string()))
}

/// Read plays until one parses. `None` means input has ended.
fn get_play() -> Option<Play> {
    loop {
        match input("Please enter your move (eg, i1-e1):") {
            Ok(Some(m_str)) => match Play::from_str(&m_str) {
                Ok(play) => return Some(play),
                Err(e) => println!("Invalid move ({e}). Try again.")
            },
            Ok(None) => return None,
            Err(e) => println!("Error reading input ({e}). Try again.")
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    println!("hasami-shogi demo");
    let mut game = StandardGame::default();
    loop {
        println!("{game}");
        println!(
            "Captured: {} black, {} red. {} to play.",
            game.captured_count(Black),
            game.captured_count(Red),
            game.state.side_to_play
        );

        let Some(play) = get_play() else {
            return
        };
        match game.do_play(play) {
            Ok(Won(side)) => {
                println!("Game over. Winner is {side}.");
                println!("{game}");
                return
            },
            Ok(_) => {
                if let Some(record) = game.play_history.last() {
                    println!("{} played {record}.", record.side);
                }
            },
            Err(e) => println!("Invalid move ({e}). Try again.")
        }
    }
}
