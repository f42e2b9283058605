use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe_engine::games::tictactoe::{
    CONFIG_FILE, GameEngine, GameStatus, TurnResult, get_config_manager, render_board,
};
use tictactoe_engine::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_cli", about = "Play tic-tac-toe against a perfect minimax bot")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
}

enum Command {
    Place(usize),
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim() {
        "new" | "n" => Ok(Command::NewGame),
        "quit" | "q" => Ok(Command::Quit),
        other => other
            .parse::<usize>()
            .map(Command::Place)
            .map_err(|_| format!("Unknown command '{}', expected 0-8, new or quit", other)),
    }
}

fn print_turn(engine: &GameEngine, result: &TurnResult) {
    println!("{}", render_board(&engine.state().board));

    if let Some(chances) = result.win_chances {
        println!("Win chance: you {}%, bot {}%", chances.human, chances.bot);
    }

    if result.status == GameStatus::InProgress {
        return;
    }

    println!("Game over: {}", result.status);
    if let Some(analysis) = &result.analysis {
        println!("{}", analysis.suggestion);
        for review in analysis.review.iter().filter(|review| !review.is_optimal()) {
            println!(
                "  move {}: you played {}, {} was better",
                review.turn + 1,
                review.played,
                review.best
            );
        }
    }

    let score = engine.scoreboard();
    println!(
        "Score: you {}, bot {}, draws {}. Type 'new' to play again.",
        score.human_wins, score.bot_wins, score.draws
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Cli".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let settings = get_config_manager(&args.config).get_config()?;
    let mut engine = GameEngine::new(settings)?;

    log!("Using config {}", args.config);
    println!("{}", render_board(&engine.state().board));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Place(position)) => match engine.submit_move(position) {
                Ok(result) => print_turn(&engine, &result),
                Err(e) => println!("{}", e),
            },
            Ok(Command::NewGame) => {
                engine.new_game();
                println!("{}", render_board(&engine.state().board));
            }
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
        io::stdout().flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command(" 4 "), Ok(Command::Place(4))));
        assert!(matches!(parse_command("new"), Ok(Command::NewGame)));
        assert!(matches!(parse_command("q"), Ok(Command::Quit)));
        assert!(parse_command("center").is_err());
    }
}
