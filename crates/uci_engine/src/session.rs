//! UCI command handling
//!
//! One session per process. Each input line is handled to completion
//! before the next is read; `go` searches on the calling thread.

use std::io::{self, Write};

use heuristic_engine::{mate_plies, HeuristicEngine};
use tracing::{info, warn};
use trainer_core::{parse_setoption, set_position_from_uci, Color, Engine, Game, TrainerError};

pub struct UciSession {
    engine: HeuristicEngine,
    game: Game,
}

impl UciSession {
    pub fn new(engine: HeuristicEngine) -> Self {
        Self {
            engine,
            game: Game::startpos(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles one input line. Returns `false` once the client sent `quit`.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(true);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                for option in self.engine.options() {
                    writeln!(out, "{option}")?;
                }
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => {
                self.game = Game::startpos();
                self.engine.new_game();
            }
            "setoption" => match parse_setoption(args) {
                Some((name, value)) => {
                    if !self.engine.set_option(&name, &value) {
                        warn!(%name, %value, "option rejected");
                    }
                }
                None => warn!(%line, "malformed setoption"),
            },
            "position" => match set_position_from_uci(args) {
                Ok(game) => self.game = game,
                // The previous position stays in place
                Err(err) => warn!(%err, "position rejected"),
            },
            "go" => self.go(out)?,
            "eval" => {
                let assessment = self.engine.assess(&self.game);
                writeln!(out, "{}", assessment.summary)?;
                writeln!(out, "Score: {:+.2}", assessment.score)?;
                for threat in &assessment.threats {
                    writeln!(out, "{threat}")?;
                }
            }
            "d" => writeln!(out, "Fen: {}", self.game.to_fen())?,
            "quit" => return Ok(false),
            // Time controls, ponder, stop: searches run to completion, nothing to do
            _ => {}
        }
        out.flush()?;
        Ok(true)
    }

    fn go(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.engine.search(&self.game) {
            Ok(result) => {
                writeln!(
                    out,
                    "info depth {} score {} nodes {}",
                    result.depth,
                    uci_score(result.score, self.game.side_to_move()),
                    result.nodes
                )?;
                writeln!(out, "bestmove {}", self.game.move_to_uci(result.best_move))?;
            }
            Err(TrainerError::GameOver) => {
                info!("go on a finished game");
                writeln!(out, "bestmove 0000")?;
            }
            Err(err) => {
                warn!(%err, "search failed");
                writeln!(out, "bestmove 0000")?;
            }
        }
        Ok(())
    }
}

/// `cp <centipawns>` or `mate <moves>`, from the side to move. A negative
/// mate count means the side to move is getting mated.
fn uci_score(score: f64, side_to_move: Color) -> String {
    let score = match side_to_move {
        Color::White => score,
        Color::Black => -score,
    };
    match mate_plies(score) {
        Some(plies) => {
            let moves = ((plies + 1) / 2) as i64;
            format!("mate {}", if score > 0.0 { moves } else { -moves })
        }
        None => format!("cp {}", (score * 100.0).round() as i64),
    }
}
