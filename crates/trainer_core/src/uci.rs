use crate::{error::Result, game::Game};

/// Builds the game described by the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
///
/// The moves are played on top of the base position so repetition history
/// is preserved for the engine.
pub fn set_position_from_uci(args: &[&str]) -> Result<Game> {
    let moves_at = args.iter().position(|&tok| tok == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut game = match setup.first() {
        Some(&"fen") => Game::from_fen(&setup[1..].join(" "))?,
        _ => Game::startpos(),
    };

    for text in moves {
        let mv = game.parse_uci_move(text)?;
        game.apply(mv)?;
    }
    Ok(game)
}

/// Splits `setoption name <name...> value <value...>` into its name and
/// value. Option names may contain spaces ("Skill Level").
pub fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    let name_at = args.iter().position(|&tok| tok == "name")?;
    let value_at = args.iter().position(|&tok| tok == "value");

    let name_end = value_at.unwrap_or(args.len());
    if name_end <= name_at + 1 {
        return None;
    }
    let name = args[name_at + 1..name_end].join(" ");
    let value = value_at
        .map(|i| args[i + 1..].join(" "))
        .unwrap_or_default();
    Some((name, value))
}
