use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{AttackResult, BoardError, Coordinate},
    config::FLEET,
    setup,
    ship::Orientation,
    ui::{coord_to_string, parse_coord, render_board},
};

use super::Commander;

/// Human commander reading placements and targets from the terminal.
pub struct CliCommander<R = io::StdinLock<'static>> {
    input: R,
}

impl CliCommander {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl Default for CliCommander {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> CliCommander<R> {
    /// Commander reading from any buffered source.
    pub fn with_input(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Parse a placement line such as `A5 H` (`H` = along the row, `V` = down
/// the column). A missing orientation means `H`.
fn parse_placement(line: &str) -> Result<(Coordinate, Orientation), String> {
    let mut parts = line.split_whitespace();
    let coord_str = parts
        .next()
        .ok_or_else(|| "Please enter coordinates (e.g., A5 H)".to_string())?;
    let coord = parse_coord(coord_str).ok_or_else(|| format!("Invalid coordinate '{}'", coord_str))?;
    let orient_ch = parts.next().and_then(|s| s.chars().next()).unwrap_or('H');
    let orientation = match orient_ch {
        'h' | 'H' => Orientation::Row,
        'v' | 'V' => Orientation::Col,
        other => return Err(format!("Invalid orientation '{}' - use H or V", other)),
    };
    Ok((coord, orientation))
}

impl<R: BufRead> Commander for CliCommander<R> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        println!("Place your ships (e.g. A5 H). Press enter for random placement.");
        board.clear();
        for kind in FLEET {
            loop {
                print!("{}", render_board(board, true));
                let line = match self.prompt(&format!("Place {} (length {}): ", kind, kind.length())) {
                    Some(line) if !line.is_empty() => line,
                    _ => {
                        let (x, y, o) = setup::random_placement(board, kind, rng)?;
                        board.place(kind, o, x, y)?;
                        break;
                    }
                };
                match parse_placement(&line) {
                    Ok((coord, o)) => match board.place(kind, o, coord.x, coord.y) {
                        Ok(()) => break,
                        Err(e) => println!("Error: {}", e),
                    },
                    Err(msg) => println!("Error: {}", msg),
                }
            }
        }
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, target: &Board) -> Option<Coordinate> {
        loop {
            let line = self.prompt("Enter target (e.g. B7): ")?;
            match parse_coord(&line) {
                Some(coord) if target.is_attacked(coord) => {
                    println!("Already attacked that spot");
                }
                Some(coord) => return Some(coord),
                None => println!("Invalid coordinate"),
            }
        }
    }

    fn handle_attack_result(
        &mut self,
        _target: &Board,
        coord: Coordinate,
        result: AttackResult,
        sunk: bool,
    ) {
        let suffix = if sunk { " (ship sunk!)" } else { "" };
        println!("You fired at {} -> {}{}", coord_to_string(coord), result, suffix);
    }
}
