//! Line-based human input.
//!
//! Commands use roster indices as printed with the rosters:
//!
//! ```text
//! attack <ally> <enemy>        a 0 1
//! defend <ally>                d 0
//! ability <ally> <name> <idx>  u 2 Heal 0
//! move <ally> <x> <y>          m 1 3 4
//! pass                         p
//! ```
use std::io::{BufRead, Write};
use std::num::ParseIntError;

use tactics_core::Character;
use tactics_runtime::{HumanChoice, HumanInput, Rosters, StrategyError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (attack, defend, ability, move, pass)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a number")]
    NotANumber { value: String, source: ParseIntError },

    #[error("{role} index {index} is out of range (0..{len})")]
    OutOfRange {
        role: &'static str,
        index: usize,
        len: usize,
    },
}

/// Parses one command line into a choice.
pub fn parse_choice(line: &str) -> Result<HumanChoice, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = words.split_first() else {
        return Err(InputError::Empty);
    };

    match (command.to_ascii_lowercase().as_str(), args) {
        ("attack" | "a", [attacker, target]) => Ok(HumanChoice::Attack {
            attacker: number(attacker)?,
            target: number(target)?,
        }),
        ("attack" | "a", _) => Err(InputError::Usage("attack <ally> <enemy>")),
        ("defend" | "d", [actor]) => Ok(HumanChoice::Defend {
            actor: number(actor)?,
        }),
        ("defend" | "d", _) => Err(InputError::Usage("defend <ally>")),
        ("ability" | "u", [actor, ability, target]) => Ok(HumanChoice::Ability {
            actor: number(actor)?,
            ability: (*ability).to_string(),
            target: number(target)?,
        }),
        ("ability" | "u", _) => Err(InputError::Usage("ability <ally> <name> <target>")),
        ("move" | "m", [actor, x, y]) => Ok(HumanChoice::Move {
            actor: number(actor)?,
            x: number(x)?,
            y: number(y)?,
        }),
        ("move" | "m", _) => Err(InputError::Usage("move <ally> <x> <y>")),
        ("pass" | "p", []) => Ok(HumanChoice::Pass),
        ("pass" | "p", _) => Err(InputError::Usage("pass")),
        (other, _) => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn number<T: std::str::FromStr<Err = ParseIntError>>(word: &str) -> Result<T, InputError> {
    word.parse().map_err(|source| InputError::NotANumber {
        value: word.to_string(),
        source,
    })
}

/// Rejects actor indices outside the ally roster.
///
/// Ability targets depend on the ability and are checked by the controller.
fn check_ranges(choice: &HumanChoice, rosters: &Rosters<'_>) -> Result<(), InputError> {
    let in_range = |role, index: usize, len: usize| {
        if index < len {
            Ok(())
        } else {
            Err(InputError::OutOfRange { role, index, len })
        }
    };
    let allies = rosters.allies.len();
    match choice {
        HumanChoice::Attack { attacker, target } => {
            in_range("attacker", *attacker, allies)?;
            in_range("target", *target, rosters.enemies.len())
        }
        HumanChoice::Defend { actor }
        | HumanChoice::Ability { actor, .. }
        | HumanChoice::Move { actor, .. } => in_range("actor", *actor, allies),
        HumanChoice::Pass => Ok(()),
    }
}

/// Prompts on `writer` and reads commands from `reader` until one is valid.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn print_rosters(&mut self, rosters: &Rosters<'_>) -> std::io::Result<()> {
        writeln!(self.writer, "\n== Round {} ==", rosters.round + 1)?;
        writeln!(self.writer, "Allies:")?;
        for (index, character) in rosters.allies.iter().enumerate() {
            writeln!(self.writer, "  [{index}] {}", summary(character))?;
        }
        writeln!(self.writer, "Enemies:")?;
        for (index, character) in rosters.enemies.iter().enumerate() {
            writeln!(self.writer, "  [{index}] {}", summary(character))?;
        }
        Ok(())
    }

    fn prompt(&mut self, rosters: &Rosters<'_>) -> std::io::Result<Option<HumanChoice>> {
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_choice(&line).and_then(|choice| {
                check_ranges(&choice, rosters)?;
                Ok(choice)
            }) {
                Ok(choice) => return Ok(Some(choice)),
                Err(error) => writeln!(self.writer, "{error}")?,
            }
        }
    }
}

fn summary(character: &Character) -> String {
    let stats = character.stats();
    let abilities: Vec<&str> = character
        .abilities()
        .iter()
        .map(|ability| ability.name())
        .collect();
    format!(
        "{} ({}) hp {}/{} atk {} def {} at {}{}",
        character.name(),
        character.kind(),
        stats.hp(),
        stats.max_hp(),
        stats.attack(),
        stats.effective_defense(),
        character.position(),
        if abilities.is_empty() {
            String::new()
        } else {
            format!(" [{}]", abilities.join(", "))
        }
    )
}

impl<R: BufRead, W: Write> HumanInput for LineInput<R, W> {
    fn choose(&mut self, rosters: &Rosters<'_>) -> Result<HumanChoice, StrategyError> {
        let io_error = |error: std::io::Error| StrategyError::Input(error.to_string());
        self.print_rosters(rosters).map_err(io_error)?;
        self.prompt(rosters)
            .map_err(io_error)?
            .ok_or_else(|| StrategyError::Input("input closed".to_string()))
    }
}
