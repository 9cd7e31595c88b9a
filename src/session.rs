use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::GameState;
use crate::config::Config;
use crate::engine::{Ending, Output};
use crate::resources::read_lines;
use crate::world::{LoadError, load_builtin_world};

pub const PROMPT: &str = "Enter a direction (north, east, south, or west), 'take <item>' to pick up an item, 'leave <item>' to leave an item, or 'talk <character>' to talk to a character: ";

const DEFAULT_INSTRUCTIONS: [&str; 5] = [
    "Welcome to the Game!",
    "Your goal is to find the key and reach the final room.",
    "You can move between rooms using the directions north, east, south, or west.",
    "Use 'take <item>' to pick up an item and 'leave <item>' to leave an item.",
    "You can also 'talk <character>' to interact with characters in the room.",
];

/// Text shown once before the first turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    /// Set when the file could not be read and the built-in text is used.
    pub notice: Option<String>,
    pub lines: Vec<String>,
}

impl Instructions {
    pub fn load(path: &Path) -> Self {
        match read_lines(path) {
            Ok(lines) => Instructions {
                notice: None,
                lines,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default instructions");
                Instructions {
                    notice: Some(format!(
                        "Unable to open {}. Using default instructions.",
                        path.display()
                    )),
                    lines: DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
                }
            }
        }
    }

    fn render(&self) -> Output {
        let mut out = Output::new();
        if let Some(notice) = &self.notice {
            out.say(notice.as_str());
        }
        for line in &self.lines {
            out.verbatim(line.as_str());
        }
        out.verbatim("");
        out
    }
}

/// A game plus its instructions, ready to be driven over any reader/writer.
pub struct Session {
    pub state: GameState,
    pub instructions: Instructions,
}

impl Session {
    pub fn new(state: GameState, instructions: Instructions) -> Self {
        Session {
            state,
            instructions,
        }
    }

    /// Built-in map plus the files named by `config`.
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        let world = load_builtin_world()?;
        let instructions = Instructions::load(&config.instructions_path);
        Ok(Session::new(
            GameState::new(world, config.reveal_path.clone()),
            instructions,
        ))
    }

    /// Print the instructions and play until an ending or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<Option<Ending>> {
        self.instructions.render().write_to(output)?;

        loop {
            let (out, ending) = self.state.begin_turn();
            out.write_to(output)?;
            if ending.is_some() {
                output.flush()?;
                return Ok(ending);
            }

            write!(output, "{PROMPT}")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                writeln!(output)?;
                output.flush()?;
                return Ok(None);
            }

            let (out, ending) = self.state.step(strip_line_ending(&line));
            out.write_to(output)?;
            if ending.is_some() {
                output.flush()?;
                return Ok(ending);
            }
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
