//! UCI command handling, independent of stdin/stdout.

use std::io::Write;

use anyhow::{bail, Context, Result};
use chess_core::{move_to_uci, set_position_from_uci, PieceKind, Position};
use classical_engine::{Evaluator, MoveOrderer, PieceValues};
use tracing::{debug, info};

pub const ENGINE_NAME: &str = "Classical 0.1";
pub const ENGINE_AUTHOR: &str = "ML-chess";

const VALUE_OPTIONS: [(&str, PieceKind); 5] = [
    ("PawnValue", PieceKind::Pawn),
    ("KnightValue", PieceKind::Knight),
    ("BishopValue", PieceKind::Bishop),
    ("RookValue", PieceKind::Rook),
    ("QueenValue", PieceKind::Queen),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    pos: Position,
    values: PieceValues,
}

impl Session {
    pub fn new(values: PieceValues) -> Self {
        Self {
            pos: Position::startpos(),
            values,
        }
    }

    /// Handles one command line, writing any replies to `out`.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {ENGINE_NAME}")?;
                writeln!(out, "id author {ENGINE_AUTHOR}")?;
                for (name, kind) in VALUE_OPTIONS {
                    writeln!(
                        out,
                        "option name {name} type spin default {} min {} max {}",
                        PieceValues::DEFAULT.value(kind),
                        PieceValues::RANGE.start(),
                        PieceValues::RANGE.end()
                    )?;
                }
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => self.pos = Position::startpos(),
            "position" => {
                set_position_from_uci(&mut self.pos, args)
                    .with_context(|| format!("bad position command: {line}"))?;
                debug!(fen = %self.pos, "position set");
            }
            "setoption" => self.set_option(args)?,
            "go" => {
                let ordered = MoveOrderer::with_values(&self.pos, self.values).order()?;
                let score = Evaluator::with_values(&self.pos, self.values).evaluate();
                writeln!(out, "info depth 0 score cp {score}")?;
                match ordered.first() {
                    Some(&mv) => writeln!(out, "bestmove {}", move_to_uci(&self.pos, mv))?,
                    None => writeln!(out, "bestmove 0000")?, // no moves
                }
            }
            "eval" => {
                let score = Evaluator::with_values(&self.pos, self.values).evaluate();
                writeln!(out, "info string eval {score}")?;
            }
            "order" => {
                let ordered = MoveOrderer::with_values(&self.pos, self.values).order()?;
                let ucis: Vec<String> = ordered
                    .into_iter()
                    .map(|mv| move_to_uci(&self.pos, mv))
                    .collect();
                writeln!(out, "info string order {}", ucis.join(" "))?;
            }
            "quit" => return Ok(Flow::Quit),
            _ => debug!(command = cmd, "ignoring unknown command"),
        }
        Ok(Flow::Continue)
    }

    // setoption name <Name> value <n>
    fn set_option(&mut self, args: &[&str]) -> Result<()> {
        let name_at = args.iter().position(|&a| a == "name");
        let value_at = args.iter().position(|&a| a == "value");
        let (Some(name_at), Some(value_at)) = (name_at, value_at) else {
            bail!("setoption needs 'name' and 'value'");
        };
        if value_at <= name_at {
            bail!("setoption: 'value' must follow 'name'");
        }

        let name = args[name_at + 1..value_at].join(" ");
        let raw = args.get(value_at + 1).context("setoption: missing value")?;

        let Some(&(_, kind)) = VALUE_OPTIONS
            .iter()
            .find(|(opt, _)| opt.eq_ignore_ascii_case(&name))
        else {
            debug!(option = %name, "ignoring unknown option");
            return Ok(());
        };

        let value: i32 = raw
            .parse()
            .with_context(|| format!("setoption {name}: '{raw}' is not a number"))?;
        if !PieceValues::RANGE.contains(&value) {
            bail!("setoption {name}: value must be within 1..=10000, got {value}");
        }
        if let Some(slot) = self.values.value_mut(kind) {
            *slot = value;
        }
        info!(option = %name, value, "piece value updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
