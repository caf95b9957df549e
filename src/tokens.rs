//! Command-line design tokens
//!
//! A design is described on the command line as a list of short tokens,
//! each mapping to one [`DesignerCommand`]:
//!
//! | Token                   | Command                        |
//! |-------------------------|--------------------------------|
//! | `1.8`, `2.4m`, `3.6`    | append a standard section      |
//! | `gate`                  | append a gate                  |
//! | `turn:<deg>`, `t<deg>`  | set the turn for next sections |
//! | `undo`                  | remove the last section        |
//! | `reset`                 | clear the design               |

use paalkraal_core::{Error, PoleLength, Result};
use paalkraal_designer::{DesignerCommand, SegmentKind};

/// Parse a single token.
pub fn parse_token(token: &str) -> Result<DesignerCommand> {
    let token = token.trim();
    let lower = token.to_ascii_lowercase();

    match lower.as_str() {
        "gate" | "g" => return Ok(DesignerCommand::Append(SegmentKind::Gate)),
        "undo" | "u" => return Ok(DesignerCommand::RemoveLast),
        "reset" => return Ok(DesignerCommand::Reset),
        _ => {}
    }

    if let Some(degrees) = lower
        .strip_prefix("turn:")
        .or_else(|| lower.strip_prefix('t'))
    {
        return parse_turn(degrees).map(DesignerCommand::SetPendingTurn);
    }

    if lower.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        let pole: PoleLength = lower.parse()?;
        return Ok(DesignerCommand::Append(SegmentKind::Standard(pole)));
    }

    Err(Error::other(format!("Unknown design token '{}'", token)))
}

/// Parse every token in order, stopping at the first bad one.
pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<DesignerCommand>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| parse_token(token.as_ref()))
        .collect()
}

fn parse_turn(text: &str) -> Result<f64> {
    let degrees: f64 = text
        .trim()
        .trim_end_matches('°')
        .parse()
        .map_err(|_| Error::other(format!("Invalid turn angle '{}'", text)))?;
    if !degrees.is_finite() {
        return Err(Error::other(format!("Invalid turn angle '{}'", text)));
    }
    Ok(degrees)
}
