use itertools::Itertools;
use log::trace;

use std::io::BufRead;

use crate::{
    prelude::{Error, ParsingError, Query},
    query::FIELDS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One [Request] is one iteration of the query protocol.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Request {
    pub query: Query,

    /// Stop once this [Request] has been answered
    pub terminate: bool,
}

/// Interprets the termination flag: any integer, of any magnitude.
/// Returns true when it is nonzero.
fn parse_termination_flag(content: &str) -> Result<bool, ParsingError> {
    let trimmed = content.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParsingError::TerminationFlag(content.to_string()));
    }

    Ok(digits.bytes().any(|b| b != b'0'))
}

/// [QueryReader] extracts [Request]s from a line oriented input stream.
pub struct QueryReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> QueryReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the next [Request]. All 9 lines are consumed before anything
    /// gets interpreted.
    pub fn next_request(&mut self) -> Result<Request, Error> {
        let lines = (&mut self.reader)
            .lines()
            .take(FIELDS.len())
            .try_collect::<_, Vec<_>, _>()
            .map_err(ParsingError::IoError)?;

        if let Some(field) = FIELDS.get(lines.len()).copied() {
            return Err(ParsingError::UnexpectedEof { field }.into());
        }

        trace!("request: {:?}", lines);

        let query = Query::from_fields(&[
            lines[0].as_str(),
            lines[1].as_str(),
            lines[2].as_str(),
            lines[3].as_str(),
            lines[4].as_str(),
            lines[5].as_str(),
            lines[6].as_str(),
            lines[7].as_str(),
        ])?;

        let terminate = parse_termination_flag(&lines[8])?;

        Ok(Request { query, terminate })
    }
}
