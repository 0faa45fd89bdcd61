#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use spp_core::utils::{GenericError, GenericResult};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Reads whitespace separated tokens which can be spread over lines arbitrarily.
pub(crate) struct TokenReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    tokens: VecDeque<String>,
    line: usize,
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { reader, buffer: String::new(), tokens: VecDeque::default(), line: 0 }
    }

    /// Reads and parses the next token, `what` describes it in the error message.
    pub fn next<T>(&mut self, what: &str) -> GenericResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return token
                    .parse::<T>()
                    .map_err(|err| format!("cannot parse {what} from '{token}' at line {}: {err}", self.line).into());
            }

            if !self.read_tokens()? {
                return Err(format!("unexpected end of data: cannot read {what}").into());
            }
        }
    }

    /// Reads and parses given amount of tokens.
    pub fn next_many<T>(&mut self, count: usize, what: &str) -> GenericResult<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        (0..count).map(|_| self.next(what)).collect()
    }

    /// Returns true if there are no more tokens.
    pub fn is_empty(&mut self) -> GenericResult<bool> {
        while self.tokens.is_empty() {
            if !self.read_tokens()? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn read_tokens(&mut self) -> GenericResult<bool> {
        if read_line(&mut self.reader, &mut self.buffer)? == 0 {
            return Ok(false);
        }

        self.line += 1;
        self.tokens.extend(self.buffer.split_whitespace().map(str::to_string));

        Ok(true)
    }
}

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> GenericResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(GenericError::from)
}
