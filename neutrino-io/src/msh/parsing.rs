use std::io::BufRead;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

/// Returns the next non-empty line of `reader` with surrounding whitespace removed, or `None` at the end of
/// the file
pub(crate) fn next_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_owned()));
        }
    }
}

/// Reads all lines of section `name` up to (and consuming) its `$End<name>` line. The section header must
/// already be consumed
pub(crate) fn read_section<R: BufRead>(reader: &mut R, name: &str) -> Result<Vec<String>> {
    let end = format!("$End{}", name);
    let mut lines = vec![];
    loop {
        match next_line(reader)? {
            Some(line) if line == end => return Ok(lines),
            Some(line) => lines.push(line),
            None => bail!("Unexpected end of file in section ${}, missing {}", name, end),
        }
    }
}

/// Whitespace separated values of (part of) a section
pub(crate) struct SectionTokens<'a> {
    section: &'a str,
    tokens: Box<dyn Iterator<Item = &'a str> + 'a>,
}

impl<'a> SectionTokens<'a> {
    pub fn new(section: &'a str, lines: &'a [String]) -> Self {
        Self {
            section,
            tokens: Box::new(lines.iter().flat_map(|line| line.split_whitespace())),
        }
    }

    /// Parses the next value. `what` names the value in error messages
    pub fn next<T: FromStr>(&mut self, what: &str) -> Result<T>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self.tokens.next().ok_or_else(|| {
            anyhow!(
                "Unexpected end of section ${} while reading {}",
                self.section,
                what
            )
        })?;
        token
            .parse()
            .with_context(|| format!("Invalid {} '{}' in section ${}", what, token, self.section))
    }

    pub fn next_vec<T: FromStr>(&mut self, count: usize, what: &str) -> Result<Vec<T>>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        (0..count).map(|_| self.next(what)).collect()
    }

    /// Parses all remaining values
    pub fn rest<T: FromStr>(self, what: &str) -> Result<Vec<T>>
    where
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let section = self.section;
        self.tokens
            .map(|token| {
                token
                    .parse()
                    .with_context(|| format!("Invalid {} '{}' in section ${}", what, token, section))
            })
            .collect()
    }

    /// Skips `count` values without interpreting them
    pub fn skip(&mut self, count: usize, what: &str) -> Result<()> {
        for _ in 0..count {
            if self.tokens.next().is_none() {
                bail!(
                    "Unexpected end of section ${} while reading {}",
                    self.section,
                    what
                );
            }
        }
        Ok(())
    }

    /// Number of values that were not consumed
    pub fn remaining(self) -> usize {
        self.tokens.count()
    }
}
