use crate::error::ArgumentError;
use crate::token::Token;
use itertools::Itertools;
use std::fmt;
use tracing::trace;

/// A mutable stream of classified command line arguments.
///
/// Every `shift` method removes what it returns, so descriptors can be parsed in any order and
/// each one only consumes the tokens that belong to it. Tokens that survive keep their relative
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentParser {
    tokens: Vec<Token>,
}

impl ArgumentParser {
    /// Tokenizes `args`. Unlike [`from_env`](Self::from_env), the first item is not treated as
    /// the executable name.
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tokens = args
            .into_iter()
            .map(|arg| Token::classify(arg.as_ref()))
            .collect();
        ArgumentParser { tokens }
    }

    /// Tokenizes the arguments of the current process, skipping the executable name
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /// The tokens that have not been consumed yet
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns true once every token has been consumed
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Removes and returns the first positional value
    pub fn shift(&mut self) -> Option<String> {
        let index = self
            .tokens
            .iter()
            .position(|t| matches!(t, Token::Positional(_)))?;

        let Token::Positional(value) = self.tokens.remove(index) else {
            return None;
        };
        trace!(%value, "shifted positional");
        Some(value)
    }

    /// Returns true if `--name` is present. Nothing is consumed.
    pub fn has_option(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| t.is_option(name))
    }

    /// Returns true if any flag bundle contains `flag`. Nothing is consumed.
    pub fn has_flag(&self, flag: char) -> bool {
        self.tokens.iter().any(|t| t.has_flag(flag))
    }

    /// Removes `--name` and the value right after it.
    ///
    /// Returns `Ok(None)` if the option isn't present at all.
    pub fn shift_value_for_option(&mut self, name: &str) -> Result<Option<String>, ArgumentError> {
        let values = self.shift_values_for_option(name, 1)?;
        Ok(values.and_then(|v| v.into_iter().next()))
    }

    /// Removes `--name` and the `count` positional values right after it.
    ///
    /// Returns `Ok(None)` and leaves the parser untouched if the option isn't present at all.
    pub fn shift_values_for_option(
        &mut self,
        name: &str,
        count: usize,
    ) -> Result<Option<Vec<String>>, ArgumentError> {
        let Some(index) = self.tokens.iter().position(|t| t.is_option(name)) else {
            return Ok(None);
        };

        self.tokens.remove(index);
        trace!(option = name, count, "shifting option values");

        let values = self.take_values(index, count, |token| match token {
            Some(token) => ArgumentError::UnexpectedOptionValue {
                option: name.to_string(),
                token,
            },
            None => ArgumentError::MissingOptionValue(name.to_string()),
        })?;
        Ok(Some(values))
    }

    /// Removes the value right after the first flag bundle containing `flag`.
    pub fn shift_value_for_flag(&mut self, flag: char) -> Result<Option<String>, ArgumentError> {
        let values = self.shift_values_for_flag(flag, 1)?;
        Ok(values.and_then(|v| v.into_iter().next()))
    }

    /// Removes the `count` positional values right after the first flag bundle containing
    /// `flag`.
    ///
    /// The flag bundle itself stays in place, so [`has_flag`](Self::has_flag) keeps reporting
    /// `flag` afterwards.
    pub fn shift_values_for_flag(
        &mut self,
        flag: char,
        count: usize,
    ) -> Result<Option<Vec<String>>, ArgumentError> {
        let Some(index) = self.tokens.iter().position(|t| t.has_flag(flag)) else {
            return Ok(None);
        };

        trace!(flag = %flag, count, "shifting flag values");

        let values = self.take_values(index + 1, count, |token| match token {
            Some(token) => ArgumentError::UnexpectedFlagValue { flag, token },
            None => ArgumentError::MissingFlagValue(flag),
        })?;
        Ok(Some(values))
    }

    // Removes `count` positionals starting at `index`. `fail` receives the offending token, or
    // `None` when the stream ran out.
    fn take_values(
        &mut self,
        index: usize,
        count: usize,
        fail: impl Fn(Option<Token>) -> ArgumentError,
    ) -> Result<Vec<String>, ArgumentError> {
        let mut values = Vec::with_capacity(count);

        for _ in 0..count {
            match self.tokens.get(index) {
                None => return Err(fail(None)),
                Some(Token::Positional(_)) => {
                    if let Token::Positional(value) = self.tokens.remove(index) {
                        trace!(%value, "shifted value");
                        values.push(value);
                    }
                }
                Some(other) => return Err(fail(Some(other.clone()))),
            }
        }

        Ok(values)
    }
}

impl fmt::Display for ArgumentParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}
