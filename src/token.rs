use std::fmt;

/// A single classified command line argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Anything that does not start with a dash (e.g. `build`)
    Positional(String),
    /// An argument starting with two dashes. Holds everything after them (e.g. `--verbose`)
    Option(String),
    /// An argument starting with a single dash. Holds the distinct characters after it, in the
    /// order they first appear (e.g. `-abc`)
    Flag(Vec<char>),
}

/// The category of a [`Token`], as used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Argument,
    Option,
    Flag,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Argument => write!(f, "argument"),
            TokenKind::Option => write!(f, "option"),
            TokenKind::Flag => write!(f, "flag"),
        }
    }
}

impl Token {
    /// Classifies one raw argument.
    ///
    /// A `--` prefix always wins over a single `-`. Nothing else is inspected: `--name=value` is
    /// the option `name=value`.
    pub fn classify(arg: &str) -> Token {
        if let Some(name) = arg.strip_prefix("--") {
            return Token::Option(name.to_string());
        }

        if let Some(chars) = arg.strip_prefix('-') {
            let mut distinct = Vec::new();
            for c in chars.chars() {
                if !distinct.contains(&c) {
                    distinct.push(c);
                }
            }
            return Token::Flag(distinct);
        }

        Token::Positional(arg.to_string())
    }

    /// Returns the category used to describe this token in errors
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Positional(_) => TokenKind::Argument,
            Token::Option(_) => TokenKind::Option,
            Token::Flag(_) => TokenKind::Flag,
        }
    }

    /// Returns true if this is the option `--name`
    pub fn is_option(&self, name: &str) -> bool {
        matches!(self, Token::Option(option) if option == name)
    }

    /// Returns true if this is a flag bundle containing `flag`
    pub fn has_flag(&self, flag: char) -> bool {
        matches!(self, Token::Flag(chars) if chars.contains(&flag))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Positional(value) => write!(f, "{value}"),
            Token::Option(name) => write!(f, "--{name}"),
            Token::Flag(chars) => {
                write!(f, "-")?;
                for c in chars {
                    write!(f, "{c}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_dash_is_an_option() {
        assert_eq!(Token::classify("--verbose"), Token::Option("verbose".into()));
    }

    #[test]
    fn single_dash_is_a_flag_bundle() {
        assert_eq!(Token::classify("-ab"), Token::Flag(vec!['a', 'b']));
        assert_eq!(Token::classify("-aba"), Token::Flag(vec!['a', 'b']));
    }

    #[test]
    fn everything_else_is_positional() {
        assert_eq!(Token::classify("build"), Token::Positional("build".into()));
        assert_eq!(Token::classify(""), Token::Positional("".into()));
        assert_eq!(Token::classify("a-b"), Token::Positional("a-b".into()));
    }

    #[test]
    fn equals_form_is_not_split() {
        assert_eq!(
            Token::classify("--name=value"),
            Token::Option("name=value".into())
        );
    }

    #[test]
    fn bare_dashes() {
        assert_eq!(Token::classify("-"), Token::Flag(vec![]));
        assert_eq!(Token::classify("--"), Token::Option("".into()));
        assert_eq!(Token::classify("---x"), Token::Option("-x".into()));
    }

    #[test]
    fn canonical_rendering() {
        for raw in ["build", "--name", "-xyz"] {
            assert_eq!(Token::classify(raw).to_string(), raw);
        }
        assert_eq!(Token::classify("-xx").to_string(), "-x");
    }
}
