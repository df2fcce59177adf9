//! Typed command line arguments without a reflection layer
//!
//! Arguments are first split into tokens:
//!
//! Argument | Token
//! -|-
//! `--name` | Option named `name`. Nothing after the dashes is split, so `--name=value` is an option named `name=value`
//! `-abc` | A bundle of the short flags `a`, `b` and `c`
//! anything else | Positional value
//!
//! The tokens sit in an [`ArgumentParser`]. A command declares what it needs as a list of
//! descriptors ([`Argument`], [`NamedOption`], [`MultiOption`], [`Flag`]). Each descriptor shifts
//! its own tokens out of the parser, and the typed values are handed to a closure:
//!
//! ```
//! use shiftargs::{command2, Argument, Command, Flag};
//!
//! let mut greet = command2(
//!     Argument::<String>::new("name"),
//!     Flag::new("shout").with_short('s'),
//!     |name, shout| {
//!         let greeting = format!("Hello {name}");
//!         if shout {
//!             println!("{}", greeting.to_uppercase());
//!         } else {
//!             println!("{greeting}");
//!         }
//!         Ok(())
//!     },
//! );
//!
//! greet.run_with(["-s", "Kyle"]).unwrap();
//! assert!(greet.run_with(["--help"]).unwrap_err().is_help());
//! ```
//!
//! # Reserved names
//!
//! - `--help` anywhere in the arguments makes a command return a [`Help`] request instead of
//! running.
//! - `--no-<name>` turns off the [`Flag`] called `<name>`, whatever its default.

mod convertible;
mod descriptor;
mod error;
mod parser;
mod token;

pub mod command;

pub use command::group::Group;
pub use command::help::{write_help, Help};
pub use command::{command1, command2, command3, command4, command5, run, BoundCommand, Command};
pub use convertible::{from_str_argument, ArgumentConvertible};
pub use descriptor::{
    Argument, ArgumentDescriptor, BoxedArgumentDescriptor, DescriptorKind, Flag, MultiOption,
    NamedOption,
};
pub use error::{ArgumentError, CommandError};
pub use parser::ArgumentParser;
pub use token::{Token, TokenKind};
