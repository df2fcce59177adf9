use crate::convertible::ArgumentConvertible;
use crate::error::ArgumentError;
use crate::parser::ArgumentParser;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Whether a descriptor shows up in the usage line or in the options list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Positional,
    Option,
}

/// A typed declaration of how to pull one value out of an [`ArgumentParser`]
pub trait ArgumentDescriptor {
    type Value;

    /// The name used on the command line and in help output
    fn name(&self) -> &'static str;

    fn description(&self) -> Option<&'static str>;

    /// Whether this is listed as a positional argument or as an option
    fn kind(&self) -> DescriptorKind;

    /// The default value, rendered as text, if this descriptor has one
    fn default_value(&self) -> Option<String> {
        None
    }

    /// Shifts this descriptor's tokens out of `parser` and converts them
    fn parse(&self, parser: &mut ArgumentParser) -> Result<Self::Value, ArgumentError>;

    /// A type-erased copy of this descriptor's metadata, for help output
    fn boxed(&self) -> BoxedArgumentDescriptor {
        BoxedArgumentDescriptor {
            name: self.name(),
            description: self.description(),
            kind: self.kind(),
            default: self.default_value(),
        }
    }
}

/// Descriptor metadata with the value type erased. Only used to render help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxedArgumentDescriptor {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub kind: DescriptorKind,
    pub default: Option<String>,
}

/// A required positional argument
#[derive(Debug, Clone)]
pub struct Argument<T> {
    name: &'static str,
    description: Option<&'static str>,
    value: PhantomData<fn() -> T>,
}

impl<T> Argument<T> {
    /// Defines a new positional argument
    pub fn new(name: &'static str) -> Self {
        Argument {
            name,
            description: None,
            value: PhantomData,
        }
    }

    /// Attaches a description shown in the help output
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl<T: ArgumentConvertible> ArgumentDescriptor for Argument<T> {
    type Value = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> Option<&'static str> {
        self.description
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Positional
    }

    fn parse(&self, parser: &mut ArgumentParser) -> Result<T, ArgumentError> {
        T::from_parser(parser).map_err(|e| e.for_argument(self.name))
    }
}

/// A named option (e.g. `--name value`) that falls back to a default when absent
#[derive(Debug, Clone)]
pub struct NamedOption<T> {
    name: &'static str,
    description: Option<&'static str>,
    default: T,
}

impl<T> NamedOption<T> {
    /// Defines a new option that yields `default` when it isn't given
    pub fn new(name: &'static str, default: T) -> Self {
        NamedOption {
            name,
            description: None,
            default,
        }
    }

    /// Attaches a description shown in the help output
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl<T: ArgumentConvertible + Clone + Debug> ArgumentDescriptor for NamedOption<T> {
    type Value = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> Option<&'static str> {
        self.description
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Option
    }

    fn default_value(&self) -> Option<String> {
        Some(format!("{:?}", self.default))
    }

    fn parse(&self, parser: &mut ArgumentParser) -> Result<T, ArgumentError> {
        match parser.shift_value_for_option(self.name)? {
            Some(value) => T::from_argument(&value),
            None => Ok(self.default.clone()),
        }
    }
}

/// A named option followed by a fixed number of values (e.g. `--size 10 20`)
#[derive(Debug, Clone)]
pub struct MultiOption<T> {
    name: &'static str,
    description: Option<&'static str>,
    count: usize,
    default: Vec<T>,
}

impl<T> MultiOption<T> {
    /// Defines a new option that takes `count` values, or yields `default` when it isn't given
    pub fn new(name: &'static str, default: Vec<T>, count: usize) -> Self {
        MultiOption {
            name,
            description: None,
            count,
            default,
        }
    }

    /// Attaches a description shown in the help output
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl<T: ArgumentConvertible + Clone + Debug> ArgumentDescriptor for MultiOption<T> {
    type Value = Vec<T>;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> Option<&'static str> {
        self.description
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Option
    }

    fn default_value(&self) -> Option<String> {
        Some(format!("{:?}", self.default))
    }

    fn parse(&self, parser: &mut ArgumentParser) -> Result<Vec<T>, ArgumentError> {
        match parser.shift_values_for_option(self.name, self.count)? {
            Some(values) => values.iter().map(|v| T::from_argument(v)).collect(),
            None => Ok(self.default.clone()),
        }
    }
}

/// A boolean switch.
///
/// `--name` turns it on, `--no-name` turns it off, and so does the short alias (e.g. `-c`) when
/// one is set. Flags never consume a value.
#[derive(Debug, Clone)]
pub struct Flag {
    name: &'static str,
    description: Option<&'static str>,
    short: Option<char>,
    default: bool,
}

impl Flag {
    /// Defines a new flag that is off by default
    pub fn new(name: &'static str) -> Self {
        Flag {
            name,
            description: None,
            short: None,
            default: false,
        }
    }

    /// Attaches a description shown in the help output
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Attaches a single character alias (e.g. `-v`)
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the value used when neither `--name` nor `--no-name` is given
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

impl ArgumentDescriptor for Flag {
    type Value = bool;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> Option<&'static str> {
        self.description
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Option
    }

    fn default_value(&self) -> Option<String> {
        Some(self.default.to_string())
    }

    fn parse(&self, parser: &mut ArgumentParser) -> Result<bool, ArgumentError> {
        if parser.has_option(&format!("no-{}", self.name)) {
            return Ok(false);
        }

        if parser.has_option(self.name) {
            return Ok(true);
        }

        if let Some(short) = self.short {
            if parser.has_flag(short) {
                return Ok(true);
            }
        }

        Ok(self.default)
    }
}
