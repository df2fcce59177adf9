use crate::error::ArgumentError;
use crate::parser::ArgumentParser;
use std::any::type_name;
use std::path::PathBuf;
use std::str::FromStr;

/// A value that can be built from command line arguments.
///
/// Implementors pull what they need out of a whole [`ArgumentParser`], which lets composite
/// values consume several tokens. Scalars usually just [shift one value](from_str_argument):
///
/// ```
/// use shiftargs::{from_str_argument, ArgumentConvertible, ArgumentError, ArgumentParser};
///
/// struct Port(u16);
///
/// impl std::str::FromStr for Port {
///     type Err = std::num::ParseIntError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.parse().map(Port)
///     }
/// }
///
/// impl ArgumentConvertible for Port {
///     fn from_parser(parser: &mut ArgumentParser) -> Result<Self, ArgumentError> {
///         from_str_argument(parser)
///     }
/// }
///
/// assert_eq!(Port::from_argument("8080").unwrap().0, 8080);
/// ```
pub trait ArgumentConvertible: Sized {
    fn from_parser(parser: &mut ArgumentParser) -> Result<Self, ArgumentError>;

    /// Builds a value from one argument, by way of a single-token parser
    fn from_argument(value: &str) -> Result<Self, ArgumentError> {
        let mut parser = ArgumentParser::new([value]);
        Self::from_parser(&mut parser)
    }
}

/// Shifts one positional value and parses it with [`FromStr`]
pub fn from_str_argument<T: FromStr>(parser: &mut ArgumentParser) -> Result<T, ArgumentError> {
    let Some(value) = parser.shift() else {
        return Err(ArgumentError::MissingValue { argument: None });
    };

    value.parse().map_err(|_| ArgumentError::InvalidType {
        value,
        type_name: short_type_name::<T>(),
        argument: None,
    })
}

fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

macro_rules! convertible_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ArgumentConvertible for $ty {
                fn from_parser(parser: &mut ArgumentParser) -> Result<Self, ArgumentError> {
                    from_str_argument(parser)
                }
            }
        )*
    };
}

convertible_from_str!(
    String, PathBuf, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

/// Collects every remaining positional value
impl<T: ArgumentConvertible> ArgumentConvertible for Vec<T> {
    fn from_parser(parser: &mut ArgumentParser) -> Result<Self, ArgumentError> {
        let mut values = Vec::new();
        while let Some(value) = parser.shift() {
            values.push(T::from_argument(&value)?);
        }
        Ok(values)
    }
}
