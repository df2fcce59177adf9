use crate::descriptor::ArgumentDescriptor;
use crate::error::CommandError;
use crate::parser::ArgumentParser;
use std::io::stdout;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

pub mod group;
pub mod help;

use help::Help;

/// Something that can be dispatched against a stream of arguments
pub trait Command {
    /// Parses what the command needs out of `parser` and runs it
    fn run(&mut self, parser: &mut ArgumentParser) -> Result<(), CommandError>;

    /// Tokenizes `args` and runs the command against them
    fn run_with<I, T>(&mut self, args: I) -> Result<(), CommandError>
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut parser = ArgumentParser::new(args);
        self.run(&mut parser)
    }
}

/// A list of descriptors bound to a handler. Built with [`command1`] through [`command5`].
pub struct BoundCommand<D, F> {
    descriptors: D,
    handler: F,
}

macro_rules! bound_command {
    ($factory:ident => $($descriptor:ident $value:ident),+) => {
        /// Binds the descriptors to `handler`.
        ///
        /// When run, `--help` anywhere in the arguments short-circuits to a [`Help`] request.
        /// Otherwise each descriptor is parsed in the order given, and `handler` is called with
        /// the values once all of them succeed.
        pub fn $factory<$($descriptor,)+ F>(
            $($value: $descriptor,)+
            handler: F,
        ) -> BoundCommand<($($descriptor,)+), F>
        where
            $($descriptor: ArgumentDescriptor,)+
            F: FnMut($($descriptor::Value),+) -> anyhow::Result<()>,
        {
            BoundCommand {
                descriptors: ($($value,)+),
                handler,
            }
        }

        impl<$($descriptor,)+ F> Command for BoundCommand<($($descriptor,)+), F>
        where
            $($descriptor: ArgumentDescriptor,)+
            F: FnMut($($descriptor::Value),+) -> anyhow::Result<()>,
        {
            fn run(&mut self, parser: &mut ArgumentParser) -> Result<(), CommandError> {
                let ($($value,)+) = &self.descriptors;

                if parser.has_option("help") {
                    debug!("help requested");
                    return Err(Help::new(vec![$($value.boxed()),+]).into());
                }

                $(let $value = $value.parse(parser)?;)+

                debug!("invoking handler");
                (self.handler)($($value),+).map_err(CommandError::Handler)
            }
        }
    };
}

bound_command!(command1 => A a);
bound_command!(command2 => A a, B b);
bound_command!(command3 => A a, B b, C c);
bound_command!(command4 => A a, B b, C c, D d);
bound_command!(command5 => A a, B b, C c, D d, E e);

/// Runs `command` against the arguments of the current process.
///
/// Help requests are printed to stdout and count as success. Any other error is printed to
/// stderr.
pub fn run<C: Command>(mut command: C) -> ExitCode {
    let mut args = std::env::args();
    let name = args
        .next()
        .as_deref()
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut parser = ArgumentParser::new(args);

    match command.run(&mut parser) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Help(help)) => {
            let help = if name.is_empty() { help } else { help.reraise(&name) };
            match help::write_help(stdout(), &help) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("could not write to stdout\n{e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
