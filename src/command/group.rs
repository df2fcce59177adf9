use super::help::Help;
use super::Command;
use crate::error::CommandError;
use crate::parser::ArgumentParser;
use tracing::debug;

/// A set of named subcommands.
///
/// The first positional argument picks the subcommand, which then runs against whatever is left.
#[derive(Default)]
pub struct Group {
    commands: Vec<(&'static str, Box<dyn Command>)>,
}

impl Group {
    /// Creates an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subcommand. A later registration with the same name replaces the earlier one.
    pub fn add_command(mut self, name: &'static str, command: impl Command + 'static) -> Self {
        self.commands.retain(|(n, _)| *n != name);
        self.commands.push((name, Box::new(command)));
        self
    }

    /// Names of the registered subcommands, in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|(name, _)| *name)
    }

    fn get_subcommand(&mut self, name: &str) -> Option<&mut Box<dyn Command>> {
        self.commands
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, command)| command)
    }
}

impl Command for Group {
    fn run(&mut self, parser: &mut ArgumentParser) -> Result<(), CommandError> {
        let Some(name) = parser.shift() else {
            debug!("no subcommand given");
            let names = self.command_names().map(String::from).collect();
            return Err(Help::for_group(names).into());
        };

        let Some(command) = self.get_subcommand(&name) else {
            return Err(CommandError::UnknownCommand(name));
        };

        debug!(command = %name, "dispatching");
        command.run(parser).map_err(|e| e.reraise(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{command1, command2};
    use crate::descriptor::{Argument, Flag, NamedOption};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app(log: Rc<RefCell<Vec<String>>>) -> Group {
        let build_log = Rc::clone(&log);
        let remote_log = Rc::clone(&log);

        Group::new()
            .add_command(
                "build",
                command1(Flag::new("release").with_short('r'), move |release| {
                    build_log.borrow_mut().push(format!("build release={release}"));
                    Ok(())
                }),
            )
            .add_command(
                "remote",
                Group::new().add_command(
                    "add",
                    command2(
                        Argument::<String>::new("name"),
                        NamedOption::new("fetch", false),
                        move |name, fetch| {
                            remote_log
                                .borrow_mut()
                                .push(format!("remote add {name} fetch={fetch}"));
                            Ok(())
                        },
                    ),
                ),
            )
    }

    #[test]
    fn dispatches_by_first_positional() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut app = app(Rc::clone(&log));

        app.run_with(["-r", "build"]).unwrap();
        app.run_with(["remote", "add", "origin", "--fetch", "true"])
            .unwrap();

        assert_eq!(
            *log.borrow(),
            ["build release=true", "remote add origin fetch=true"]
        );
    }

    #[test]
    fn nested_help_carries_the_path() {
        let mut app = app(Rc::new(RefCell::new(vec![])));
        let err = app.run_with(["remote", "add", "--help"]).unwrap_err();

        let CommandError::Help(help) = err else {
            panic!("expected a help request");
        };
        assert_eq!(help.command(), ["remote", "add"]);
        assert_eq!(
            help.reraise("git").to_string(),
            "Usage:\n\n    git remote add name\n\nOptions:\n    --fetch"
        );
    }

    #[test]
    fn missing_subcommand_lists_commands() {
        let mut app = app(Rc::new(RefCell::new(vec![])));
        let err = app.run_with(["--help"]).unwrap_err();

        let CommandError::Help(help) = err else {
            panic!("expected a help request");
        };
        let names = help.group().unwrap_or_default();
        assert_eq!(names, ["build", "remote"]);
    }

    #[test]
    fn unknown_subcommand() {
        let mut app = app(Rc::new(RefCell::new(vec![])));
        let err = app.run_with(["remote", "rm"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: `remote rm`");
    }

    #[test]
    fn later_registration_wins() {
        let group = Group::new()
            .add_command("a", command1(Flag::new("x"), |_| Ok(())))
            .add_command("b", command1(Flag::new("x"), |_| Ok(())))
            .add_command("a", command1(Flag::new("y"), |_| Ok(())));
        assert_eq!(group.command_names().collect::<Vec<_>>(), ["b", "a"]);
    }
}
