use crate::descriptor::{BoxedArgumentDescriptor, DescriptorKind};
use itertools::Itertools;
use std::fmt;
use std::io::{self, Write};

/// A request to show usage instead of running a command.
///
/// Commands return it through [`CommandError::Help`](crate::CommandError::Help) as soon as
/// `--help` is seen. Dispatchers on the way out [`reraise`](Help::reraise) it with their own name
/// so the usage line ends up showing the full command path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    command: Vec<String>,
    group: Option<Vec<String>>,
    descriptors: Vec<BoxedArgumentDescriptor>,
}

impl Help {
    /// Help for a single command taking `descriptors`
    pub fn new(descriptors: Vec<BoxedArgumentDescriptor>) -> Self {
        Help {
            command: vec![],
            group: None,
            descriptors,
        }
    }

    /// Help for a group of subcommands
    pub fn for_group(commands: Vec<String>) -> Self {
        Help {
            command: vec![],
            group: Some(commands),
            descriptors: vec![],
        }
    }

    /// Prepends `name` to the command path
    pub fn reraise(mut self, name: &str) -> Self {
        self.command.insert(0, name.to_string());
        self
    }

    /// The command path, outermost first. Empty until the help has been reraised.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// The subcommand names, if this help is for a group
    pub fn group(&self) -> Option<&[String]> {
        self.group.as_deref()
    }

    /// Metadata of the command's descriptors, in declared order
    pub fn descriptors(&self) -> &[BoxedArgumentDescriptor] {
        &self.descriptors
    }
}

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = vec![];

        if !self.command.is_empty() {
            let usage = self
                .command
                .iter()
                .map(String::as_str)
                .chain(
                    self.descriptors
                        .iter()
                        .filter(|d| d.kind == DescriptorKind::Positional)
                        .map(|d| d.name),
                )
                .join(" ");

            lines.push("Usage:".to_string());
            lines.push(String::new());
            lines.push(format!("    {usage}"));
            lines.push(String::new());
        }

        if let Some(commands) = &self.group {
            lines.push("Commands:".to_string());
            lines.push(String::new());
            for name in commands {
                lines.push(format!("    + {name}"));
            }
            lines.push(String::new());
        }

        let options = self
            .descriptors
            .iter()
            .filter(|d| d.kind == DescriptorKind::Option)
            .collect::<Vec<_>>();

        if !options.is_empty() {
            lines.push("Options:".to_string());
            // TODO: show `default` once option lines are laid out in columns
            for option in options {
                let line = match option.description {
                    Some(description) => format!("    --{} - {description}", option.name),
                    None => format!("    --{}", option.name),
                };
                lines.push(line);
            }
        }

        write!(f, "{}", lines.join("\n"))
    }
}

/// Writes the rendered help to `w`, followed by a newline
pub fn write_help(mut w: impl Write, help: &Help) -> io::Result<()> {
    writeln!(&mut w, "{help}")?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Argument, ArgumentDescriptor, Flag, NamedOption};

    fn descriptors() -> Vec<BoxedArgumentDescriptor> {
        vec![
            Argument::<String>::new("source").boxed(),
            NamedOption::new("count", 1u8)
                .with_description("Number of copies")
                .boxed(),
            Argument::<String>::new("destination").boxed(),
            Flag::new("force").boxed(),
        ]
    }

    #[test]
    fn full_help_text() {
        let help = Help::new(descriptors()).reraise("copy").reraise("tool");
        assert_eq!(
            help.to_string(),
            concat!(
                "Usage:\n",
                "\n",
                "    tool copy source destination\n",
                "\n",
                "Options:\n",
                "    --count - Number of copies\n",
                "    --force",
            )
        );
    }

    #[test]
    fn no_usage_block_without_a_command_name() {
        let help = Help::new(vec![Flag::new("force").boxed()]);
        assert_eq!(help.to_string(), "Options:\n    --force");
    }

    #[test]
    fn group_help_lists_commands() {
        let help = Help::for_group(vec!["build".into(), "clean".into()]).reraise("tool");
        assert_eq!(
            help.to_string(),
            concat!(
                "Usage:\n",
                "\n",
                "    tool\n",
                "\n",
                "Commands:\n",
                "\n",
                "    + build\n",
                "    + clean\n",
            )
        );
    }

    #[test]
    fn reraise_builds_the_path_outwards() {
        let help = Help::new(vec![]).reraise("push").reraise("remote");
        assert_eq!(help.command(), ["remote", "push"]);
    }

    #[test]
    fn writer_output_ends_with_a_newline() {
        let mut buf = vec![];
        write_help(&mut buf, &Help::new(descriptors())).unwrap();
        let result = String::from_utf8(buf).unwrap();
        assert!(result.ends_with("--force\n"));
    }
}
