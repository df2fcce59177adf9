use anyhow::bail;
use shiftargs::{
    command1, command2, command3, run, Argument, Flag, Group, MultiOption, NamedOption,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let remote = Group::new()
        .add_command(
            "add",
            command2(
                Argument::<String>::new("name"),
                Argument::<String>::new("url"),
                |name, url| {
                    println!("added remote {name} -> {url}");
                    Ok(())
                },
            ),
        )
        .add_command(
            "remove",
            command1(Argument::<String>::new("name"), |name| {
                if name == "origin" {
                    bail!("refusing to remove `origin`");
                }
                println!("removed remote {name}");
                Ok(())
            }),
        );

    let app = Group::new()
        .add_command(
            "commit",
            command3(
                NamedOption::new("message", String::new()).with_description("The commit message"),
                Flag::new("all")
                    .with_short('a')
                    .with_description("Stage every modified file first"),
                MultiOption::<String>::new("author", vec![], 2)
                    .with_description("Name and email of the author"),
                |message: String, all: bool, author: Vec<String>| {
                    if message.is_empty() {
                        bail!("missing commit message");
                    }
                    println!("commit all={all} author={author:?}: {message}");
                    Ok(())
                },
            ),
        )
        .add_command(
            "add",
            command1(Argument::<Vec<PathBuf>>::new("paths"), |paths| {
                for path in paths {
                    println!("add {}", path.display());
                }
                Ok(())
            }),
        )
        .add_command("remote", remote);

    run(app)
}
