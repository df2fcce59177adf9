use shiftargs::{command3, run, Argument, Flag, NamedOption};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let app = command3(
        Argument::<String>::new("name"),
        NamedOption::new("count", 1u32).with_description("How many times to greet"),
        Flag::new("verbose")
            .with_short('v')
            .with_description("If to be loud"),
        |name, count, verbose| {
            for _ in 0..count {
                if verbose {
                    println!("HELLO {}!", name.to_uppercase());
                } else {
                    println!("Hello {name}");
                }
            }
            Ok(())
        },
    );

    run(app)
}
