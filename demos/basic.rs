//! Demo program: a nested command tree with inherited options.
//!
//! Try:
//!   cargo run --example basic -- list --local
//!   cargo run --example basic -- push origin --url=https://example.org
//!   cargo run --example basic -- --help

use cmdtree::{print_table, Cli, Command, Opt};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    setup_logging();

    let mut cli = Cli::with_handler(|_cmd, opts| {
        let rows: Vec<Vec<String>> = opts
            .iter()
            .map(|(name, opt)| {
                let opt = opt.borrow();
                vec![name.clone(), opt.alias.clone(), opt.value.clone()]
            })
            .collect();
        print_table(&["OPTION", "ALIAS", "VALUE"], &rows);
    });
    cli.set_version("1.0.0");
    cli.command.set_default_config_option();

    let mut list = Command::new("list");
    list.usage = "List the configuration.".to_string();
    list.add_option("local", Opt::flag("l", "Only consider local entries."));
    list.set_handler(|_cmd, opts| {
        let local = opts["local"].borrow().present;
        println!("Started list (local: {})", local);
    });
    cli.command.add_command(list);

    let mut push = Command::new("push");
    push.usage = "Push the source code.".to_string();

    let mut origin = Command::new("origin");
    origin.usage = "Push the source code to the origin.".to_string();
    origin.add_option(
        "url",
        Opt::new("u", "Remote to push to.").with_default("https://example.com"),
    );
    origin.set_handler(|_cmd, opts| {
        println!("Started push origin: {}", opts["url"].borrow().value);
    });
    push.add_command(origin);
    cli.command.add_command(push);

    cli.run();
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();
}
