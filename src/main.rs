use std::io;
use std::process;

use clap::Parser;
use colored::Colorize;
use ordtree::cli::Cli;
use ordtree::error::MenuResult;
use ordtree::exitcode;
use ordtree::menu::{Command, Session};
use ordtree::OrderedTree;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let code = match run(&cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(cli: &Cli) -> MenuResult<()> {
    let tree: OrderedTree = cli.keys.iter().copied().collect();
    info!(keys = tree.len(), "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(tree, stdin.lock(), stdout.lock()).quiet(cli.quiet);
    session.run()?;

    if let Some(order) = cli.dump {
        session.execute(Command::Traverse(order))?;
    }
    info!(keys = session.tree().len(), "session ended");
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Logs go to stderr so they never interleave with the menu on stdout.
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
