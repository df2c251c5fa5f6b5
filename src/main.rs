use clap::Parser;
use collect_values::cli::commands::cmd_collect;
use collect_values::cli::config::{Cli, Commands, load_config};
use collect_values::set_default_process_options;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());
    set_default_process_options(config.defaults);

    match cli.command {
        Commands::Collect {
            document,
            containers,
            options,
            pretty,
            write_document,
        } => {
            let json = cmd_collect(
                &document,
                &containers,
                options.as_deref(),
                pretty || config.output.pretty,
                write_document.as_deref(),
            )?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean JSON. `RUST_LOG` still applies.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("collect_values={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
