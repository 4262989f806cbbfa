use clap::Parser;
use fa2ms::{
    cli::commands::{
        list::ListCommand, options::OptionsCommand, serve::ServeCommand, show::ShowCommand,
        CommandHandler,
    },
    cli::{Cli, Commands},
    config::Config,
    logging, Result,
};
use tracing::debug;

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level.to_filter_directive().to_string();
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    logging::init(&config.logging);

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            Box::new(ServeCommand::new(config.server))
        }
        Commands::List { filters, json } => {
            Box::new(ListCommand::new(filters.into_selection(), json))
        }
        Commands::Show { id, json } => Box::new(ShowCommand::new(id, json)),
        Commands::Options => Box::new(OptionsCommand),
    };

    debug!(command = command.name(), "Executing command");
    command.execute()
}
