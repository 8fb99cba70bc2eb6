mod commands;
mod terminal;

use commands::{CommandLine, Commands, adapters, apply, fastest, flush};
use netswitch_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
    };
    print::banner(&cfg);

    match commands.command {
        Commands::Adapters => {
            print::header("network adapters", &cfg);
            adapters::adapters().await
        }
        Commands::Apply {
            preset,
            primary,
            secondary,
            adapter,
        } => {
            print::header("applying dns", &cfg);
            apply::apply(preset, primary, secondary, adapter).await
        }
        Commands::Flush => {
            print::header("flushing resolver cache", &cfg);
            flush::flush().await
        }
        Commands::Fastest => {
            print::header("probing resolvers", &cfg);
            fastest::fastest().await
        }
    }
}
