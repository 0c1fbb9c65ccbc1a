mod commands;
mod terminal;

use commands::{CommandLine, run};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet, commands.json);

    let cfg = commands.to_config();

    if !commands.json {
        print::header("reporting host addresses");
    }
    run::run(&cfg, commands.json).await
}
