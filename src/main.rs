use clap::Parser;

use smart_chart::cli::{Cli, Commands};
use smart_chart::commands::{run_fetch, run_html, run_url, run_validate};
use smart_chart::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Url(args) => run_url(args, &cli),
        Commands::Html(args) => run_html(args, &cli),
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Fetch(args) => run_fetch(args, &cli),
    };

    std::process::exit(exit_code);
}
