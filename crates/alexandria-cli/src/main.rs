mod citations_cmd;
mod cli;
mod figures_cmd;
mod info_cmd;
mod page_range;
mod references_cmd;
mod search_cmd;
mod section_cmd;
mod shared;
mod title_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let options = cli.extract.to_options();

    let result = match cli.command {
        cli::Commands::Title { ref file, format } => title_cmd::run(file, format, options),
        cli::Commands::Section {
            ref file,
            ref name,
            format,
        } => section_cmd::run(file, name, format, options),
        cli::Commands::References {
            ref file,
            urls,
            format,
        } => references_cmd::run(file, urls, format, options),
        cli::Commands::Citations {
            ref file,
            ref pages,
            format,
        } => citations_cmd::run(file, pages.as_deref(), format, options),
        cli::Commands::Search {
            ref file,
            ref text,
            ref pages,
            format,
        } => search_cmd::run(file, text, pages.as_deref(), format, options),
        cli::Commands::Figures {
            ref file,
            ref pages,
            format,
        } => figures_cmd::run(file, pages.as_deref(), format, options),
        cli::Commands::Info {
            ref file,
            ref pages,
            format,
        } => info_cmd::run(file, pages.as_deref(), format, options),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
