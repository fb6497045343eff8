//! Paint the stickers of a Rubik's Cube and export its assembly animation.

mod cli;
mod paint;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    color_eyre::install()?;

    cli::exec(args)
}
