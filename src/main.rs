mod cli;
mod color;
mod data;
mod pipeline;
mod plot;
mod style;

use clap::Parser;

use cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    pipeline::run(&args)
}
