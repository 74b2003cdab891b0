//! CLI entry point for the Mondrian wallpaper generator

use clap::Parser;
use mondrian::io::cli::{Cli, WallpaperRunner};

fn main() -> mondrian::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = WallpaperRunner::new(cli);
    runner.process()
}
