mod actions;
mod builder;
mod catalog;
mod config;
mod error;
mod fs;
mod payloads;
mod script;
mod types;
use actions::action_generate;
use anyhow::Result;
use config::Config;
use seahorse::App;
use std::env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = env::args().collect();
    let app = Config::flags().into_iter().fold(
        App::new(env!("CARGO_PKG_NAME"))
            .description(env!("CARGO_PKG_DESCRIPTION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .version(env!("CARGO_PKG_VERSION"))
            .usage("famtree-collection [--output <dir>] [--base-url <url>] [--stdout]")
            .action(action_generate),
        |app, flag| app.flag(flag),
    );
    app.run(args);
    Ok(())
}
