use clap::Parser;
use subbi::cli::{Cli, Commands};
use subbi::{Config, run};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match (&cli.command, &cli.config) {
        (Some(Commands::Init), _) => Config::default(),
        (_, Some(path)) => Config::load_from_path(path)?,
        (_, None) => Config::load()?,
    };
    config.validate()?;

    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(cli, config))
}
