use clap::Parser;
use env_logger::Env;
use krs_finder::Finder;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Error: {}", e);
            return;
        }
    };

    // Errors end the run without a failure exit status
    if let Err(e) = Finder::new(config).run().await {
        ::log::error!("Error: {}", e);
    }
}
