use litmus_benchmark::args::CliArgs;
use litmus_benchmark::errors::Result;
use litmus_benchmark::{banner, runner};

#[tokio::main]
async fn main() {
    // Print the startup banner
    banner::print_banner();

    // A .env file is optional; the environment alone is fine.
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = CliArgs::from_args(std::env::args())?;
    runner::run(args).await
}
