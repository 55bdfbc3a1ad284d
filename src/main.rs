use std::env;

use clap::Parser;
use dotenvy::dotenv;

use studio_admin::cli::Args;
use studio_admin::models::config::ClientConfig;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let client_config = match ClientConfig::load(&args.config_dir, &app_env) {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = studio_admin::run(client_config, args.page).await {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
