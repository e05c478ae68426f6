use std::sync::Arc;

use careergate::config::{load_config, print_schema};
use careergate::startup;
use careergate::utils::logger::init_logging;

/// Entrypoint: `careergate [--schema] [PATH ...]`.
///
/// With `--schema`, prints the configuration JSON schema and exits.
/// Otherwise loads `./config.yaml`, bootstraps the session and resolves
/// each PATH argument through the navigation tree.
#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    let paths: Vec<String> = args.into_iter().filter(|arg| !arg.starts_with("--")).collect();
    if let Err(e) = startup::run(config, &paths).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
