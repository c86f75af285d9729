//! One-shot invocation: reads a request payload from stdin and prints the envelope.

use std::io::{self, Read, Write};

use dotenvy::dotenv;

use sort_notification::models::config::ServerConfig;
use sort_notification::repository::HttpNotificationRepository;
use sort_notification::services::notifications::handle_request;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    let mut payload = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut payload) {
        // An unreadable payload still gets an envelope: it fails to decode.
        log::error!("Failed to read request from stdin: {err}");
        payload.clear();
    }

    let repo = HttpNotificationRepository::from_config(&server_config);
    let response = handle_request(&repo, &payload);

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", response.to_json()) {
        log::error!("Failed to write response: {err}");
        std::process::exit(1);
    }
}
