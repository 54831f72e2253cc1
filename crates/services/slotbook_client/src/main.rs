// File: services/slotbook_client/src/main.rs
use slotbook_client::{Host, Step};
use slotbook_common::{config_error, init_from_config, SlotbookError};
use slotbook_config::{load_config, DirectoryConfig};
use slotbook_core::AvailabilitySynchronizer;
use slotbook_directory::HttpBookingDirectory;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SlotbookError> {
    let config = load_config().map_err(config_error)?;
    let _log_guard = init_from_config(&config.logging);

    // Without a [directory] section, talk to the backend configured in [server].
    let directory_config = config.directory.clone().unwrap_or_else(|| DirectoryConfig {
        base_url: format!("http://{}:{}", config.server.host, config.server.port),
        timeout_secs: None,
    });
    let directory = HttpBookingDirectory::from_config(&directory_config)?;
    info!("Using booking directory at {}", directory.base_url());

    let sync =
        AvailabilitySynchronizer::with_standard_slots(Arc::new(directory), config.booking.on_booked);
    let (mut host, mut completions) = Host::new(sync, config.booking.clone());

    println!("{}", slotbook_client::command::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match host.handle_line(&line) {
                    Step::Continue(message) if message.is_empty() => {}
                    Step::Continue(message) => println!("{message}"),
                    Step::Quit => break,
                }
            }
            Some(completion) = completions.recv() => {
                if let Some(message) = host.handle_completion(completion) {
                    println!("{message}");
                }
            }
        }
    }
    Ok(())
}
