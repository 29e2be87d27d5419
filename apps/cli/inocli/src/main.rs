use inocli::command::Command;
use inocli::error::InocliError;
use inocli::logger::{default_log_dir, initialize as LoggerInitialize, is_initialized};

use inoreader_core::{InoreaderClient, InoreaderConfig};

use std::env::args;
use std::fs::create_dir_all;
use std::process::ExitCode;

use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let report = format!("[{}] {e}", e.category());
            // The stderr dispatch already prints errors once the logger is up
            if is_initialized() {
                error!("{report}");
            } else {
                eprintln!("{report}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), InocliError> {
    let log_dir = default_log_dir();
    create_dir_all(&log_dir)
        .map_err(|e| InocliError::inocli(format!("Failed to create log directory: {e}")))?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;
    info!("Log directory: {}", log_dir.display());

    let command = Command::from_args(args().skip(1))?;
    let config = InoreaderConfig::load()?;

    let mut client = InoreaderClient::create(&config).await?;
    let output = command.execute(&client).await;
    client.close()?;

    println!("{}", output?);
    Ok(())
}
