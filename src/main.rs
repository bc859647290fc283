use anyhow::{Context, Result};
use claimguard::config::Config;
use claimguard::console;
use claimguard::kernel::event::Event;
use claimguard::Reactor;
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the rendered view
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!("ClaimGuard booting...");

    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx.clone(), &config);

    // Blocking stdin on its own thread so shutdown never waits on a read
    std::thread::spawn(move || {
        if let Err(e) = read_console(&tx) {
            tracing::error!("Console input stopped: {:#}", e);
        }
        let _ = tx.blocking_send(Event::Quit);
    });

    println!("Type 'help' for commands.");
    reactor.run().await;
    Ok(())
}

fn read_console(tx: &mpsc::Sender<Event>) -> Result<()> {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;

        match console::parse_line(&line) {
            Ok(Some(event)) => {
                tracing::debug!("Console input dispatched: '{}'", line.trim());
                tx.blocking_send(event).context("shell stopped")?;
            }
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}
