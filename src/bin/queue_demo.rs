use std::io::{self, Write};
use std::process::ExitCode;

use linkedqueue::logging::{self, LoggingConfig};
use linkedqueue::{EmptyQueueError, LinkedQueue};
use log::{info, warn};
use thiserror::Error;


#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Queue(#[from] EmptyQueueError),
    #[error("could not write output")]
    Output(#[from] io::Error),
}

/// Fills a queue with a fixed sequence and drains it, writing each front value to `out`.
fn run(out: &mut impl Write) -> Result<(), DemoError> {
    let mut queue = LinkedQueue::new();
    for val in [4, 6, 7, 2, 8, 8] {
        queue.push(val);
    }
    info!("Pushed {} values", queue.len());

    while !queue.is_empty() {
        writeln!(out, "Value: {}", queue.front()?)?;
        queue.pop()?;
    }
    Ok(())
}

fn report(result: Result<(), DemoError>, err: &mut impl Write) {
    if let Err(e) = result {
        warn!("Demo stopped early: {e}");
        let _ = writeln!(err, "Error! Cause: {e}");
    }
}

fn main() -> ExitCode {
    match LoggingConfig::from_env("QUEUE_DEMO").and_then(|config| logging::init(&config)) {
        Ok(()) => {}
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    report(run(&mut io::stdout().lock()), &mut io::stderr().lock());
    // a reported error still counts as a successful run
    ExitCode::SUCCESS
}
