//! Terminal progress spinner shown while waiting on the model.
//!
//! The spinner runs on its own tokio task and only ever writes to the sink it
//! was given (stderr in production), so stdout stays clean for the commit
//! message. [`Spinner::stop`] does not return until the line has been erased.

use std::io::Write;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Animation frames, in order.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Time between frames.
pub const TICK: Duration = Duration::from_millis(100);

/// Handle to a running spinner task.
pub struct Spinner {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Start animating `message` on `sink`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<W>(message: impl Into<String>, sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(spin(message.into(), sink, stop_rx));
        Self { stop_tx, handle }
    }

    /// Signal the spinner to stop and wait until it has erased its line.
    pub async fn stop(self) {
        // The task may already be gone if it panicked; the join below reports that.
        let _ = self.stop_tx.send(());

        if let Err(e) = self.handle.await {
            warn!("Spinner task failed: {}", e);
        }
    }
}

async fn spin<W: Write>(message: String, mut sink: W, mut stop_rx: oneshot::Receiver<()>) {
    let mut frame = 0;
    emit(&mut sink, format_args!("{} {}", message, FRAMES[frame]));

    let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = ticker.tick() => {
                frame = (frame + 1) % FRAMES.len();
                emit(&mut sink, format_args!("\r{} {}", message, FRAMES[frame]));
            }
        }
    }

    // Byte length over-covers wide glyphs such as the robot emoji.
    let blank = " ".repeat(clear_width(&message));
    emit(&mut sink, format_args!("\r{}\r", blank));
}

/// Columns to blank out: message, separator space and one frame.
fn clear_width(message: &str) -> usize {
    message.len() + 2
}

fn emit<W: Write>(sink: &mut W, args: std::fmt::Arguments<'_>) {
    if let Err(e) = sink.write_fmt(args).and_then(|_| sink.flush()) {
        debug!("Spinner write failed: {}", e);
    }
}
