//! Development harness for the platform channel.
//!
//! Reads one JSON method call per line from stdin, dispatches it, and prints
//! the outcome. Stands in for the engine-side transport when poking at the
//! channel by hand:
//!
//! ```text
//! $ echo '{"method":"HapticFeedback.vibrate","args":["HapticFeedbackType.lightImpact"]}' \
//!     | platform-channel
//! ```

use std::io::BufRead;

use anyhow::Result;
use platform_channel::channel::CHANNEL_NAME;
use platform_channel::PlatformChannel;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let channel = PlatformChannel::new();
    tracing::info!("Serving {CHANNEL_NAME} method calls from stdin");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let outcome = channel.handle_message(&line);
        println!("{outcome:?}");
    }

    Ok(())
}
