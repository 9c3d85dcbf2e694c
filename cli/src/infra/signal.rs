//! Interrupt handling.

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Token cancelled on the first Ctrl-C.
///
/// Long-running operations select on the token and run their cleanup
/// instead of being killed mid-flight.
#[must_use]
pub fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received");
            trigger.cancel();
        }
    });
    token
}
