// playprobe-cli/src/interrupt.rs
//
// Ctrl-C / SIGTERM handling. A background thread runs a small current-thread
// tokio runtime that waits for either signal and raises a shared stop flag.
// Commands check the flag between files or frame steps, so the player session
// is still shut down through the normal path.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tokio::signal;

/// Installs the signal listener and returns the flag it raises.
pub fn install_stop_signal() -> Arc<AtomicBool> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);

    let spawned = thread::Builder::new()
        .name("playprobe-signals".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to start signal runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async move {
                loop {
                    wait_for_signal().await;
                    if flag.swap(true, Ordering::Relaxed) {
                        log::warn!("Already stopping; waiting for the current operation to finish");
                    } else {
                        log::warn!("Stop requested; finishing the current operation");
                    }
                }
            });
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn signal thread: {}", e);
    }
    stop
}

async fn wait_for_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
