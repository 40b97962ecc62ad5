use anyhow::{Context, Result};
use pbs_draw::{PurchaseError, Session};
use rand::Rng;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::SessionArgs;
use crate::config::Config;
use crate::display::{render_purchase, render_session, INVALID_TICKET_MESSAGE};
use crate::scheduler::AutoPurchase;

/// Run the auto command: buy on a timer until `ticks` purchases or Ctrl-C.
///
/// Fails if the ticket is rejected, after showing the session.
pub fn run(
    config_path: &Path,
    args: &SessionArgs,
    interval_ms: Option<u64>,
    ticks: Option<u64>,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start event loop")?;
    rt.block_on(run_async(config, args, interval_ms, ticks))
}

async fn run_async(
    config: Config,
    args: &SessionArgs,
    interval_ms: Option<u64>,
    ticks: Option<u64>,
) -> Result<()> {
    let mut session = args.build_session(&config);
    if let Some(ms) = interval_ms {
        session.set_auto_interval(Duration::from_millis(ms));
    }
    let mut auto = AutoPurchase::new(session.auto_interval());

    info!(
        interval_ms = session.auto_interval().as_millis() as u64,
        tickets_per_purchase = session.tickets_per_purchase(),
        "Auto-purchase running, press Ctrl-C to stop"
    );

    let outcome = tokio::select! {
        result = drive(&mut session, &mut auto, ticks) => result.map(|_| ()),
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl-C")?;
            info!("Interrupted");
            Ok(())
        }
    };
    auto.stop();

    println!();
    println!("{}", render_session(&session));
    args.export_chart(&session)?;
    outcome.context(INVALID_TICKET_MESSAGE)
}

/// Buy once per tick until `limit` ticks have fired (forever if `None`).
///
/// Stops the timer and returns the error if the ticket is invalid. Returns
/// the number of ticks handled otherwise; a limit of 0 returns at once.
pub async fn drive<R: Rng>(
    session: &mut Session<R>,
    auto: &mut AutoPurchase,
    limit: Option<u64>,
) -> Result<u64, PurchaseError> {
    if limit == Some(0) {
        return Ok(0);
    }
    auto.start();
    let mut handled = 0;

    loop {
        let tick = auto.tick().await;
        debug!(tick, "Auto-purchase tick");

        let outcome = match session.buy() {
            Ok(outcome) => outcome,
            Err(e) => {
                auto.stop();
                return Err(e);
            }
        };
        handled += 1;
        println!("[{}] {}", tick, render_purchase(&outcome));

        if limit.is_some_and(|limit| handled >= limit) {
            auto.stop();
            return Ok(handled);
        }
    }
}
