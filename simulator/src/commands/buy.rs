use anyhow::{Context, Result};
use std::path::Path;

use super::SessionArgs;
use crate::config::Config;
use crate::display::{render_purchase, render_session, INVALID_TICKET_MESSAGE};

/// Run a single batch purchase and show the resulting session.
///
/// Fails if the ticket is rejected, after showing the session.
pub fn run(config_path: &Path, args: &SessionArgs) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let mut session = args.build_session(&config);

    let result = session.buy();
    if let Ok(outcome) = &result {
        println!("{}\n", render_purchase(outcome));
    }

    println!("{}", render_session(&session));
    args.export_chart(&session)?;
    result.map(|_| ()).context(INVALID_TICKET_MESSAGE)
}
