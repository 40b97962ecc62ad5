use anyhow::{Context, Result};
use pbs_draw::Session;
use rand::Rng;
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::{print_error, print_success, print_warning, SessionArgs};
use crate::chart;
use crate::config::Config;
use crate::display::{
    render_history, render_purchase, render_session, render_tally, INVALID_TICKET_MESSAGE,
};
use crate::scheduler::AutoPurchase;
use crate::shell::{ShellCommand, ShellError, HELP};

/// Whether the shell keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive shell
pub fn run(config_path: &Path, args: &SessionArgs) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start event loop")?;
    rt.block_on(run_async(config, args))
}

async fn run_async(config: Config, args: &SessionArgs) -> Result<()> {
    let mut session = args.build_session(&config);
    let mut auto = AutoPurchase::new(session.auto_interval());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Powerball Simulator\n");
    println!("{}\n", HELP);
    println!("{}", render_session(&session));
    prompt();

    loop {
        tokio::select! {
            tick = auto.tick() => {
                if on_tick(&mut session, tick) {
                    prompt();
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                match line.parse::<ShellCommand>() {
                    Ok(command) => {
                        if apply(&mut session, &mut auto, command) == Flow::Quit {
                            break;
                        }
                    }
                    Err(ShellError::Empty) => {}
                    Err(e) => print_error(&e.to_string()),
                }
                prompt();
            }
            result = tokio::signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl-C")?;
                info!("Interrupted");
                break;
            }
        }
    }

    auto.stop();
    args.export_chart(&session)
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Handle one auto-purchase tick. Returns whether anything was printed, in
/// which case the caller redraws the prompt.
///
/// An invalid ticket is reported once, when it first fails, rather than on
/// every tick; the timer keeps running so fixing the ticket resumes buying.
pub fn on_tick<R: Rng>(session: &mut Session<R>, tick: u64) -> bool {
    debug!(tick, "Auto-purchase tick");
    let was_valid = session.last_purchase_valid();
    match session.buy() {
        Ok(outcome) => {
            println!("\n[auto {}] {}", tick, render_purchase(&outcome));
            true
        }
        Err(e) if was_valid => {
            print_error(&e.to_string());
            print_warning(INVALID_TICKET_MESSAGE);
            true
        }
        Err(_) => false,
    }
}

/// Apply a shell command to the session and timer
pub fn apply<R: Rng>(
    session: &mut Session<R>,
    auto: &mut AutoPurchase,
    command: ShellCommand,
) -> Flow {
    match command {
        ShellCommand::Buy(count) => {
            let count = count.unwrap_or(session.tickets_per_purchase());
            match session.buy_tickets(count) {
                Ok(outcome) => println!("{}", render_purchase(&outcome)),
                Err(e) => {
                    print_error(&e.to_string());
                    print_warning(INVALID_TICKET_MESSAGE);
                }
            }
        }
        ShellCommand::Ticket(ticket) => {
            if let Err(e) = ticket.validate() {
                print_warning(&format!("{} (purchases will be rejected)", e));
            }
            session.set_ticket(ticket);
            println!("Your ticket: {}", session.ticket());
        }
        ShellCommand::Number { index, value } => {
            if session.set_number(index, value) {
                println!("Your ticket: {}", session.ticket());
            } else {
                print_error(&format!("Your ticket has no number {}", index + 1));
            }
        }
        ShellCommand::Bonus(value) => {
            session.set_bonus(value);
            println!("Your ticket: {}", session.ticket());
        }
        ShellCommand::Count(count) => {
            let stored = session.set_tickets_per_purchase(count);
            println!("Tickets per purchase: {}", stored);
        }
        ShellCommand::Interval(interval) => {
            let stored = session.set_auto_interval(interval);
            auto.set_period(stored);
            println!("Auto-purchase interval: {} ms", stored.as_millis());
        }
        ShellCommand::Auto(true) => {
            auto.start();
            print_success(&format!(
                "Auto-purchase on, every {} ms",
                auto.period().as_millis()
            ));
        }
        ShellCommand::Auto(false) => {
            if auto.stop() {
                print_success("Auto-purchase off");
            }
        }
        ShellCommand::Stats => println!("{}", render_session(session)),
        ShellCommand::History => println!("{}", render_history(session.history())),
        ShellCommand::Wins => println!("{}", render_tally(session.tally())),
        ShellCommand::Chart(path) => {
            if let Err(e) = chart::export(session.chart(), &path) {
                print_error(&format!("{:#}", e));
            }
        }
        ShellCommand::Reset => {
            session.reset();
            print_success("Session reset");
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}
