// Copyright (c) 2024 Botho Foundation

//! Terminal rendering of session state.
//!
//! Every `render_*` function returns a `String`; callers decide where to
//! print it.

use std::fmt::Write;

use pbs_draw::{PurchaseOutcome, Session, SessionStats, Tally, Ticket, TicketHistory};
use rand::Rng;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Message shown after a rejected purchase.
pub const INVALID_TICKET_MESSAGE: &str = "Please enter a valid ticket.";

/// Green for gains, red for losses, gray for zero.
pub fn color_for(value: i64) -> &'static str {
    match value.signum() {
        1 => GREEN,
        -1 => RED,
        _ => GRAY,
    }
}

/// Dollar amount with thousands separators, e.g. `-$1,234`.
pub fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Amount as a signed value, saturating at `i64::MAX`.
fn signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

fn row(out: &mut String, label: &str, value: &str, color: &str) {
    let _ = writeln!(out, "  {:<28} {}{}{}", label, color, value, RESET);
}

pub fn render_stats(stats: &SessionStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}Statistics{}", BOLD, RESET);
    row(
        &mut out,
        "Money Spent:",
        &format_dollars(signed(stats.money_spent)),
        color_for(-signed(stats.money_spent)),
    );
    row(
        &mut out,
        "Money Won:",
        &format_dollars(signed(stats.money_won)),
        color_for(signed(stats.money_won)),
    );
    row(
        &mut out,
        "Net Gain/Loss:",
        &format_dollars(stats.net_gain),
        color_for(stats.net_gain),
    );
    row(
        &mut out,
        "Years (2 tickets per week):",
        &stats.years.to_string(),
        GRAY,
    );
    row(
        &mut out,
        "Winnings:",
        &format!("{:.2}%", stats.winnings_percent),
        GRAY,
    );
    row(&mut out, "Tickets Bought:", &stats.tickets_bought.to_string(), GRAY);
    out
}

pub fn render_ticket(label: &str, ticket: &Ticket) -> String {
    format!("{}{}:{} {}\n", BOLD, label, RESET, ticket)
}

pub fn render_history(history: &TicketHistory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}Ticket History:{}", BOLD, RESET);
    if history.is_empty() {
        let _ = writeln!(out, "  (none yet)");
    }
    for (ordinal, ticket) in history.numbered() {
        let _ = writeln!(out, "  Ticket {}: {}", ordinal, ticket);
    }
    out
}

pub fn render_tally(tally: &Tally) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}Wins{}", BOLD, RESET);
    for (tier, count) in tally.iter() {
        let _ = writeln!(
            out,
            "  {:<22} {:>14}  x {}",
            tier.label(),
            format_dollars(signed(tier.prize())),
            count
        );
    }
    out
}

/// One-line summary of a purchase, e.g. for each auto-purchase tick.
pub fn render_purchase(outcome: &PurchaseOutcome) -> String {
    let net = signed(outcome.winnings).saturating_sub(signed(outcome.cost));
    let best = outcome
        .best_tier()
        .map(|tier| format!(", best: {}", tier.label()))
        .unwrap_or_default();
    format!(
        "Bought {} ticket(s) for {}, won {} ({}{}{}){}; last draw {}",
        outcome.tickets,
        format_dollars(signed(outcome.cost)),
        format_dollars(signed(outcome.winnings)),
        color_for(net),
        format_dollars(net),
        RESET,
        best,
        outcome.last_ticket
    )
}

/// Full session view: validation message, statistics, tickets, history and wins.
pub fn render_session<R: Rng>(session: &Session<R>) -> String {
    let mut out = String::new();
    if !session.last_purchase_valid() {
        let _ = writeln!(out, "{}{}{}", RED, INVALID_TICKET_MESSAGE, RESET);
        out.push('\n');
    }
    out.push_str(&render_stats(&session.stats()));
    out.push('\n');
    out.push_str(&render_ticket("Your Ticket", session.ticket()));
    if let Some(winning) = session.last_winning() {
        out.push_str(&render_ticket("Last Winning Ticket", winning));
    }
    out.push('\n');
    out.push_str(&render_history(session.history()));
    out.push('\n');
    out.push_str(&render_tally(session.tally()));
    out
}
