// Copyright (c) 2024 Botho Foundation
//
//! Session Flow Integration Tests
//!
//! Drives the simulator the way the CLI does:
//! - Config file written, reloaded and turned into a session
//! - Manual and timed purchases feeding the same totals
//! - Chart export of the resulting net-gain series

use std::{fs, time::Duration};

use pbs_draw::{DrawMode, Ticket, MAX_HISTORY_SIZE, TICKET_PRICE};
use pbs_simulator::{
    chart,
    commands::{auto::drive, SessionArgs},
    config::Config,
    display::{render_session, INVALID_TICKET_MESSAGE},
    scheduler::AutoPurchase,
};
use tempfile::TempDir;
use tokio::time::Instant;

fn seeded_config(dir: &TempDir) -> Config {
    let mut config = Config {
        seed: Some(2024),
        ..Default::default()
    };
    config.ticket.numbers = vec![7, 14, 21, 28, 35];
    config.ticket.bonus = 10;
    config.purchase.tickets_per_purchase = 250;
    config.auto.interval_ms = 20;

    config
        .save(&dir.path().join("config.toml"))
        .expect("save config");
    config
}

#[test]
fn test_config_round_trip_builds_same_session() {
    let dir = TempDir::new().unwrap();
    let written = seeded_config(&dir);
    let loaded = Config::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(written, loaded);

    let mut first = SessionArgs::default().build_session(&loaded);
    let mut second = SessionArgs::default().build_session(&loaded);
    assert_eq!(first.ticket(), &Ticket::new([7, 14, 21, 28, 35], 10));

    let a = first.buy().unwrap();
    let b = second.buy().unwrap();
    assert_eq!(a.last_ticket, b.last_ticket);
    assert_eq!(a.winnings, b.winnings);
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn test_manual_purchases_accumulate() {
    let dir = TempDir::new().unwrap();
    let config = seeded_config(&dir);
    let mut session = SessionArgs::default().build_session(&config);

    session.buy().unwrap();
    session.buy_tickets(1_000).unwrap();

    let stats = session.stats();
    assert_eq!(stats.tickets_bought, 1_250);
    assert_eq!(stats.money_spent, 1_250 * TICKET_PRICE);
    assert_eq!(stats.net_gain, stats.money_won as i64 - stats.money_spent as i64);
    assert_eq!(stats.years, 1_250 / 104);

    assert_eq!(session.history().len(), MAX_HISTORY_SIZE);
    assert_eq!(session.history().total_pushed(), 1_250);
    assert!(session.tally().total_wins() <= stats.tickets_bought);
    assert_eq!(session.chart().len(), 2);
}

#[test]
fn test_invalid_ticket_is_reported_and_recovers() {
    let dir = TempDir::new().unwrap();
    let config = seeded_config(&dir);
    let args = SessionArgs {
        ticket: Some(Ticket::new([1, 2, 3, 4, 70], 6)),
        ..Default::default()
    };
    let mut session = args.build_session(&config);

    assert!(session.buy().is_err());
    assert!(render_session(&session).contains(INVALID_TICKET_MESSAGE));
    assert_eq!(session.stats().money_spent, 0);
    assert!(session.history().is_empty());

    assert!(session.set_number(4, 69));
    session.buy().unwrap();
    assert!(!render_session(&session).contains(INVALID_TICKET_MESSAGE));
}

#[test]
fn test_chart_export_from_session() {
    let dir = TempDir::new().unwrap();
    let config = seeded_config(&dir);
    let args = SessionArgs {
        count: Some(10),
        draw_mode: Some(DrawMode::Independent),
        chart: Some(dir.path().join("charts/net.csv")),
        ..Default::default()
    };
    let mut session = args.build_session(&config);
    for _ in 0..3 {
        session.buy().unwrap();
    }
    args.export_chart(&session).unwrap();

    let csv = fs::read_to_string(dir.path().join("charts/net.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "x,y");
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("30,"));

    let json_path = dir.path().join("net.json");
    chart::export(session.chart(), &json_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(value["points"][2]["x"], 30.0);
}

#[tokio::test(start_paused = true)]
async fn test_timed_purchases_follow_interval() {
    let dir = TempDir::new().unwrap();
    let config = seeded_config(&dir);
    let mut session = SessionArgs::default().build_session(&config);
    session.buy().unwrap();

    let mut auto = AutoPurchase::new(session.auto_interval());
    let start = Instant::now();
    let handled = drive(&mut session, &mut auto, Some(5)).await.unwrap();

    assert_eq!(handled, 5);
    assert_eq!(Instant::now() - start, Duration::from_millis(100));
    assert_eq!(session.stats().tickets_bought, 6 * 250);
    assert!(!auto.is_active());
}
