//! Integrated tests for amp-event

use crate::engine::InterfaceEngine;
use crate::sink::{AsciiSink, EventSink};
use amp_core::prelude::*;

fn open_sink() -> Box<AsciiSink> {
    let mut sink = AsciiSink::new();
    sink.open();
    Box::new(sink)
}

#[test]
fn test_engine_without_sink_reports_failure() {
    let mut engine = InterfaceEngine::new();
    let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
    assert!(!engine.add_momentum(&p, "p_out"));
    assert!(!engine.add_value(1.5, "weight"));
    assert!(!engine.add_int(3, "channel"));
    assert!(!engine.add_bool(true, "accepted"));
    assert!(!engine.write_event());
    assert_eq!(engine.event_size(), 0);
}

#[test]
fn test_event_size_counts_registered_bytes() {
    let mut engine = InterfaceEngine::with_sink(open_sink());
    let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
    assert!(engine.add_momentum(&p, "p_out"));
    assert!(engine.add_value(1.5, "weight"));
    assert!(engine.add_int(3, "channel"));
    assert!(engine.add_bool(true, "accepted"));
    assert_eq!(engine.event_size(), 32 + 8 + 4 + 1);

    // Refilling existing columns does not grow the record size.
    assert!(engine.add_value(2.5, "weight"));
    assert_eq!(engine.event_size(), 45);
}

#[test]
fn test_closed_sink_refuses_operations() {
    let mut sink = AsciiSink::new();
    assert!(!sink.branch_value("x"));
    sink.open();
    assert!(sink.branch_value("x"));
    assert!(sink.fill_value("x", 1.0));
    sink.close();
    assert!(!sink.fill_value("x", 2.0));
    assert!(!sink.write_event());
}

#[test]
fn test_duplicate_branch_is_rejected() {
    let mut sink = AsciiSink::new();
    sink.open();
    assert!(sink.branch_value("x"));
    assert!(!sink.branch_value("x"));
}

#[test]
fn test_fill_requires_matching_kind() {
    let mut sink = AsciiSink::new();
    sink.open();
    assert!(sink.branch_value("x"));
    assert!(!sink.fill_int("x", 1));
    assert!(!sink.fill_value("y", 1.0));
}

#[test]
fn test_engine_commits_records() {
    let mut engine = InterfaceEngine::with_sink(open_sink());
    let p = Momentum::new(10.0, 0.0, 0.0, 8.0);
    assert!(engine.add_momentum(&p, "p"));
    assert!(engine.write_event());
    assert!(engine.detach().is_some());
    assert!(!engine.write_event());
}

#[test]
fn test_ascii_table_output() {
    let mut sink = AsciiSink::new();
    sink.open();
    let p = Momentum::new(10.0, 0.0, 0.0, 8.0);

    assert!(sink.branch_momentum("p"));
    assert!(sink.branch_value("w"));
    assert!(sink.branch_bool("cut"));

    sink.fill_momentum("p", &p);
    sink.fill_value("w", 0.25);
    sink.fill_bool("cut", false);
    assert!(sink.write_event());

    sink.fill_value("w", RValue::INFINITY);
    sink.fill_bool("cut", true);
    assert!(sink.write_event());
    assert_eq!(sink.events(), 2);

    let mut out = Vec::new();
    sink.dump(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("# p w cut"));
    assert_eq!(lines.next(), Some("10 0 0 8 0.25 0"));
    assert_eq!(lines.next(), Some("10 0 0 8 P 1"));
}
