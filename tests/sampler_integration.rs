//! Integration tests for the sample → map → report cycle.
//!
//! Drives the [`SamplerService`] through mock ports and asserts on the
//! full emitted line history, host-side parsing, and structured events.

#![cfg(not(target_os = "espidf"))]

use contisense::app::events::AppEvent;
use contisense::app::ports::{EventSink, ProbePort, ReportSink};
use contisense::app::service::SamplerService;
use contisense::app::verdict::Verdict;
use contisense::config::SystemConfig;
use contisense::{ReportError, SensorError};

// ── Mock ports ────────────────────────────────────────────────

/// Probe fed from a scripted level sequence; repeats the final level
/// once the script runs out.
struct ScriptedProbe {
    levels: Vec<bool>,
    cursor: usize,
}

impl ScriptedProbe {
    fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            cursor: 0,
        }
    }
}

impl ProbePort for ScriptedProbe {
    fn sample_level(&mut self) -> Result<bool, SensorError> {
        let level = *self
            .levels
            .get(self.cursor)
            .or_else(|| self.levels.last())
            .expect("scripted probe needs at least one level");
        self.cursor += 1;
        Ok(level)
    }
}

/// Report sink that records the exact wire bytes.
#[derive(Default)]
struct RecordingSink {
    stream: String,
}

impl ReportSink for RecordingSink {
    fn emit(&mut self, verdict: Verdict) -> Result<(), ReportError> {
        self.stream.push_str(verdict.as_line());
        Ok(())
    }
}

/// Event sink that keeps every structured event.
#[derive(Default)]
struct EventRecorder {
    events: Vec<AppEvent>,
}

impl EventSink for EventRecorder {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

fn run_cycles(levels: &[bool], cycles: usize) -> (String, Vec<AppEvent>) {
    let mut svc = SamplerService::new(SystemConfig::default());
    let mut probe = ScriptedProbe::new(levels);
    let mut sink = RecordingSink::default();
    let mut events = EventRecorder::default();

    for _ in 0..cycles {
        svc.tick(&mut probe, &mut sink, &mut events);
    }
    (sink.stream, events.events)
}

// ── Spec scenarios ────────────────────────────────────────────

#[test]
fn input_held_low_emits_all_ones() {
    let (stream, _) = run_cycles(&[false], 50);
    assert_eq!(stream, "1\n".repeat(50));
}

#[test]
fn input_held_high_emits_all_zeros() {
    let (stream, _) = run_cycles(&[true], 50);
    assert_eq!(stream, "0\n".repeat(50));
}

#[test]
fn high_to_low_transition_reflected_next_cycle() {
    let (stream, _) = run_cycles(&[true, true, false], 4);
    assert_eq!(stream, "0\n0\n1\n1\n");
}

#[test]
fn one_line_per_cycle() {
    let levels = [true, false, true, false, false, true];
    let (stream, _) = run_cycles(&levels, levels.len());
    assert_eq!(stream.matches('\n').count(), levels.len());
}

#[test]
fn no_hysteresis_on_bounce() {
    // Un-debounced by design: every raw bounce shows up in the stream.
    let (stream, _) = run_cycles(&[false, true, false, true], 4);
    assert_eq!(stream, "1\n0\n1\n0\n");
}

// ── Structured events ─────────────────────────────────────────

#[test]
fn started_event_carries_first_verdict() {
    let (_, events) = run_cycles(&[false], 3);
    assert!(matches!(events[0], AppEvent::Started(Verdict::Continuity)));
}

#[test]
fn verdict_change_events_fire_only_on_transitions() {
    let (_, events) = run_cycles(&[true, true, false, false, true], 5);
    let changes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            AppEvent::VerdictChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        changes,
        vec![
            (Verdict::Open, Verdict::Continuity),
            (Verdict::Continuity, Verdict::Open),
        ]
    );
}

// ── Host-side interpretation (Multimeter-style reader) ────────

#[test]
fn host_parser_reconstructs_the_stream() {
    let levels = [true, false, false, true];
    let (stream, _) = run_cycles(&levels, levels.len());

    let parsed: Vec<Verdict> = stream
        .lines()
        .map(|l| Verdict::parse_line(l).expect("well-formed line"))
        .collect();
    let expected: Vec<Verdict> = levels.iter().map(|&h| Verdict::from_level(h)).collect();
    assert_eq!(parsed, expected);
}
