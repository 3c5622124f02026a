// tests/emitter_integration.rs
//! Integration tests for the emission loop and its wire output

use pulse_emulator::config::EmulatorConfig;
use pulse_emulator::telemetry::decode_line;
use pulse_emulator::{MockTimeProvider, SerialEmitter, TelemetryRecord, WriterSink};
use std::sync::Arc;

const STEP_NANOS: u64 = 2_000_000;

fn capture(iterations: usize, start_nanos: u64) -> Vec<String> {
    let clock = Arc::new(MockTimeProvider::new(start_nanos));
    let mut emitter = SerialEmitter::with_clock(
        WriterSink::memory(),
        Arc::clone(&clock),
        &EmulatorConfig::default(),
    );

    for _ in 0..iterations {
        emitter.step().expect("Failed to step");
        clock.advance_by(STEP_NANOS);
    }

    emitter
        .into_sink()
        .lines()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_every_line_is_a_valid_record() {
    let lines = capture(3_000, 0);
    assert!(lines.len() >= 3_000);

    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).expect("Line is not JSON");
        let object = value.as_object().expect("Line is not an object");
        assert_eq!(object.len(), 2, "unexpected keys in {}", line);

        match object["type"].as_str() {
            Some("sample") => assert!(object["v"].is_i64(), "{}", line),
            Some("bpm") => assert!(object["bpm"].is_i64(), "{}", line),
            other => panic!("unexpected type {:?} in {}", other, line),
        }
    }
}

#[test]
fn test_values_stay_in_range() {
    for line in capture(10_000, 0) {
        match decode_line(line.as_bytes()).expect("Failed to decode") {
            TelemetryRecord::Sample { v } => assert!((-110..=230).contains(&v), "sample {}", v),
            TelemetryRecord::Bpm { bpm } => assert!((65..=75).contains(&bpm), "bpm {}", bpm),
        }
    }
}

#[test]
fn test_bpm_follows_its_sample() {
    let records: Vec<_> = capture(2_500, 0)
        .iter()
        .map(|line| decode_line(line.as_bytes()).expect("Failed to decode"))
        .collect();

    assert!(matches!(records[0], TelemetryRecord::Sample { .. }));
    for pair in records.windows(2) {
        if let TelemetryRecord::Bpm { .. } = pair[1] {
            assert!(matches!(pair[0], TelemetryRecord::Sample { .. }));
        }
    }

    let samples = records.iter().filter(|r| r.kind() == "sample").count();
    let bpm = records.iter().filter(|r| r.kind() == "bpm").count();
    assert_eq!(samples, 2_500);
    // t in [0, 1), [2, 3) and [4, 5): 500 iterations each
    assert_eq!(bpm, 1_500);
}

#[test]
fn test_first_lines_at_start() {
    let lines = capture(1, 0);
    assert_eq!(
        lines,
        vec![
            "{\"type\":\"sample\",\"v\":120}".to_string(),
            "{\"type\":\"bpm\",\"bpm\":70}".to_string(),
        ]
    );
}

#[test]
fn test_fresh_start_reproduces_sequence() {
    // Output depends only on elapsed time, not on the absolute clock
    let first = capture(1_200, 0);
    let second = capture(1_200, 1_700_000_000_000_000_000);
    assert_eq!(first, second);
}
