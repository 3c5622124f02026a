// src/emitter.rs
//! Timed emission loop
//!
//! Each iteration reads elapsed time, writes one sample record and, while
//! `floor(t)` is even, one BPM record right after it. The loop then sleeps
//! for the configured interval. No rate correction is attempted, so the real
//! rate drifts with scheduler jitter.

use crate::config::{EmissionConfig, EmulatorConfig};
use crate::error::EmulatorResult;
use crate::hal::simulation::{HeartRateModel, WaveformGenerator};
use crate::hal::TelemetrySink;
use crate::telemetry::TelemetryRecord;
use crate::utils::time::{elapsed_seconds, SystemTimeProvider, TimeProvider};
use std::convert::Infallible;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Counters kept across iterations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionStats {
    pub iterations: u64,
    pub samples_sent: u64,
    pub bpm_sent: u64,
    pub bytes_sent: u64,
}

/// Records produced by a single iteration
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub elapsed_s: f64,
    pub sample: TelemetryRecord,
    pub bpm: Option<TelemetryRecord>,
}

impl StepOutput {
    /// Records in the order they were written
    pub fn records(&self) -> impl Iterator<Item = TelemetryRecord> + '_ {
        std::iter::once(self.sample).chain(self.bpm)
    }
}

/// Streams synthetic telemetry into a [`TelemetrySink`]
pub struct SerialEmitter<S: TelemetrySink, T: TimeProvider = SystemTimeProvider> {
    sink: S,
    clock: T,
    waveform: WaveformGenerator,
    heart_rate: HeartRateModel,
    emission: EmissionConfig,
    start_nanos: u64,
    stats: EmissionStats,
}

impl<S: TelemetrySink> SerialEmitter<S, SystemTimeProvider> {
    /// Emitter on the wall clock, starting now
    pub fn new(sink: S, config: &EmulatorConfig) -> Self {
        Self::with_clock(sink, SystemTimeProvider, config)
    }
}

impl<S: TelemetrySink, T: TimeProvider> SerialEmitter<S, T> {
    /// Emitter on an injected clock; elapsed time starts at the clock's current reading
    pub fn with_clock(sink: S, clock: T, config: &EmulatorConfig) -> Self {
        let start_nanos = clock.now_nanos();
        Self {
            sink,
            clock,
            waveform: WaveformGenerator::new(config.waveform.clone()),
            heart_rate: HeartRateModel::new(config.heart_rate.clone()),
            emission: config.emission.clone(),
            start_nanos,
            stats: EmissionStats::default(),
        }
    }

    /// Seconds since the emitter started
    pub fn elapsed(&self) -> f64 {
        elapsed_seconds(self.start_nanos, self.clock.now_nanos())
    }

    /// Run one iteration without sleeping
    pub fn step(&mut self) -> EmulatorResult<StepOutput> {
        let t = self.elapsed();

        let sample = TelemetryRecord::sample(self.waveform.sample_value(t));
        self.stats.bytes_sent += self.sink.send(&sample)? as u64;
        self.stats.samples_sent += 1;
        trace!(t, ?sample, "sample sent");

        let bpm = if self.heart_rate.should_emit(t) {
            let record = TelemetryRecord::bpm(self.heart_rate.bpm_value(t));
            self.stats.bytes_sent += self.sink.send(&record)? as u64;
            self.stats.bpm_sent += 1;
            trace!(t, ?record, "bpm sent");
            Some(record)
        } else {
            None
        };

        self.stats.iterations += 1;
        if self.emission.stats_log_every > 0
            && self.stats.iterations % self.emission.stats_log_every == 0
        {
            debug!(
                endpoint = self.sink.endpoint(),
                elapsed_s = t,
                iterations = self.stats.iterations,
                samples = self.stats.samples_sent,
                bpm = self.stats.bpm_sent,
                bytes = self.stats.bytes_sent,
                "emission progress"
            );
        }

        Ok(StepOutput {
            elapsed_s: t,
            sample,
            bpm,
        })
    }

    /// Emit forever; only returns when a write fails
    pub fn run(&mut self) -> EmulatorResult<Infallible> {
        info!(
            endpoint = self.sink.endpoint(),
            interval_us = self.emission.interval_micros,
            "emitter started"
        );
        let result = loop {
            if let Err(e) = self.step() {
                break e;
            }
            std::thread::sleep(self.emission.interval());
        };
        self.log_stopped();
        Err(result)
    }

    /// Emit exactly `iterations` iterations, sleeping between them
    pub fn run_for(&mut self, iterations: u64) -> EmulatorResult<()> {
        let started = Instant::now();
        for i in 0..iterations {
            self.step()?;
            if i + 1 < iterations {
                std::thread::sleep(self.emission.interval());
            }
        }
        debug!(iterations, wall_ms = started.elapsed().as_millis() as u64, "bounded run finished");
        Ok(())
    }

    pub fn stats(&self) -> &EmissionStats {
        &self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the sink; for a serial port this closes it once dropped
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn log_stopped(&self) {
        info!(
            endpoint = self.sink.endpoint(),
            iterations = self.stats.iterations,
            samples = self.stats.samples_sent,
            bpm = self.stats.bpm_sent,
            bytes = self.stats.bytes_sent,
            "emitter stopped"
        );
    }
}
