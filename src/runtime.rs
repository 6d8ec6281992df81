use std::cell::Cell;
use std::io::{self, BufRead};
use std::time::Instant;

/// Source of typed responses, one line per trial
pub trait ResponseSource {
    /// Block until a full line is available.
    /// Returns Ok(None) once the input is exhausted.
    fn read_response(&mut self) -> io::Result<Option<String>>;
}

/// Line-oriented source over any buffered reader (stdin in production)
pub struct LineSource<B: BufRead> {
    reader: B,
}

impl<B: BufRead> LineSource<B> {
    pub fn new(reader: B) -> Self {
        Self { reader }
    }
}

impl<B: BufRead> ResponseSource for LineSource<B> {
    fn read_response(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Monotonic time source, in seconds
pub trait Clock {
    fn now_secs(&self) -> f64;
}

/// Production clock backed by `Instant`
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Test clock that replays a fixed list of response latencies.
///
/// Reads come in start/stop pairs; each stop reports the next latency
/// after its start. Once the list runs out the last latency repeats.
#[derive(Debug)]
pub struct ScriptedClock {
    latencies: Vec<f64>,
    reads: Cell<usize>,
    current: Cell<f64>,
}

impl ScriptedClock {
    pub fn new(latencies: Vec<f64>) -> Self {
        Self {
            latencies,
            reads: Cell::new(0),
            current: Cell::new(0.0),
        }
    }
}

impl Clock for ScriptedClock {
    fn now_secs(&self) -> f64 {
        let read = self.reads.get();
        self.reads.set(read + 1);

        if read % 2 == 1 {
            let trial = read / 2;
            let latency = self
                .latencies
                .get(trial)
                .or(self.latencies.last())
                .copied()
                .unwrap_or(0.0);
            self.current.set(self.current.get() + latency);
        } else {
            // idle gap between trials, should never leak into a latency
            self.current.set(self.current.get() + 10.0);
        }

        self.current.get()
    }
}
