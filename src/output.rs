// ABOUTME: Output handle for CLI feedback, passed explicitly to every step.
// ABOUTME: Supports normal, quiet (CI), and JSON modes, plus in-memory capture for tests.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Severity of a recorded output event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Progress,
    Warning,
    Success,
    Error,
}

/// One line of output as seen by a capture sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEvent {
    pub kind: EventKind,
    pub message: String,
}

/// Shared view of everything written through a captured `Output`.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    events: Arc<Mutex<Vec<OutputEvent>>>,
}

impl CapturedOutput {
    pub fn events(&self) -> Vec<OutputEvent> {
        self.events.lock().clone()
    }

    pub fn messages(&self, kind: EventKind) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.message.clone())
            .collect()
    }
}

enum Sink {
    Console,
    Captured(CapturedOutput),
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
    sink: Sink,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
            sink: Sink::Console,
        }
    }

    /// An output that writes nothing to the terminal and records every event.
    ///
    /// Events are recorded regardless of mode; the mode only affects what a
    /// console sink would have printed.
    pub fn captured(mode: OutputMode) -> (Self, CapturedOutput) {
        let capture = CapturedOutput::default();
        let output = Self {
            mode,
            start_time: None,
            sink: Sink::Captured(capture.clone()),
        };
        (output, capture)
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.record(EventKind::Progress, message) {
            return;
        }
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a non-fatal warning.
    pub fn warning(&self, message: &str) {
        if self.record(EventKind::Warning, message) {
            return;
        }
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Warning: {message}"),
            OutputMode::Json => self.emit_json(EventKind::Warning, message, true),
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        if self.record(EventKind::Success, message) {
            return;
        }
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                println!("{message}");
            }
            OutputMode::Json => self.emit_json(EventKind::Success, message, false),
        }
    }

    /// Print the final result, attaching structured details in JSON mode.
    pub fn result<T: Serialize>(&self, message: &str, details: &T) {
        if self.mode != OutputMode::Json || matches!(self.sink, Sink::Captured(_)) {
            self.success(message);
            return;
        }
        let event = JsonEvent {
            event: EventKind::Success,
            message,
            duration_secs: Some(self.elapsed_secs()).filter(|_| self.start_time.is_some()),
            details: serde_json::to_value(details).ok(),
        };
        if let Ok(json) = serde_json::to_string(&event) {
            println!("{json}");
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        if self.record(EventKind::Error, message) {
            return;
        }
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => self.emit_json(EventKind::Error, message, true),
        }
    }

    /// Returns true when the event went to a capture sink.
    fn record(&self, kind: EventKind, message: &str) -> bool {
        match &self.sink {
            Sink::Console => false,
            Sink::Captured(capture) => {
                capture.events.lock().push(OutputEvent {
                    kind,
                    message: message.to_string(),
                });
                true
            }
        }
    }

    fn emit_json(&self, event: EventKind, message: &str, to_stderr: bool) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: if self.start_time.is_some() {
                Some(self.elapsed_secs())
            } else {
                None
            },
            details: None,
        };
        if let Ok(json) = serde_json::to_string(&event) {
            if to_stderr {
                eprintln!("{json}");
            } else {
                println!("{json}");
            }
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: EventKind,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_output_records_in_order() {
        let (output, capture) = Output::captured(OutputMode::Normal);
        output.progress("building");
        output.warning("empty artifact");
        output.success("done");

        let kinds: Vec<EventKind> = capture.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [EventKind::Progress, EventKind::Warning, EventKind::Success]
        );
        assert_eq!(capture.messages(EventKind::Warning), ["empty artifact"]);
    }

    #[test]
    fn json_event_serializes_lowercase_kind() {
        let event = JsonEvent {
            event: EventKind::Success,
            message: "ok",
            duration_secs: None,
            details: None,
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"success","message":"ok"}"#
        );
    }
}
