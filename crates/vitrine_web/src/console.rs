// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tracing layer that forwards events to a console sink.
//!
//! In the browser the sink is the devtools console; natively any
//! [`ConsoleSink`] works, which is how the layer is tested.

use std::fmt::Write as _;
use std::sync::mpsc;

/// Severity of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// `console.debug`, used for trace and debug events
    Debug,
    /// `console.info`
    Info,
    /// `console.warn`
    Warn,
    /// `console.error`
    Error,
}

impl From<tracing::Level> for ConsoleLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            tracing::Level::ERROR => Self::Error,
        }
    }
}

/// One formatted tracing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    /// Severity
    pub level: ConsoleLevel,
    /// Module path or explicit target of the event
    pub target: String,
    /// Message followed by the event's fields
    pub message: String,
}

impl ConsoleLine {
    /// `[target] message`, the text written to the console
    pub fn render(&self) -> String {
        format!("[{}] {}", self.target, self.message)
    }
}

/// Destination of console lines
pub trait ConsoleSink: Send + Sync + 'static {
    /// Write one line
    fn write_line(&self, line: ConsoleLine);
}

impl ConsoleSink for mpsc::Sender<ConsoleLine> {
    fn write_line(&self, line: ConsoleLine) {
        let _ = self.send(line);
    }
}

/// The browser devtools console
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

#[cfg(target_arch = "wasm32")]
impl ConsoleSink for BrowserConsole {
    fn write_line(&self, line: ConsoleLine) {
        let text = wasm_bindgen::JsValue::from_str(&line.render());
        match line.level {
            ConsoleLevel::Debug => web_sys::console::debug_1(&text),
            ConsoleLevel::Info => web_sys::console::info_1(&text),
            ConsoleLevel::Warn => web_sys::console::warn_1(&text),
            ConsoleLevel::Error => web_sys::console::error_1(&text),
        }
    }
}

/// Tracing layer writing every event to a [`ConsoleSink`]
pub struct ConsoleLayer<K: ConsoleSink> {
    sink: K,
}

impl<K: ConsoleSink> ConsoleLayer<K> {
    /// Create a layer over a sink
    pub fn new(sink: K) -> Self {
        Self { sink }
    }
}

impl ConsoleLayer<mpsc::Sender<ConsoleLine>> {
    /// Create a layer and return `(layer, receiver)`.
    pub fn channel() -> (Self, mpsc::Receiver<ConsoleLine>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(sender), receiver)
    }
}

impl<S, K> tracing_subscriber::Layer<S> for ConsoleLayer<K>
where
    S: tracing::Subscriber,
    K: ConsoleSink,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        self.sink.write_line(ConsoleLine {
            level: ConsoleLevel::from(*meta.level()),
            target: meta.target().to_string(),
            message: visitor.finish(),
        });
    }
}

/// Collects the `message` field first, then `name = value` pairs
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push_str(", ");
        }
        let _ = write!(self.fields, "{name} = {value}");
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (true, true) => "(empty)".to_string(),
            (true, false) => self.fields,
            (false, true) => self.message,
            (false, false) => format!("{} ({})", self.message, self.fields),
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), &format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(emit: impl FnOnce()) -> Vec<ConsoleLine> {
        let (layer, receiver) = ConsoleLayer::channel();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, emit);
        receiver.try_iter().collect()
    }

    #[test]
    fn test_message_and_fields() {
        let lines = capture(|| tracing::info!(target: "vitrine", slides = 3, "Mounted carousel"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, ConsoleLevel::Info);
        assert_eq!(lines[0].render(), "[vitrine] Mounted carousel (slides = 3)");
    }

    #[test]
    fn test_fields_only() {
        let lines = capture(|| tracing::warn!(target: "vitrine", index = 7, name = "next"));
        assert_eq!(lines[0].level, ConsoleLevel::Warn);
        assert_eq!(lines[0].message, "index = 7, name = next");
    }

    #[test]
    fn test_trace_maps_to_debug() {
        let lines = capture(|| tracing::trace!("tick"));
        assert_eq!(lines[0].level, ConsoleLevel::Debug);
    }
}
