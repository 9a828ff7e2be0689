//! crates/print-sink/src/tracing_bridge.rs
//! Bridge from printed lines to the tracing crate.
//!
//! Hosts that already run a tracing subscriber can install a [`TracingSink`]
//! so printed lines show up next to their own events.
//!
//! # Usage
//!
//! ```rust,ignore
//! use print::{PrintConfig, install};
//! use print_sink::{TracingSink, init_tracing_console};
//!
//! init_tracing_console().ok();
//! install(PrintConfig::from_env_or_default(), TracingSink::new()).ok();
//! print::print_warning!("Wifi", "link quality {}", 3);
//! ```

use print::{Level, Sink};
use std::fmt;
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

/// Target attached to every forwarded event.
pub const TRACING_TARGET: &str = "arsal::print";

/// Sink forwarding each line as a tracing event.
///
/// Error maps to `ERROR`, Warning to `WARN` and Debug to `DEBUG`. The tag is
/// recorded as the `tag` field and the line, without its newline, as the
/// message.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a print level to a tracing level.
    #[must_use]
    pub const fn tracing_level(level: Level) -> tracing::Level {
        match level {
            Level::Error => tracing::Level::ERROR,
            Level::Warning => tracing::Level::WARN,
            Level::Debug => tracing::Level::DEBUG,
        }
    }
}

impl Sink for TracingSink {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        let rendered = line.to_string();
        let message = rendered.trim_end_matches('\n');
        match level {
            Level::Error => tracing::error!(target: TRACING_TARGET, tag, "{message}"),
            Level::Warning => tracing::warn!(target: TRACING_TARGET, tag, "{message}"),
            Level::Debug => tracing::debug!(target: TRACING_TARGET, tag, "{message}"),
        }
        Ok(rendered.len())
    }
}

/// Installs a global subscriber that prints events to stderr.
///
/// Filtering follows `RUST_LOG`. Fails if a global subscriber is already
/// set.
pub fn init_tracing_console() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Events = Arc<Mutex<Vec<(tracing::Level, String, String, String)>>>;

    #[derive(Default)]
    struct Fields {
        tag: String,
        message: String,
    }

    impl Visit for Fields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "message" => self.message = format!("{value:?}"),
                "tag" => self.tag = format!("{value:?}"),
                _ => {}
            }
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            match field.name() {
                "message" => self.message = value.to_owned(),
                "tag" => self.tag = value.to_owned(),
                _ => {}
            }
        }
    }

    struct Collect(Events);

    impl<S: Subscriber> Layer<S> for Collect {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.0.lock().expect("lock").push((
                *metadata.level(),
                metadata.target().to_owned(),
                fields.tag,
                fields.message,
            ));
        }
    }

    fn capture(body: impl FnOnce()) -> Vec<(tracing::Level, String, String, String)> {
        let events = Events::default();
        let subscriber = tracing_subscriber::registry().with(Collect(Arc::clone(&events)));
        tracing::subscriber::with_default(subscriber, body);
        events.lock().expect("lock").clone()
    }

    #[test]
    fn levels_map_to_tracing_levels() {
        assert_eq!(TracingSink::tracing_level(Level::Error), tracing::Level::ERROR);
        assert_eq!(TracingSink::tracing_level(Level::Warning), tracing::Level::WARN);
        assert_eq!(TracingSink::tracing_level(Level::Debug), tracing::Level::DEBUG);
    }

    #[test]
    fn line_becomes_event_with_tag_field() {
        let events = capture(|| {
            let written = TracingSink::new()
                .raw(Level::Warning, "Wifi", format_args!("12:00:00:000 | scan:4 - weak\n"))
                .expect("tracing sink never fails");
            assert_eq!(written, "12:00:00:000 | scan:4 - weak\n".len());
        });

        assert_eq!(events.len(), 1);
        let (level, target, tag, message) = &events[0];
        assert_eq!(*level, tracing::Level::WARN);
        assert_eq!(target, TRACING_TARGET);
        assert_eq!(tag, "Wifi");
        assert_eq!(message, "12:00:00:000 | scan:4 - weak");
    }

    #[test]
    fn each_level_is_forwarded() {
        let events = capture(|| {
            for level in Level::ALL {
                TracingSink::new()
                    .raw(level, "T", format_args!("{level}\n"))
                    .expect("forwarded");
            }
        });

        let levels: Vec<_> = events.iter().map(|event| event.0).collect();
        assert_eq!(
            levels,
            [tracing::Level::ERROR, tracing::Level::WARN, tracing::Level::DEBUG]
        );
    }
}
