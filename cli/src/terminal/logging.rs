use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use super::print::PRINT_TARGET;

pub struct IdiomFormatter;

/// Pulls the `raw_msg` field out of events emitted by [`super::print::print`].
#[derive(Default)]
struct RawMsgVisitor(Option<String>);

impl Visit for RawMsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S, N> FormatEvent<S, N> for IdiomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut visitor = RawMsgVisitor::default();
            event.record(&mut visitor);
            if let Some(msg) = visitor.0 {
                return writeln!(writer, "{msg}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Default directive when `RUST_LOG` is unset.
fn default_directive(quiet: u8) -> &'static str {
    if quiet > 1 { "warn" } else { "info" }
}

/// Filter directives for the subscriber.
///
/// Command output travels as `info` events on [`PRINT_TARGET`], so that target
/// stays enabled whatever `RUST_LOG` says unless `-qq` was given.
fn directives(env: Option<&str>, quiet: u8) -> String {
    let base: &str = env
        .map(str::trim)
        .filter(|env| !env.is_empty())
        .unwrap_or_else(|| default_directive(quiet));

    if quiet > 1 {
        base.to_string()
    } else {
        format!("{base},{PRINT_TARGET}=info")
    }
}

pub fn init_logging(quiet: u8) {
    let env: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(directives(env.as_deref(), quiet));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(IdiomFormatter)
        .init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
