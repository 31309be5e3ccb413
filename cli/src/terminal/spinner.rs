use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::terminal::logging::InvmapFormatter;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Installs the global subscriber.
///
/// Events go through [`InvmapFormatter`] and are written above any active
/// spinner. Only spans carrying `indicatif.pb_show` get a spinner.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();
    let writer = indicatif_layer.get_stdout_writer();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(InvmapFormatter)
                .with_writer(writer),
        )
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}

/// Styles `span` as a spinner. Must be called before the span is entered.
pub fn attach(span: &Span, message: &str) {
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS);

    span.pb_set_style(&style);
    span.pb_set_message(message);
}

pub fn report_progress(span: &Span, message: &str) {
    span.pb_set_message(message);
}
