// Text, CSV and JSON rendering of protection runs
mod format;
mod reporter;

pub use {
    format::{format_signed_pct, format_usd},
    reporter::{OutputFormat, ProtectionReporter},
};
