mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{TimeUtils, chart_label, epoch_ms_to_date_string, epoch_ms_to_utc};

pub use maths_utils::{drawdown_pct, pct_change, round_to};

pub(crate) use maths_utils::get_max;
