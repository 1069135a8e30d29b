/// Times `$block` when `DF.log_performance` is on and warns if it ran longer
/// than `$budget_nanos` per sample. Evaluates to the block's value either way.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $samples:expr, $budget_nanos:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let start = std::time::Instant::now();
            let result = $block;
            let samples = ($samples).max(1) as u128;
            let per_sample = start.elapsed().as_nanos() / samples;
            if per_sample > $budget_nanos {
                log::warn!(
                    "Slow '{}': {} ns per sample over {} samples (budget {} ns)",
                    $name,
                    per_sample,
                    samples,
                    $budget_nanos
                );
            }
            result
        } else {
            $block
        }
    }};
}
