pub struct DemoConfig {
    pub title: &'static str,
    /// (label, price) samples, oldest first.
    pub series: &'static [(&'static str, f64)],
}

// Opens just under its high, peaks early, then slides far enough to trip every preset.
pub const DEMO: DemoConfig = DemoConfig {
    title: "Demo ETH (90D)",
    series: &[
        ("Jul 22", 3390.57),
        ("Jul 27", 3310.20),
        ("Aug 1", 3421.80),
        ("Aug 6", 3482.10),
        ("Aug 11", 3350.00),
        ("Aug 16", 3214.80),
        ("Aug 21", 3100.00),
        ("Aug 26", 2960.14),
        ("Aug 31", 2745.63),
        ("Sep 5", 2630.84),
        ("Sep 10", 2513.28),
        ("Sep 15", 2589.15),
        ("Sep 20", 2421.66),
        ("Sep 25", 2368.77),
        ("Sep 30", 2386.50),
        ("Oct 5", 2563.01),
        ("Oct 10", 2638.45),
        ("Oct 15", 2611.20),
        ("Oct 20", 2598.37),
    ],
};
