/// "$1,234.57" style, two decimals, comma-grouped thousands.
pub fn format_usd(val: f64) -> String {
    let sign = if val < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", val.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Signed percentage as the comparison badges show it: "+3.10%", "-50.00%".
pub fn format_signed_pct(val: f64) -> String {
    format!("{:+.2}%", val)
}
