//! Number formatting for card labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes with commas (`en-US` style).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Convert a USD amount to riel at `rate`, saturating on overflow.
pub fn to_khr(usd: u64, rate: u64) -> u64 {
    usd.saturating_mul(rate)
}
