//! Display formatting for quantities and money amounts.

/// Groups digits by thousands and keeps at most two fraction digits.
///
/// `1234567.891` renders as `1,234,567.89`, `12.50` as `12.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    // Split before scaling: `abs * 100` loses the fraction once the
    // magnitude passes 2^46, and trunc/fract are exact.
    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut fraction = (magnitude.fract() * 100.0).round() as u8;
    if fraction == 100 {
        whole += 1.0;
        fraction = 0;
    }
    let negative = value.is_sign_negative() && (whole > 0.0 || fraction > 0);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&format!("{:.0}", whole)));

    if fraction > 0 {
        let digits = format!("{:02}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
