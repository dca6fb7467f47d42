//! Human-readable number formatting.
//!
//! Item labels always carry one decimal place once a suffix applies
//! (`158.0K`), while tick labels print the scaled value as is (`10B`).
//! Fixed-precision output rounds ties away from zero (`1250` → `1.3K`).

const THOUSAND: f64 = 1.0e3;
const MILLION: f64 = 1.0e6;
const BILLION: f64 = 1.0e9;

/// Label shown for an unbounded distance.
pub const UNBOUNDED_LABEL: &str = "∞";

/// Item label: `13.4B`, `2.5M`, `158.0K`, or the raw value below one thousand.
pub fn format_magnitude(value: f64) -> String {
    match value {
        v if v >= BILLION => format!("{}B", format_fixed(v / BILLION, 1)),
        v if v >= MILLION => format!("{}M", format_fixed(v / MILLION, 1)),
        v if v >= THOUSAND => format!("{}K", format_fixed(v / THOUSAND, 1)),
        v => format!("{v}"),
    }
}

/// Axis tick label: same thresholds as [`format_magnitude`] without fixed rounding.
pub fn format_tick(value: f64) -> String {
    match value {
        v if v >= BILLION => format!("{}B", v / BILLION),
        v if v >= MILLION => format!("{}M", v / MILLION),
        v if v >= THOUSAND => format!("{}K", v / THOUSAND),
        v => format!("{v}"),
    }
}

/// Item label followed by a unit, e.g. `13.4B ly`.
pub fn format_distance_label(value: f64, unit: &str) -> String {
    format!("{} {unit}", format_magnitude(value))
}

/// Fixed number of decimal places, ties rounded away from zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}", round_half_away(value, decimals))
}

/// Round to `decimals` places with ties going away from zero.
///
/// `format!` rounds exact binary ties to even (`{:.1}` of `1.25` is `1.2`).
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Thousands-separated number with at most `max_fraction_digits` decimals.
///
/// Trailing fraction zeros are dropped: `1647.2113` with two digits gives
/// `1,647.21`, `3.5` with two digits gives `3.5`.
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            UNBOUNDED_LABEL.to_string()
        } else {
            format!("-{UNBOUNDED_LABEL}")
        };
    }

    let fixed = format_fixed(value.abs(), max_fraction_digits);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // rounding to zero must not print "-0"
    if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
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
