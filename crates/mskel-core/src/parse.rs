//! Free-text numeric normalization.
//!
//! Survey fields arrive as free text with unit suffixes attached
//! ("2시간", "10회", "4.5kg"). Every numeric comparison in the
//! classification engine routes through these helpers, which strip the
//! suffix tokens and fall back to a caller-supplied default instead of
//! erroring. Both functions are total and idempotent: feeding an
//! already-clean numeric string back in yields the same value.

/// Unit-suffix tokens removed before numeric parsing.
///
/// Multi-character tokens are listed before their substrings so that
/// e.g. `킬로그램` is consumed whole rather than leaving `그램` behind.
const UNIT_TOKENS: &[&str] = &[
    "킬로그램",
    "kilograms",
    "kilogram",
    "minutes",
    "minute",
    "seconds",
    "second",
    "counts",
    "count",
    "hours",
    "hour",
    "days",
    "day",
    "시간",
    "min",
    "sec",
    "hr",
    "kg",
    "KG",
    "Kg",
    "분",
    "초",
    "회",
    "번",
    "일",
    "/",
    ",",
];

fn strip_units(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for token in UNIT_TOKENS {
        if cleaned.contains(token) {
            cleaned = cleaned.replace(token, "");
        }
    }
    cleaned.retain(|c| !c.is_whitespace());
    cleaned
}

/// Parse a free-text field as `f64`, stripping unit suffixes.
///
/// Empty or unparseable input returns `default`. Never errors.
#[must_use]
pub fn clean_f64(raw: &str, default: f64) -> f64 {
    let cleaned = strip_units(raw);
    if cleaned.is_empty() {
        return default;
    }
    cleaned.parse().unwrap_or(default)
}

/// Parse a free-text field as `u32`, stripping unit suffixes.
///
/// Accepts integer or decimal text (decimals truncate). Negative,
/// empty, or unparseable input returns `default`.
#[must_use]
pub fn clean_u32(raw: &str, default: u32) -> u32 {
    let cleaned = strip_units(raw);
    if cleaned.is_empty() {
        return default;
    }
    if let Ok(n) = cleaned.parse::<u32>() {
        return n;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v >= 0.0 && v <= f64::from(u32::MAX) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                v.trunc() as u32
            }
        }
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_f64, clean_u32};

    #[test]
    fn strips_korean_unit_suffixes() {
        assert_eq!(clean_f64("2시간", 0.0), 2.0);
        assert_eq!(clean_f64("30분", 0.0), 30.0);
        assert_eq!(clean_f64("4.5kg", 0.0), 4.5);
        assert_eq!(clean_f64("25킬로그램", 0.0), 25.0);
        assert_eq!(clean_u32("10회", 0), 10);
        assert_eq!(clean_u32("300번", 0), 300);
        assert_eq!(clean_u32("3일", 0), 3);
    }

    #[test]
    fn strips_ascii_unit_suffixes_and_whitespace() {
        assert_eq!(clean_f64(" 2 hr ", 0.0), 2.0);
        assert_eq!(clean_f64("15 min", 0.0), 15.0);
        assert_eq!(clean_f64("60sec", 0.0), 60.0);
        assert_eq!(clean_f64("1,000", 0.0), 1000.0);
        assert_eq!(clean_f64("5 회/일", 0.0), 5.0);
    }

    #[test]
    fn strips_full_word_ascii_units() {
        // Full words must be consumed whole; "min"/"sec"/"hour" alone
        // would leave "utes"/"onds"/"s" behind and fail the parse.
        assert_eq!(clean_f64("2 minutes", 0.0), 2.0);
        assert_eq!(clean_f64("1 minute", 0.0), 1.0);
        assert_eq!(clean_f64("90 seconds", 0.0), 90.0);
        assert_eq!(clean_f64("1 second", 0.0), 1.0);
        assert_eq!(clean_f64("3 hours", 0.0), 3.0);
        assert_eq!(clean_f64("25 kilogram", 0.0), 25.0);
        assert_eq!(clean_f64("25 kilograms", 0.0), 25.0);
        assert_eq!(clean_u32("10 counts", 0), 10);
        assert_eq!(clean_u32("2 days", 0), 2);
    }

    #[test]
    fn empty_or_garbage_returns_default() {
        assert_eq!(clean_f64("", 0.0), 0.0);
        assert_eq!(clean_f64("", 7.5), 7.5);
        assert_eq!(clean_f64("수시로", 3.0), 3.0);
        assert_eq!(clean_u32("", 1), 1);
        assert_eq!(clean_u32("가끔", 9), 9);
        assert_eq!(clean_u32("-5", 2), 2);
    }

    #[test]
    fn parse_is_idempotent_on_clean_input() {
        for raw in ["2시간", "4.5kg", "300", "0.25", "10회"] {
            let once = clean_f64(raw, 0.0);
            let twice = clean_f64(&once.to_string(), 0.0);
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn decimal_counts_truncate() {
        assert_eq!(clean_u32("2.9", 0), 2);
        assert_eq!(clean_u32("2.0회", 0), 2);
    }
}
