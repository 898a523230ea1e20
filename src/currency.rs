//! Conversion between whole-rupiah amounts and their grouped display form.
//!
//! Amounts are rendered with the `id-ID` digit grouping convention: `.` as the
//! thousands separator and no decimal part, e.g. `30000000` <-> `30.000.000`.

/// Thousands separator for the single supported locale.
pub const GROUP_SEPARATOR: char = '.';

/// Currency symbol prefixed by [`rupiah`].
pub const CURRENCY_SYMBOL: &str = "Rp";

/// Formats an amount with grouped thousands. Zero renders as an empty string
/// so an unset price shows up as a blank input.
pub fn format(amount: u64) -> String {
    if amount == 0 {
        return String::new();
    }

    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }

    out
}

/// Parses a display string back into an amount.
///
/// Grouping separators are stripped and the leading run of digits is read as
/// a base 10 integer. Empty input, input without leading digits, and values
/// that do not fit in a `u64` all degrade to 0.
pub fn parse(display: &str) -> u64 {
    let stripped = display.replace(GROUP_SEPARATOR, "");
    let digits: String = stripped
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u64>().unwrap_or(0)
}

/// Formats an amount for read-only display with the currency symbol. Unlike
/// [`format`], zero is shown explicitly.
pub fn rupiah(amount: u64) -> String {
    if amount == 0 {
        return format!("{CURRENCY_SYMBOL} 0");
    }
    format!("{CURRENCY_SYMBOL} {}", format(amount))
}

#[cfg(test)]
#[path = "./currency_tests.rs"]
mod tests;
