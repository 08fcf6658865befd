use std::fmt;

/// Scale one channel to a decimal fraction in [0, 1], rounded to 3 places.
pub fn channel_fraction(value: u8) -> f64 {
    (value as f64 / 255.0 * 1000.0).round() / 1000.0
}

pub fn rgb_to_decimal(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    (
        channel_fraction(r),
        channel_fraction(g),
        channel_fraction(b),
    )
}

/// Lowercase `#rrggbb`, each channel zero-padded to 2 digits.
pub fn hex_string(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Wrong number of digits after stripping whitespace and `#`.
    Length(usize),
    /// A character that is not an ASCII hex digit.
    Digit,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::Length(n) => write!(f, "expected 6 hex digits, got {n}"),
            HexError::Digit => write!(f, "not a valid hex digit"),
        }
    }
}

impl std::error::Error for HexError {}

/// Parse `#rrggbb` or `rrggbb` into a channel triple.
/// Surrounding whitespace and any leading `#` are stripped first.
pub fn parse_hex(input: &str) -> Result<(u8, u8, u8), HexError> {
    let hex = input.trim().trim_start_matches('#');

    if !hex.is_ascii() {
        return Err(HexError::Digit);
    }
    if hex.len() != 6 {
        return Err(HexError::Length(hex.len()));
    }
    // from_str_radix also accepts signs, so check the digits explicitly
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexError::Digit);
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| HexError::Digit)?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| HexError::Digit)?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| HexError::Digit)?;
    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_are_rounded_to_three_places() {
        assert_eq!(channel_fraction(0), 0.0);
        assert_eq!(channel_fraction(255), 1.0);
        assert_eq!(channel_fraction(1), 0.004);
        assert_eq!(channel_fraction(128), 0.502);
        assert_eq!(channel_fraction(153), 0.6);
    }

    #[test]
    fn decimal_triple_matches_per_channel_rounding() {
        let (r, g, b) = rgb_to_decimal(255, 94, 0);
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.369);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn hex_string_is_lowercase_and_padded() {
        assert_eq!(hex_string(255, 153, 0), "#ff9900");
        assert_eq!(hex_string(0, 1, 15), "#00010f");
        assert_eq!(hex_string(0, 0, 0), "#000000");
    }

    #[test]
    fn parse_accepts_with_and_without_hash() {
        assert_eq!(parse_hex("#ff9900"), Ok((255, 153, 0)));
        assert_eq!(parse_hex("ff9900"), Ok((255, 153, 0)));
        assert_eq!(parse_hex("  #AbCdEf  "), Ok((171, 205, 239)));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(parse_hex("abc"), Err(HexError::Length(3)));
        assert_eq!(parse_hex("#ff99001"), Err(HexError::Length(7)));
        assert_eq!(parse_hex(""), Err(HexError::Length(0)));
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert_eq!(parse_hex("zzzzzz"), Err(HexError::Digit));
        assert_eq!(parse_hex("#ff99g0"), Err(HexError::Digit));
        assert_eq!(parse_hex("+1+2+3"), Err(HexError::Digit));
    }

    #[test]
    fn hex_round_trips_through_parse() {
        for &(r, g, b) in &[
            (0u8, 0u8, 0u8),
            (255, 255, 255),
            (255, 94, 0),
            (0, 128, 255),
            (1, 2, 3),
            (16, 32, 64),
        ] {
            assert_eq!(parse_hex(&hex_string(r, g, b)), Ok((r, g, b)));
        }
    }
}
