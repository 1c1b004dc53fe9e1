//====================================================================
// Assorted helper functions for reading LXCat text.
//====================================================================

// Lines opening with this mark close the info and data sections of a block
pub const SEPARATOR: &str = "-----";

#[inline]
pub fn is_separator(line: &str) -> bool {
    line.starts_with(SEPARATOR)
}

// Split a metadata line of the form "KEY: value" on its first colon,
// trimming both sides. Lines without a colon give None.
#[inline]
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').map(|(key, value)| (key.trim(), value.trim()))
}

// Parse a numeric token. The whole token has to be a number.
#[inline]
pub fn parse_f64(token: &str) -> Option<f64> {
    fast_float::parse::<f64, _>(token).ok()
}
