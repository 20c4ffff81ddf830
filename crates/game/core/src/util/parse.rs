//! Parsing helpers for delimited, comment-aware content files.

use crate::color::Rgb;
use crate::error::{ErrorSeverity, GameError};
use crate::util::math::pow_i;

/// Errors raised while parsing content values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid integer: {input:?}")]
    InvalidInt { input: String },

    #[error("invalid number: {input:?}")]
    InvalidFloat { input: String },

    #[error("color channel out of range (0-255): {value}")]
    ChannelOutOfRange { value: i32 },
}

impl GameError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInt { .. } => "PARSE_INVALID_INT",
            Self::InvalidFloat { .. } => "PARSE_INVALID_FLOAT",
            Self::ChannelOutOfRange { .. } => "PARSE_CHANNEL_OUT_OF_RANGE",
        }
    }
}

/// Splits `input` on `delim` into trimmed fields.
///
/// With `min > 0` the result has at least `min` fields: missing ones are
/// empty, and field `min` absorbs the remainder of the line.
pub fn substrings(input: &str, delim: char, min: usize) -> Vec<String> {
    let mut fields = Vec::new();
    let mut rest = Some(input);

    while let Some(remaining) = rest {
        if min > 0 && fields.len() == min - 1 {
            fields.push(remaining.trim().to_string());
            break;
        }
        match remaining.split_once(delim) {
            Some((head, tail)) => {
                fields.push(head.trim().to_string());
                rest = Some(tail);
            }
            None => {
                fields.push(remaining.trim().to_string());
                rest = None;
            }
        }
    }

    while fields.len() < min {
        fields.push(String::new());
    }
    fields
}

/// Parses a trimmed integer; blank input is zero.
pub fn parse_int(input: &str) -> Result<i32, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| ParseError::InvalidInt {
        input: trimmed.to_string(),
    })
}

/// Parses a trimmed float; blank input is zero and `2.5e3` style exponents
/// are accepted.
pub fn parse_float(input: &str) -> Result<f32, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let invalid = || ParseError::InvalidFloat {
        input: trimmed.to_string(),
    };

    if trimmed.contains('e') {
        let parts = substrings(trimmed, 'e', 2);
        let mantissa: f32 = parts[0].parse().map_err(|_| invalid())?;
        let exponent: i32 = parts[1].parse().map_err(|_| invalid())?;
        return Ok(mantissa * pow_i(10.0, exponent));
    }

    trimmed.parse().map_err(|_| invalid())
}

/// Parses `"r, g, b"`; missing channels are zero and blank input is black.
pub fn parse_color(input: &str) -> Result<Rgb, ParseError> {
    if input.trim().is_empty() {
        return Ok(Rgb::BLACK);
    }

    let mut channels = [0u8; 3];
    for (slot, field) in channels.iter_mut().zip(substrings(input, ',', 0)) {
        let value = parse_int(&field)?;
        *slot = u8::try_from(value).map_err(|_| ParseError::ChannelOutOfRange { value })?;
    }
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Blank lines and lines starting with `/`, `\`, `#` or a byte-order mark.
pub fn is_comment(line: &str) -> bool {
    match line.trim().chars().next() {
        None => true,
        Some(first) => matches!(first, '/' | '\\' | '#' | '\u{feff}'),
    }
}

/// Fields of a delimited content line, or nothing for blank and comment
/// lines (`/`, `\`, `#`, `*`).
pub fn parsed_values(line: &str, delim: char) -> Vec<String> {
    match line.trim().chars().next() {
        None | Some('/' | '\\' | '#' | '*') => Vec::new(),
        Some(_) => substrings(line, delim, 0),
    }
}

/// Variable suffixes of every `[key_...]` token in `text`, keeping the
/// leading underscore (`"[race_name]"` yields `"_name"`).
///
/// A span that opens another `[` before closing is not a token; scanning
/// resumes at that inner bracket.
pub fn var_tokens(text: &str, key: &str) -> Vec<String> {
    let start_key = format!("[{key}_");
    let mut tokens = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(&start_key) {
        let start = search_from + offset;
        let Some(end_offset) = text[start..].find(']') else {
            break;
        };
        let end = start + end_offset;
        if let Some(nested) = text[start + 1..end].find('[') {
            search_from = start + 1 + nested;
            continue;
        }
        tokens.push(text[start + start_key.len() - 1..end].to_string());
        search_from = end;
    }
    tokens
}

/// Entry `index` of `names`, falling back to the first entry when the index
/// is out of range or the entry is blank.
pub fn string_at(names: &[String], index: usize) -> Option<&str> {
    match names.get(index) {
        Some(name) if !name.is_empty() => Some(name),
        _ => names.first().map(String::as_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substrings_trim_and_split() {
        assert_eq!(substrings(" a , b,c ", ',', 0), ["a", "b", "c"]);
        assert_eq!(substrings("solo", ',', 0), ["solo"]);
        assert_eq!(substrings("a,,b", ',', 0), ["a", "", "b"]);
    }

    #[test]
    fn substrings_min_pads_and_absorbs() {
        assert_eq!(substrings("a", ',', 3), ["a", "", ""]);
        assert_eq!(substrings("a,b,c,d", ',', 2), ["a", "b,c,d"]);
    }

    #[test]
    fn integers() {
        assert_eq!(parse_int("  42 "), Ok(42));
        assert_eq!(parse_int(""), Ok(0));
        assert_eq!(
            parse_int("4x"),
            Err(ParseError::InvalidInt {
                input: "4x".to_string()
            })
        );
    }

    #[test]
    fn floats_with_exponent() {
        assert_eq!(parse_float(" 1.5 "), Ok(1.5));
        assert_eq!(parse_float(""), Ok(0.0));
        assert_eq!(parse_float("2.5e3"), Ok(2500.0));
        assert_eq!(parse_float("5e-1"), Ok(0.5));
        assert!(parse_float("1e").is_err());
        assert_eq!(
            parse_float("abc").unwrap_err().error_code(),
            "PARSE_INVALID_FLOAT"
        );
    }

    #[test]
    fn colors() {
        assert_eq!(parse_color("10, 20, 30"), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(parse_color("255"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(parse_color("  "), Ok(Rgb::BLACK));
        assert_eq!(
            parse_color("300,0,0"),
            Err(ParseError::ChannelOutOfRange { value: 300 })
        );
    }

    #[test]
    fn comments_and_values() {
        assert!(is_comment("   "));
        assert!(is_comment("# header"));
        assert!(is_comment("\u{feff}Sol"));
        assert!(!is_comment("Sol"));
        assert!(!is_comment("*Sol"));

        assert!(parsed_values("// note", ',').is_empty());
        assert!(parsed_values("*star", ',').is_empty());
        assert_eq!(parsed_values("Sol, yellow", ','), ["Sol", "yellow"]);
    }

    #[test]
    fn variable_tokens() {
        let text = "The [race_name] fleet of [race_leader] nears [system_name].";
        assert_eq!(var_tokens(text, "race"), ["_name", "_leader"]);
        assert_eq!(var_tokens(text, "system"), ["_name"]);
        assert!(var_tokens("[race_open", "race").is_empty());
    }

    #[test]
    fn var_tokens_skip_unclosed_prefix() {
        assert_eq!(var_tokens("[system_[system_1]", "system"), ["_1"]);
        assert_eq!(
            var_tokens("[system_ lost, [system_2] holds", "system"),
            ["_2"]
        );
        assert_eq!(var_tokens("[system_[race_x] [system_0]", "system"), ["_0"]);
    }

    #[test]
    fn string_at_falls_back_to_first() {
        let names = vec!["Sol".to_string(), String::new(), "Vega".to_string()];
        assert_eq!(string_at(&names, 2), Some("Vega"));
        assert_eq!(string_at(&names, 1), Some("Sol"));
        assert_eq!(string_at(&names, 9), Some("Sol"));
        assert_eq!(string_at(&[], 0), None);
    }
}
