use thiserror::Error;

/// Why a duration string was rejected. Every variant carries the original
/// input, already quoted with [`quote`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("time: invalid duration {input}")]
    InvalidFormat { input: String },

    #[error("time: unknown unit {unit} in duration {input}")]
    UnknownUnit { unit: String, input: String },

    #[error("time: duration out of range {input}")]
    RangeOverflow { input: String },
}

impl ParseError {
    pub(crate) fn invalid_format(input: &[u8]) -> Self {
        ParseError::InvalidFormat {
            input: quote(input),
        }
    }

    pub(crate) fn unknown_unit(unit: &[u8], input: &[u8]) -> Self {
        ParseError::UnknownUnit {
            unit: quote(unit),
            input: quote(input),
        }
    }

    pub(crate) fn range_overflow(input: &[u8]) -> Self {
        ParseError::RangeOverflow {
            input: quote(input),
        }
    }

    /// The quoted input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidFormat { input }
            | ParseError::UnknownUnit { input, .. }
            | ParseError::RangeOverflow { input } => input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("duration is negative")]
    Negative,

    #[error("duration exceeds the maximum of 9223372036854775807ns")]
    TooLarge,

    #[error("duration is below the minimum of -9223372036854775808ns")]
    TooSmall,
}

/// Wraps `bytes` in double quotes for diagnostics, see [`escape`].
pub fn quote(bytes: &[u8]) -> String {
    let mut quoted = String::with_capacity(bytes.len() + 2);
    quoted.push('"');
    escape_into(&mut quoted, bytes);
    quoted.push('"');
    quoted
}

/// Escapes `bytes` for display.
///
/// ASCII from space to DEL is kept, `"` and `\` get a backslash, and control
/// bytes and every byte from `0x80` up are written as `\xNN`. Non-ASCII text is
/// therefore escaped byte by byte, whether or not it is valid UTF-8.
pub fn escape(bytes: &[u8]) -> String {
    let mut escaped = String::with_capacity(bytes.len());
    escape_into(&mut escaped, bytes);
    escaped
}

fn escape_into(out: &mut String, bytes: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    for &b in bytes {
        match b {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            b' '..=0x7f => out.push(b as char),
            _ => {
                out.push_str("\\x");
                out.push(HEX[usize::from(b >> 4)] as char);
                out.push(HEX[usize::from(b & 0xf)] as char);
            }
        }
    }
}
