use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a braced GUID string, including the brace pair.
pub const GUID_LEN: usize = 38;

/// Length in bytes of a flat hex string.
pub const HEX_LEN: usize = 32;

/// The five byte-groups of a 128-bit identifier as (hex chars, byte-reversed).
///
/// The first three groups are stored in the GUID string in reversed byte
/// order relative to the flat hex form (little-endian struct layout); the
/// last two keep the same byte order in both forms. This table drives both
/// conversion directions.
const FIELDS: [(usize, bool); 5] = [(8, true), (4, true), (4, true), (4, false), (12, false)];

/// One of the two textual encodings of a 128-bit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierForm {
    /// Dashed, brace-delimited 38-character form: `{48ED4993-8F51-406E-8501-64809B4EAEC8}`
    Guid,
    /// Flat 32-character hexadecimal form: `9349ED48518F6E40850164809B4EAEC8`
    Hex,
}

impl IdentifierForm {
    /// Returns the other form, which is always the conversion target.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Guid => Self::Hex,
            Self::Hex => Self::Guid,
        }
    }

    /// Checks whether `value` has the shape required by this form.
    ///
    /// Guid: byte length 38, starts with `{`, ends with `}`.
    /// Hex: byte length 32.
    ///
    /// Character content is deliberately not inspected beyond the brace
    /// pair; the contract is length and shape only.
    #[must_use]
    pub fn validate(self, value: &str) -> bool {
        match self {
            Self::Guid => {
                value.len() == GUID_LEN && value.starts_with('{') && value.ends_with('}')
            }
            Self::Hex => value.len() == HEX_LEN,
        }
    }
}

impl fmt::Display for IdentifierForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guid => f.write_str("guid"),
            Self::Hex => f.write_str("hex"),
        }
    }
}

impl FromStr for IdentifierForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "guid" => Ok(Self::Guid),
            "hex" => Ok(Self::Hex),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

/// Converts `value` from `form` into the opposite form.
///
/// The input is validated against `form` before the transform and the
/// produced value is validated against `form.opposite()` afterwards; either
/// failure is a [`Error::Format`].
///
/// # Errors
///
/// Returns [`Error::Format`] if the input or the produced value fails
/// validation.
pub fn convert(form: IdentifierForm, value: &str) -> Result<String> {
    if !form.validate(value) {
        return Err(Error::format(form, value));
    }

    let raw = match form {
        IdentifierForm::Guid => guid_to_hex(value.as_bytes()),
        IdentifierForm::Hex => hex_to_guid(value.as_bytes()),
    };

    let target = form.opposite();

    // Byte-group shuffling of a multi-byte UTF-8 input can yield invalid
    // UTF-8; treat that as a failed output value.
    let converted = String::from_utf8(raw)
        .map_err(|e| Error::format(target, String::from_utf8_lossy(e.as_bytes())))?;

    if !target.validate(&converted) {
        return Err(Error::format(target, converted));
    }

    Ok(converted)
}

/// Transforms a validated 38-byte GUID string into the flat 32-char form.
///
/// The five groups sit at fixed offsets inside the braces; each group is
/// copied per the field table with one delimiter byte skipped after it.
fn guid_to_hex(guid: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEX_LEN);
    let mut pos = 1; // skip '{'

    for (width, reversed) in FIELDS {
        push_group(&mut out, &guid[pos..pos + width], reversed);
        pos += width + 1; // skip '-' (or the closing '}')
    }

    out
}

/// Transforms a validated 32-byte hex string into the braced GUID form.
fn hex_to_guid(hex: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(GUID_LEN);
    out.push(b'{');
    let mut pos = 0;

    for (i, (width, reversed)) in FIELDS.iter().enumerate() {
        push_group(&mut out, &hex[pos..pos + width], *reversed);
        pos += width;
        out.push(if i == FIELDS.len() - 1 { b'}' } else { b'-' });
    }

    out
}

/// Appends one byte-group, reversing its byte pairs when the field calls for it.
fn push_group(out: &mut Vec<u8>, group: &[u8], reversed: bool) {
    if reversed {
        for pair in group.chunks(2).rev() {
            out.extend_from_slice(pair);
        }
    } else {
        out.extend_from_slice(group);
    }
}
