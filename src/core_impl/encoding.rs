use std::fmt::Write as _;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Plain structured JSON; buffers have no representation.
    Json,
    /// Extended, human-oriented: `|6162|`.
    Jx,
    /// Extended, JSON-compatible: `{"_buf":"6162"}`.
    Jc,
}

impl Runtime {
    pub fn can_encode(&self, value: &Value, mode: EncodingMode) -> bool {
        matches!(value, Value::Buffer(_) | Value::TypedArray(_)) && mode != EncodingMode::Json
    }

    /// `None` means "no encoding": the caller substitutes `undefined` or omits
    /// the value. Both buffer variants encode identically.
    pub fn encode(&self, value: &Value, mode: EncodingMode) -> Option<String> {
        if !self.can_encode(value, mode) {
            return None;
        }
        let bytes = match value {
            Value::Buffer(buffer) => buffer.bytes(),
            Value::TypedArray(view) => Self::typed_array_raw_bytes(view),
            _ => return None,
        };
        let hex = Self::hex_encode(&bytes);
        match mode {
            EncodingMode::Json => None,
            EncodingMode::Jx => Some(format!("|{hex}|")),
            EncodingMode::Jc => Some(format!("{{\"_buf\":\"{hex}\"}}")),
        }
    }

    /// Parses an extended-mode buffer literal back into a raw buffer.
    pub fn decode_buffer(&self, text: &str, mode: EncodingMode) -> Result<Value> {
        let text = text.trim();
        let hex = match mode {
            EncodingMode::Json => {
                return Err(Error::SyntaxError(
                    "JSON has no buffer representation".into(),
                ));
            }
            EncodingMode::Jx => text
                .strip_prefix('|')
                .and_then(|rest| rest.strip_suffix('|')),
            EncodingMode::Jc => text
                .strip_prefix("{\"_buf\":\"")
                .and_then(|rest| rest.strip_suffix("\"}")),
        };
        let Some(hex) = hex else {
            return Err(Error::SyntaxError(format!(
                "invalid {mode:?} buffer literal: {text}"
            )));
        };
        let bytes = Self::hex_decode(hex)?;
        Ok(Self::raw_buffer_from_bytes(bytes))
    }

    fn hex_encode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }

    fn hex_decode(src: &str) -> Result<Vec<u8>> {
        if src.len() % 2 != 0 {
            return Err(Error::SyntaxError(
                "buffer literal has an odd number of hex digits".into(),
            ));
        }
        src.as_bytes()
            .chunks(2)
            .map(|pair| {
                let high = (pair[0] as char).to_digit(16);
                let low = (pair[1] as char).to_digit(16);
                match (high, low) {
                    (Some(high), Some(low)) => Ok((high * 16 + low) as u8),
                    _ => Err(Error::SyntaxError(format!(
                        "invalid hex digits in buffer literal: {}",
                        String::from_utf8_lossy(pair)
                    ))),
                }
            })
            .collect()
    }
}
