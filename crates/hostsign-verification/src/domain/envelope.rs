//! # Signature Envelope
//!
//! Decoding of the `X-WECHAT-HOSTSIGN` header.
//!
//! The header carries a JSON object with exactly three string fields:
//!
//! ```text
//! {"noncestr": "...", "timestamp": "...", "signature": "<lowercase hex sha1>"}
//! ```
//!
//! Nonce and timestamp are opaque and never interpreted.

use super::errors::EnvelopeError;
use serde_json::{Map, Value};

const FIELD_NONCE: &str = "noncestr";
const FIELD_TIMESTAMP: &str = "timestamp";
const FIELD_SIGNATURE: &str = "signature";

const KNOWN_FIELDS: [&str; 3] = [FIELD_NONCE, FIELD_TIMESTAMP, FIELD_SIGNATURE];

/// Decoded host signature envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureEnvelope {
    /// Random string chosen by the host (`noncestr` on the wire)
    pub nonce: String,
    /// Host timestamp, kept verbatim
    pub timestamp: String,
    /// Signature supplied by the host
    pub signature: String,
}

impl SignatureEnvelope {
    /// Decode a header value under the strict envelope schema.
    ///
    /// A `null` field counts as missing. Any field outside the schema
    /// rejects the whole envelope.
    pub fn decode(raw: &str) -> Result<Self, EnvelopeError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| EnvelopeError::InvalidJson(e.to_string()))?;

        let Value::Object(fields) = value else {
            return Err(EnvelopeError::NotAnObject);
        };

        let nonce = required_string(&fields, FIELD_NONCE)?;
        let timestamp = required_string(&fields, FIELD_TIMESTAMP)?;
        let signature = required_string(&fields, FIELD_SIGNATURE)?;

        if let Some(unknown) = fields.keys().find(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
            return Err(EnvelopeError::UnknownField(unknown.clone()));
        }

        Ok(Self {
            nonce,
            timestamp,
            signature,
        })
    }
}

fn required_string(fields: &Map<String, Value>, name: &'static str) -> Result<String, EnvelopeError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(EnvelopeError::MissingField(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(EnvelopeError::NotAString(name)),
    }
}
