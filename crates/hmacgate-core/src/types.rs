//! Request payload and canonicalization mode.

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{GateError, GateResult};

/// The signed request payload.
///
/// Field order is significant: the JSON encoding produced by
/// [`Payload::to_bytes`] is the exact byte sequence that gets signed.
///
/// Decoding is lenient, for peers that build the body by hand: keys match
/// their field names ignoring ASCII case, absent and `null` fields stay
/// empty, the last non-null value of a repeated key wins, and unknown keys
/// are skipped. A top-level `null` decodes to an empty payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Payload {
    /// ISO-8601 timestamp of the transaction.
    pub transaction_datetime: String,
    /// Customer display name.
    pub customer_name: String,
    /// Caller-assigned request identifier.
    pub request_id: String,
}

impl Payload {
    /// Create a payload from its three fields.
    pub fn new(
        transaction_datetime: impl Into<String>,
        customer_name: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            transaction_datetime: transaction_datetime.into(),
            customer_name: customer_name.into(),
            request_id: request_id.into(),
        }
    }

    /// Create a payload stamped with the current UTC time
    /// (`YYYY-MM-DDTHH:MM:SSZ`).
    pub fn stamped_now(customer_name: impl Into<String>, request_id: impl Into<String>) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::new(now, customer_name, request_id)
    }

    /// Serialize to compact JSON with fields in declaration order.
    pub fn to_bytes(&self) -> GateResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse a payload from a JSON body. Missing or `null` fields are empty.
    pub fn from_slice(body: &[u8]) -> GateResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The `request_id:customer_name:transaction_datetime` form signed in
    /// [`Canonicalization::FieldJoined`] mode.
    #[must_use]
    pub fn joined_fields(&self) -> String {
        format!(
            "{}:{}:{}",
            self.request_id, self.customer_name, self.transaction_datetime
        )
    }

    /// The field a JSON key decodes into, if any.
    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        if key.eq_ignore_ascii_case("transaction_datetime") {
            Some(&mut self.transaction_datetime)
        } else if key.eq_ignore_ascii_case("customer_name") {
            Some(&mut self.customer_name)
        } else if key.eq_ignore_ascii_case("request_id") {
            Some(&mut self.request_id)
        } else {
            None
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Payload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a payload object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Payload, E> {
        Ok(Payload::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Payload, A::Error> {
        let mut payload = Payload::default();
        while let Some(key) = map.next_key::<String>()? {
            match payload.field_mut(&key) {
                Some(field) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *field = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(payload)
    }
}

/// How a request body is turned into the bytes that get signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Canonicalization {
    /// Sign the body bytes exactly as transmitted.
    #[default]
    RawBody,
    /// Parse the body as a [`Payload`] and sign
    /// `request_id:customer_name:transaction_datetime`.
    FieldJoined,
}

impl Canonicalization {
    /// The configuration name of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RawBody => "raw",
            Self::FieldJoined => "fields",
        }
    }
}

impl fmt::Display for Canonicalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Canonicalization {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::RawBody),
            "fields" => Ok(Self::FieldJoined),
            _ => Err(GateError::UnknownCanonicalization(s.to_owned())),
        }
    }
}
