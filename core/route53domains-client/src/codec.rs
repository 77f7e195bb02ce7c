//! JSON 1.1 body encoding.

use crate::error::{ClientError, ClientResult, ServiceErrorKind};
use route53domains_model::TypedRecord;
use serde::Deserialize;

/// Validates a request record and serializes it.
///
/// Unset fields are left out of the document; explicit empty values are kept.
pub fn encode<R: TypedRecord>(record: &R) -> ClientResult<Vec<u8>> {
    record.validate()?;
    Ok(serde_json::to_vec(record)?)
}

/// Deserializes a response record. An empty body decodes to the empty record.
pub fn decode<R: TypedRecord>(body: &[u8]) -> ClientResult<R> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(R::default());
    }
    Ok(serde_json::from_slice(body)?)
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDocument {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Builds the error for a non-2xx response.
///
/// Bodies that are not an error document still produce a `Service` error,
/// with the kind taken as unknown and the raw body as the message.
pub fn decode_error(status: u16, body: &[u8]) -> ClientError {
    let document: ErrorDocument = serde_json::from_slice(body).unwrap_or_default();
    let kind = document
        .error_type
        .as_deref()
        .map_or_else(|| ServiceErrorKind::Unknown(format!("HTTP {status}")), ServiceErrorKind::from_type);
    let message = document
        .message
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    ClientError::Service {
        kind,
        status,
        message,
    }
}
