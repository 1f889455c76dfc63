//! Maps raw responses to typed values or to one of the failure kinds in [`Error`].

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use crate::cursor::{self, Page};
use crate::error::*;
use crate::http::{RawResponse, StatusCode};

/// Classifies the response status.
/// 401 and 403 get their own kinds; any other non-2xx is [`Error::RequestFailed`].
pub fn check_status(resp: RawResponse) -> Result<RawResponse> {
    let status = resp.status;
    if status.is_success() {
        return Ok(resp);
    }
    Err(match status {
        StatusCode::UNAUTHORIZED => Error::AuthenticationRequired {
            requested_url: resp.url,
        },
        StatusCode::FORBIDDEN => Error::PermissionDenied {
            reason: GENERIC_PERMISSION_DENIED.to_owned(),
            requested_url: resp.url,
        },
        _ => Error::RequestFailed {
            status,
            requested_url: resp.url,
            body: resp.body,
        },
    })
}

pub fn parse_json<T: DeserializeOwned>(resp: RawResponse) -> Result<T> {
    let resp = check_status(resp)?;
    decode(&resp, serde_json::from_str(&resp.body))
}

/// Decodes a list envelope such as `{"courses": [...], "next": "...?cursor=42"}`.
///
/// A missing list key is an empty page; the cursor comes from `next`.
pub fn parse_page<T: DeserializeOwned>(resp: RawResponse, key: &str) -> Result<Page<T>> {
    let resp = check_status(resp)?;
    let mut envelope: Map<String, Value> = decode(&resp, serde_json::from_str(&resp.body))?;

    let items = match envelope.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(list) => decode(&resp, serde_json::from_value(list))?,
    };
    let next_cursor = match envelope.get("next") {
        Some(Value::String(next)) => cursor::extract_cursor(Some(next)),
        Some(Value::Null) | None => None,
        Some(other) => {
            let e = serde_json::Error::custom(format!("`next` must be a string, got {}", other));
            return Err(malformed(&resp, e));
        }
    };

    Ok(Page::new(items, next_cursor))
}

/// Maps the response of an action endpoint (join/quit/abort).
///
/// 204 succeeds without looking at the body, and 403 carries `denied_reason`.
/// A non-empty 2xx body must still be valid JSON.
pub fn expect_action(resp: RawResponse, denied_reason: &str) -> Result<()> {
    match resp.status {
        StatusCode::NO_CONTENT => return Ok(()),
        StatusCode::FORBIDDEN => {
            return Err(Error::PermissionDenied {
                reason: denied_reason.to_owned(),
                requested_url: resp.url,
            })
        }
        _ => {}
    }

    let resp = check_status(resp)?;
    if resp.body.trim().is_empty() {
        return Ok(());
    }
    decode::<Value>(&resp, serde_json::from_str(&resp.body)).map(|_| ())
}

fn decode<T>(resp: &RawResponse, res: serde_json::Result<T>) -> Result<T> {
    res.map_err(|e| malformed(resp, e))
}

fn malformed(resp: &RawResponse, source: serde_json::Error) -> Error {
    Error::MalformedResponse {
        requested_url: resp.url.clone(),
        body: resp.body.clone(),
        source,
    }
}
