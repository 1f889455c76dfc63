use reqwest::StatusCode;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Authentication failed while requesting to {requested_url}. Please login first.")]
    AuthenticationRequired { requested_url: String },

    #[error("Permission denied. {reason}")]
    PermissionDenied {
        reason: String,
        requested_url: String,
    },

    #[error(
        "API request failed with status '{}' while requesting to {}: {}",
        .status,
        .requested_url,
        truncate_body(.body)
    )]
    RequestFailed {
        status: StatusCode,
        requested_url: String,
        body: String,
    },

    #[error("Malformed response from {requested_url}: {source}")]
    MalformedResponse {
        requested_url: String,
        body: String,

        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse as URL '{url}'")]
    InvalidUrl {
        url: String,

        #[source]
        source: url::ParseError,
    },

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status of the failed response, when the failure came from one.
    pub fn status(&self) -> Option<StatusCode> {
        use Error::*;
        match self {
            AuthenticationRequired { .. } => Some(StatusCode::UNAUTHORIZED),
            PermissionDenied { .. } => Some(StatusCode::FORBIDDEN),
            RequestFailed { status, .. } => Some(*status),
            MalformedResponse { .. } | InvalidUrl { .. } => None,
            Http(e) => e.status(),
        }
    }
}

pub(crate) const GENERIC_PERMISSION_DENIED: &str = "You don't have access to this resource.";

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_owned();
    }
    match trimmed.char_indices().nth(MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn request_failed_message_truncates_body() {
        let err = Error::RequestFailed {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            requested_url: "https://example.com/x".to_owned(),
            body: "e".repeat(500),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.ends_with("..."));
        assert!(msg.len() < 400);

        let err = Error::RequestFailed {
            status: StatusCode::BAD_GATEWAY,
            requested_url: "https://example.com/x".to_owned(),
            body: "  ".to_owned(),
        };
        assert!(err.to_string().ends_with("<empty body>"));
    }

    #[test]
    fn status_of_each_kind() {
        let url = || "https://example.com".to_owned();
        assert_eq!(
            Error::AuthenticationRequired { requested_url: url() }.status(),
            Some(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            Error::PermissionDenied {
                reason: GENERIC_PERMISSION_DENIED.to_owned(),
                requested_url: url()
            }
            .status(),
            Some(StatusCode::FORBIDDEN)
        );
    }
}
