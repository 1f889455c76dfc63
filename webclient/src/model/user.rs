use serde::{Deserialize, Serialize};

use super::field::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub friendly_name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub student_id: Field<String>,
}

/// Form body of `POST /oauth/token` (authorization-code exchange).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthTokenRequest {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
    pub redirect_uri: String,
}

impl OAuthTokenRequest {
    pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

    pub fn authorization_code<S1, S2, S3, S4>(
        client_id: S1,
        client_secret: S2,
        code: S3,
        redirect_uri: S4,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self {
            grant_type: Self::GRANT_AUTHORIZATION_CODE.to_owned(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            code: code.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    pub token_type: String,

    #[serde(default)]
    pub expires_in: Option<u64>,

    #[serde(default)]
    pub scope: Option<String>,
}
