use crate::domain::error::DomainError;

/// Opaque authentication handle for the search service, shared by every
/// client. Resolved once per process, before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCredential {
    ApiKey(String),
    BearerToken(String),
}

impl SearchCredential {
    /// Identity mode consumes an ambient access token; key mode requires a
    /// non-empty API key. There is no fallback between the two.
    pub fn resolve(
        use_identity: bool,
        api_key: Option<String>,
        access_token: Option<String>,
    ) -> Result<Self, DomainError> {
        if use_identity {
            access_token
                .filter(|t| !t.is_empty())
                .map(SearchCredential::BearerToken)
                .ok_or_else(|| {
                    DomainError::Configuration(
                        "identity auth selected but no access token is available".to_string(),
                    )
                })
        } else {
            api_key
                .filter(|k| !k.is_empty())
                .map(SearchCredential::ApiKey)
                .ok_or_else(|| {
                    DomainError::Configuration(
                        "an API key must be provided when identity auth is disabled".to_string(),
                    )
                })
        }
    }
}
