pub mod admin;
pub mod query;

use crate::domain::values::credential::SearchCredential;
use reqwest::RequestBuilder;

pub(crate) const API_VERSION: &str = "2024-07-01";

pub(crate) fn authorize(request: RequestBuilder, credential: &SearchCredential) -> RequestBuilder {
    match credential {
        SearchCredential::ApiKey(key) => request.header("api-key", key),
        SearchCredential::BearerToken(token) => request.bearer_auth(token),
    }
}
