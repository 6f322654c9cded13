use crate::endpoints::Endpoint;
use crate::{AuthResponse, LoginRequest, RegisterRequest, User};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The endpoint this request is sent to.
    const ENDPOINT: Endpoint;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the stored credential is attached as a bearer token.
    const AUTHENTICATED: bool = false;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const ENDPOINT: Endpoint = Endpoint::AuthLogin;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const ENDPOINT: Endpoint = Endpoint::AuthRegister;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Who am I: resolves the bearer token to its user
#[derive(Debug, Serialize, Deserialize)]
pub struct MeRequest;

impl ApiRequest for MeRequest {
    type Response = User;
    const ENDPOINT: Endpoint = Endpoint::AuthMe;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint_of<R: ApiRequest>() -> (Endpoint, HttpMethod, bool) {
        (R::ENDPOINT, R::METHOD, R::AUTHENTICATED)
    }

    #[test]
    fn request_metadata() {
        assert_eq!(
            endpoint_of::<MeRequest>(),
            (Endpoint::AuthMe, HttpMethod::Get, true)
        );
        assert_eq!(
            endpoint_of::<LoginRequest>(),
            (Endpoint::AuthLogin, HttpMethod::Post, false)
        );
        assert_eq!(
            endpoint_of::<RegisterRequest>(),
            (Endpoint::AuthRegister, HttpMethod::Post, false)
        );
    }
}
