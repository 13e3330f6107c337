use async_trait::async_trait;

/// Trait for validating authentication on requests to protected resources.
///
/// Validators pull the credential out of the request (a cookie for session
/// tokens), check it and resolve it to the identity the route handler works
/// with.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions) rather
/// than the full `Request` to avoid issues with non-`Sync` request bodies.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The identity resolved from a valid credential. Made available to
    /// protected route handlers as a request extension.
    type Claims: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate authentication from the request parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential is present
    /// - The credential is malformed, expired or carries a bad signature
    async fn validate_request(
        &self,
        parts: &Self::RequestParts,
    ) -> Result<Self::Claims, Self::Error>;
}
