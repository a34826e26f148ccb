use crate::config::BearerTokenSource;
use crate::error::{Error, Result};
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;

/// Attaches `authorization: Bearer <token>` to every outgoing request.
#[derive(Clone, Default)]
pub struct AuthInterceptor {
    token: Option<MetadataValue<Ascii>>,
    insecure: bool,
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token {
            Some(_) => f.write_str("token_redacted"),
            None => f.write_str("no_token_configured"),
        }
    }
}

impl AuthInterceptor {
    pub fn new(token: &str, insecure: bool) -> Result<Self> {
        let value = format!("Bearer {}", token)
            .parse::<MetadataValue<Ascii>>()
            .map_err(|_| Error::Config("bearer token is not a valid header value".into()))?;

        Ok(Self {
            token: Some(value),
            insecure,
        })
    }

    pub fn from_source(source: Option<&BearerTokenSource>, insecure: bool) -> Result<Self> {
        match source {
            Some(source) => Self::new(&load_bearer_token(source)?, insecure),
            None => Ok(Self::default()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The token is only meant for TLS channels unless the store was
    /// explicitly configured as insecure.
    pub fn require_transport_security(&self) -> bool {
        !self.insecure
    }
}

impl Interceptor for AuthInterceptor {
    fn call(
        &mut self,
        mut req: tonic::Request<()>,
    ) -> std::result::Result<tonic::Request<()>, tonic::Status> {
        if let Some(ref t) = self.token {
            req.metadata_mut().insert("authorization", t.clone());
        }

        Ok(req)
    }
}

/// Token files are read whole; the trailing newline most editors add is dropped.
pub fn load_bearer_token(source: &BearerTokenSource) -> Result<String> {
    match source {
        BearerTokenSource::Inline(token) => Ok(token.clone()),
        BearerTokenSource::File(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| Error::TokenFile {
                path: path.clone(),
                source,
            })?;
            Ok(content.trim_end().to_string())
        }
    }
}
