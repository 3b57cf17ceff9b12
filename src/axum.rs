//! Functionality for using `urlqs` with `axum`.
//!
//! Enable with the `axum` feature.

use axum_framework as axum;

use crate::config::{Config, EncodingMode};
use crate::map::QueryMap;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extracts the request's query string as a [`QueryMap`].
///
/// The encoding is taken from a [`QsQueryConfig`] request extension, and
/// defaults to UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QsQuery(pub QueryMap);

impl QsQuery {
    /// Unwrap into the inner map
    pub fn into_inner(self) -> QueryMap {
        self.0
    }
}

impl<S> FromRequestParts<S> for QsQuery
where
    S: Send + Sync,
{
    type Rejection = QsQueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config: Config = parts
            .extensions
            .get::<QsQueryConfig>()
            .copied()
            .unwrap_or_default()
            .into();
        let query = parts.uri.query().unwrap_or_default();
        let map = config.parse_query(query).map_err(QsQueryRejection::new)?;
        Ok(QsQuery(map))
    }
}

impl std::ops::Deref for QsQuery {
    type Target = QueryMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for QsQuery {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug)]
pub struct QsQueryRejection {
    error: crate::Error,
}

impl std::fmt::Display for QsQueryRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to decode query string. Error: {}", self.error)
    }
}

impl std::error::Error for QsQueryRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl QsQueryRejection {
    pub fn new(error: crate::Error) -> Self {
        QsQueryRejection { error }
    }

    pub fn error(&self) -> &crate::Error {
        &self.error
    }
}

impl IntoResponse for QsQueryRejection {
    fn into_response(self) -> Response {
        let mut res = self.to_string().into_response();
        *res.status_mut() = StatusCode::BAD_REQUEST;
        res
    }
}

/// Request extension selecting how [`QsQuery`] decodes the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QsQueryConfig {
    encoding: EncodingMode,
}

impl QsQueryConfig {
    pub fn new(use_utf8: bool) -> Self {
        Self {
            encoding: EncodingMode::from_use_utf8(use_utf8),
        }
    }
}

impl From<QsQueryConfig> for Config {
    fn from(config: QsQueryConfig) -> Self {
        Config::new().encoding(config.encoding)
    }
}
