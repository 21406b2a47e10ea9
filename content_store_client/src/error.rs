use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::{Error, Response};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("content store error: {status_code} {message}")]
    Api { status_code: u16, message: String },
    #[error("request error: {0}")]
    Generic(#[from] anyhow::Error),
}

#[async_trait]
pub trait ResponseExt {
    async fn map_store_error(self) -> Result<Response, StoreError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_store_error(self) -> Result<Response, StoreError> {
        match self.status() {
            StatusCode::OK
            | StatusCode::CREATED
            | StatusCode::ACCEPTED
            | StatusCode::NO_CONTENT => Ok(self),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            status => Err(StoreError::Api {
                status_code: status.as_u16(),
                message: self.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl ResponseExt for Result<Response, Error> {
    async fn map_store_error(self) -> Result<Response, StoreError> {
        match self {
            Ok(response) => response.map_store_error().await,
            Err(e) => Err(StoreError::Generic(anyhow!(e.to_string()))),
        }
    }
}
