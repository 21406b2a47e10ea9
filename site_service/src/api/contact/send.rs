use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mailer_client::SendEmail;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;

#[derive(Debug, Error, AsRefStr)]
pub enum SendContactErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Too many contact requests, retry later")]
    RateLimited,
    #[error("Failed to dispatch contact email")]
    Mailer(#[source] anyhow::Error),
}

impl IntoResponse for SendContactErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            SendContactErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SendContactErr::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            SendContactErr::Mailer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "SendContactErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub status: String,
}

/// Send a contact-form message.
///
/// The sliding-window guard runs before the provider is touched; a saturated
/// window rejects the request without a dispatch attempt.
#[utoipa::path(
    post,
    tag = "Contact",
    path = "/contact/send",
    operation_id = "send_contact",
    request_body = ContactRequest,
    responses(
        (status = 202, body = ContactResponse),
        (status = 400, body = String),
        (status = 429, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context, request))]
pub async fn handler(
    State(context): State<ApiContext>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), SendContactErr> {
    if request.name.trim().is_empty() || request.message.trim().is_empty() {
        return Err(SendContactErr::InvalidRequest(
            "name and message are required".to_string(),
        ));
    }
    if !request.email.contains('@') {
        return Err(SendContactErr::InvalidRequest(
            "sender email is not valid".to_string(),
        ));
    }

    if !context.contact_limiter.check_and_record() {
        tracing::warn!("contact send rejected by rate limit");
        return Err(SendContactErr::RateLimited);
    }

    let email = SendEmail {
        service_id: context.config.mailer_service_id.clone(),
        template_id: context.config.mailer_template_id.clone(),
        recipient: context.config.contact_recipient.clone(),
        params: serde_json::json!({
            "from_name": request.name,
            "reply_to": request.email,
            "message": request.message,
        }),
    };

    context.mailer.send(&email).await.map_err(|e| {
        tracing::error!(error = ?e, "mailer dispatch failed");
        SendContactErr::Mailer(e)
    })?;

    tracing::info!("contact message dispatched");

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactResponse {
            status: "sent".to_string(),
        }),
    ))
}
