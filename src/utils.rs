use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError};
use serde::{Deserialize, Serialize};

// Return a 400 with the user-representation of the validation error as body.
// The error root cause is preserved for logging purposes.
pub fn e400<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    ServerError::BadRequestError(e).into()
}

// Malformed JSON payloads get the same JSON error body as every other 400.
pub fn json_error_handler(e: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    e400(e)
}

#[derive(thiserror::Error)]
pub enum ServerError<T: std::fmt::Debug + std::fmt::Display + 'static> {
    #[error("{0}")]
    BadRequestError(T),
}

impl<T: std::fmt::Debug + std::fmt::Display + 'static> std::fmt::Debug for ServerError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<T: std::fmt::Debug + std::fmt::Display + 'static> ResponseError for ServerError<T> {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequestError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(ResponseErrorMessage {
                error: format!("{}", self),
            })
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseErrorMessage {
    pub error: String,
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;

    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }

    Ok(())
}
