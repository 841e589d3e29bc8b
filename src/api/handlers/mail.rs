use crate::tools::is_valid_email;
use axum::{extract::Path, response::Json};
use tracing::{info, instrument};

#[utoipa::path(
    get,
    path= "/Mail/isValidEmail/{email}",
    params(
        ("email" = String, Path, description = "Address to check")
    ),
    responses (
        (status = 200, description = "Whether the input looks like an email address", body = bool, content_type = "application/json"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    ),
    tag= "mail"
)]
#[instrument]
pub async fn is_valid_email_handler(Path(email): Path<String>) -> Json<bool> {
    info!("Verify if email {} is valid", email);

    let is_valid = is_valid_email(&email);
    if is_valid {
        info!("Is a valid email");
    } else {
        info!("Is not a valid email");
    }

    Json(is_valid)
}
