use crate::tools::{DocumentKind, validate_cpf_or_cnpj};
use axum::{extract::Path, response::Json};
use tracing::{info, instrument};

#[utoipa::path(
    get,
    path= "/Document/validarCpfOuCnpj/{cpfCnpj}",
    params(
        ("cpfCnpj" = String, Path, description = "CPF or CNPJ, with or without formatting")
    ),
    responses (
        (status = 200, description = "Whether the document carries valid check digits", body = bool, content_type = "application/json"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    ),
    tag= "document"
)]
#[instrument]
pub async fn validate_cpf_or_cnpj_handler(Path(cpf_cnpj): Path<String>) -> Json<bool> {
    let is_valid = validate_cpf_or_cnpj(&cpf_cnpj);
    let kind = DocumentKind::detect(&cpf_cnpj).map_or("unknown", DocumentKind::as_str);

    info!("validarCpfOuCnpj: {}={} ({})", cpf_cnpj, is_valid, kind);

    Json(is_valid)
}
