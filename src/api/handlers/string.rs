use super::AppState;
use crate::tools::{generate_slug, only_numbers};
use axum::{Extension, extract::Path, http::StatusCode, response::IntoResponse};
use tracing::{error, info, instrument};

#[utoipa::path(
    get,
    path= "/String/generateSlug/{name}",
    params(
        ("name" = String, Path, description = "Text to turn into a slug")
    ),
    responses (
        (status = 200, description = "Lowercase hyphenated slug, possibly empty", body = String, content_type = "text/plain"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    ),
    tag= "string"
)]
#[instrument]
pub async fn generate_slug_handler(Path(name): Path<String>) -> String {
    let slug = generate_slug(&name);

    info!("Generate Slug '{}' from string '{}'", slug, name);

    slug
}

#[utoipa::path(
    get,
    path= "/String/onlyNumbers/{input}",
    params(
        ("input" = String, Path, description = "Text to strip down to its ASCII digits")
    ),
    responses (
        (status = 200, description = "Digits of the input, in order", body = String, content_type = "text/plain"),
        (status = 500, description = "Unexpected failure", body = String, content_type = "text/plain"),
    ),
    tag= "string"
)]
#[instrument]
pub async fn only_numbers_handler(Path(input): Path<String>) -> String {
    let digits = only_numbers(&input);

    info!("Extract only numbers `{}` from {}", digits, input);

    digits
}

#[utoipa::path(
    get,
    path= "/String/generateShortUniqueString",
    responses (
        (status = 200, description = "Base-62 encoded random identifier", body = String, content_type = "text/plain"),
        (status = 500, description = "The random source failed", body = String, content_type = "text/plain"),
    ),
    tag= "string"
)]
#[instrument(skip(state))]
pub async fn generate_short_unique_string_handler(
    state: Extension<AppState>,
) -> impl IntoResponse {
    match state.short_ids().try_generate() {
        Ok(unique) => {
            info!("Generate short unique string: `{}`", unique);

            (StatusCode::OK, unique)
        }
        Err(err) => {
            error!("Failed to generate short unique string: {}", err);

            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::SharedRng;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::Request,
        routing::get,
    };
    use rand::RngCore;
    use std::collections::HashSet;
    use tower::ServiceExt;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("rng offline"))
        }
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/String/generateSlug/{name}", get(generate_slug_handler))
            .route("/String/onlyNumbers/{input}", get(only_numbers_handler))
            .route(
                "/String/generateShortUniqueString",
                get(generate_short_unique_string_handler),
            )
            .layer(Extension(state))
    }

    async fn call(app: Router, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(body.to_vec())?))
    }

    #[tokio::test]
    async fn slug_over_http() -> anyhow::Result<()> {
        let cases = [
            ("/String/generateSlug/S%C3%A3o%20Paulo", "sao-paulo"),
            ("/String/generateSlug/Hello%20World!!", "hello-world"),
            ("/String/generateSlug/%E6%9D%B1%E4%BA%AC", ""),
        ];
        for (uri, expected) in cases {
            let (status, body) = call(app(AppState::default()), uri).await?;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, expected, "{uri}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn only_numbers_over_http() -> anyhow::Result<()> {
        let (status, body) = call(
            app(AppState::default()),
            "/String/onlyNumbers/(11)%2098765-4321",
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "11987654321");
        Ok(())
    }

    #[tokio::test]
    async fn short_unique_string_over_http() -> anyhow::Result<()> {
        let state = AppState::new(SharedRng::seed_from_u64(11));
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let (status, body) =
                call(app(state.clone()), "/String/generateShortUniqueString").await?;
            assert_eq!(status, StatusCode::OK);
            assert!(!body.is_empty());
            assert!(body.bytes().all(|byte| byte.is_ascii_alphanumeric()));
            seen.insert(body);
        }
        assert_eq!(seen.len(), 50);
        Ok(())
    }

    #[tokio::test]
    async fn seeded_state_is_reproducible() -> anyhow::Result<()> {
        let (_, first) = call(
            app(AppState::new(SharedRng::seed_from_u64(5))),
            "/String/generateShortUniqueString",
        )
        .await?;
        let (_, second) = call(
            app(AppState::new(SharedRng::seed_from_u64(5))),
            "/String/generateShortUniqueString",
        )
        .await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn broken_rng_maps_to_500() -> anyhow::Result<()> {
        let (status, body) = call(
            app(AppState::new(SharedRng::new(BrokenRng))),
            "/String/generateShortUniqueString",
        )
        .await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("rng offline"));
        Ok(())
    }
}
