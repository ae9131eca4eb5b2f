use actix_files::NamedFile;
use actix_web::{guard, web, HttpRequest, HttpResponse};
use std::path::Path;

use super::fallback::not_found;
use crate::error::ApiError;
use crate::AppState;

/// Extensions served from the public directory
const ALLOWED_EXTENSIONS: &[&str] = &[
    "html", "css", "js", "json", "png", "svg", "jpg", "jpeg", "gif", "webp", "ico", "txt",
];

/// Check if a filename has an allowed asset extension
fn is_allowed_asset(filename: &str) -> bool {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return false,
    };
    ALLOWED_EXTENSIONS.contains(&ext.as_str())
}

/// Reject path traversal attempts and hidden files
fn is_safe_filename(filename: &str) -> bool {
    !(filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
        || filename.starts_with('.'))
}

/// Open a file from the public directory.
///
/// Every refusal is reported as NotFound so the directory layout isn't observable.
fn open_public_file(dir: &Path, filename: &str) -> Result<NamedFile, ApiError> {
    // Canonicalize and verify within public dir
    let canonical_dir = dir.canonicalize().map_err(|_| {
        log::warn!("Public directory {} not found", dir.display());
        ApiError::NotFound
    })?;

    let canonical_file = dir
        .join(filename)
        .canonicalize()
        .map_err(|_| ApiError::NotFound)?;

    if !canonical_file.starts_with(&canonical_dir) || !canonical_file.is_file() {
        log::warn!("Refused public file outside {}: {}", dir.display(), filename);
        return Err(ApiError::NotFound);
    }

    NamedFile::open(&canonical_file).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ApiError::NotFound,
        _ => ApiError::Internal(format!("Failed to open {}: {}", canonical_file.display(), e)),
    })
}

/// Serve the index page
async fn serve_index(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let file = open_public_file(&state.config.public_dir, "index.html")?;
    Ok(file.into_response(&req))
}

/// Serve a top-level public asset
async fn serve_public_file(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let filename = path.into_inner();

    if !is_safe_filename(&filename) || !is_allowed_asset(&filename) {
        return Err(ApiError::NotFound);
    }

    let file = open_public_file(&state.config.public_dir, &filename)?;
    Ok(file.into_response(&req))
}

/// GET or HEAD
fn read_only() -> actix_web::Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(read_only().to(serve_index))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/{filename}")
            .route(read_only().to(serve_public_file))
            .default_service(web::to(not_found)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controllers::{test_state, test_state_with};
    use crate::error::ErrorBody;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test as actix_test, App};

    #[test]
    fn test_allowed_assets() {
        assert!(is_allowed_asset("index.html"));
        assert!(is_allowed_asset("APP.JS"));
        assert!(!is_allowed_asset("notes.db"));
        assert!(!is_allowed_asset("Makefile"));
    }

    #[test]
    fn test_safe_filenames() {
        assert!(is_safe_filename("index.css"));
        assert!(!is_safe_filename(".env"));
        assert!(!is_safe_filename("..secret.txt"));
        assert!(!is_safe_filename("a\\b.txt"));
    }

    #[actix_web::test]
    async fn test_root_serves_index_html() {
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state())
                .configure(crate::controllers::config),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[actix_web::test]
    async fn test_head_requests_are_served() {
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state())
                .configure(crate::controllers::config),
        )
        .await;

        for uri in ["/", "/index.css"] {
            let req = actix_test::TestRequest::default()
                .method(actix_web::http::Method::HEAD)
                .uri(uri)
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }

        let req = actix_test::TestRequest::post().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_serves_public_assets() {
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state())
                .configure(crate::controllers::config),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/index.css").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        for uri in ["/missing.css", "/.env", "/Cargo.toml"] {
            let req = actix_test::TestRequest::get().uri(uri).to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);

            let body: ErrorBody = actix_test::read_body_json(resp).await;
            assert_eq!(body.message, "Not Found");
        }
    }

    #[actix_web::test]
    async fn test_missing_index_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            public_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state_with(config))
                .configure(crate::controllers::config),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
