//! Notes REST API — CRUD over the in-memory note store.

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::fallback::not_found;
use crate::error::ApiError;
use crate::models::NoteInput;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .service(
                web::resource(["", "/"])
                    .route(web::get().to(list_notes))
                    .route(web::post().to(create_note))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource(["/{id}", "/{id}/"])
                    .route(web::get().to(get_note))
                    .route(web::put().to(update_note))
                    .route(web::delete().to(delete_note))
                    .default_service(web::to(not_found)),
            ),
    );
}

/// Map body decoding failures to the JSON error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
        ApiError::BadRequest(err.to_string()).into()
    })
}

/// Ids that don't parse can't match any note
fn parse_note_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListNotesQuery {
    search_term: Option<String>,
}

async fn list_notes(
    state: web::Data<AppState>,
    query: web::Query<ListNotesQuery>,
) -> Result<HttpResponse, ApiError> {
    let notes = state.store.list(query.search_term.as_deref());
    Ok(HttpResponse::Ok().json(notes))
}

async fn get_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_note_id(&path)?;
    let note = state.store.get(id).ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(note))
}

async fn create_note(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<NoteInput>,
) -> Result<HttpResponse, ApiError> {
    let draft = body.into_inner().validate()?;
    let note = state
        .store
        .create(draft)
        .ok_or_else(|| ApiError::Internal("note ids exhausted".to_string()))?;

    let location = format!(
        "http://{}/api/notes/{}",
        req.connection_info().host(),
        note.id
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(note))
}

async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NoteInput>,
) -> Result<HttpResponse, ApiError> {
    // Validate before the lookup so a bad body never reaches the store
    let draft = body.into_inner().validate()?;
    let id = parse_note_id(&path)?;

    let note = state.store.update(id, draft).ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(note))
}

/// Deleting a missing note is not an error
async fn delete_note(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match parse_note_id(&path) {
        Ok(id) => {
            if !state.store.delete(id) {
                log::debug!("[NOTES] Delete of missing note {}", id);
            }
        }
        Err(_) => log::debug!("[NOTES] Delete with non-numeric id {:?}", path.as_str()),
    }
    HttpResponse::NoContent().finish()
}
