use actix_web::web;

pub mod fallback;
pub mod notes;
pub mod public_files;

/// Register every route plus the JSON body config and the 404 fallback
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(notes::json_config())
        .configure(notes::config)
        .configure(public_files::config)
        .default_service(web::to(fallback::not_found));
}

#[cfg(test)]
pub(crate) fn test_state() -> web::Data<crate::AppState> {
    test_state_with(crate::config::Config::default())
}

#[cfg(test)]
pub(crate) fn test_state_with(config: crate::config::Config) -> web::Data<crate::AppState> {
    let seed = crate::notes::seed::default_notes().expect("embedded seed should parse");
    web::Data::new(crate::AppState {
        store: std::sync::Arc::new(crate::notes::NoteStore::with_notes(seed)),
        config,
    })
}
