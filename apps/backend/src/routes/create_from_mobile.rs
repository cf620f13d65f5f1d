//! The create-from-mobile webhook: one conversational turn per request.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::services::validation::{self, InboundTurn};
use crate::state::app_state::AppState;

/// POST /sms-multiplayer-game/create-from-mobile
///
/// Validates the turn synchronously and acknowledges with an empty 200;
/// the conversational side effects (store writes, prompts, game creation)
/// run on a spawned task. The gateway never waits on them.
async fn create_from_mobile(
    form: web::Form<InboundTurn>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let turn = validation::validate_turn(&app_state.stories, form.into_inner())?;

    let conversations = app_state.conversations.clone();
    tokio::spawn(async move {
        conversations.handle_turn(turn).await;
    });

    Ok(HttpResponse::Ok().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create-from-mobile").route(web::post().to(create_from_mobile)));
}
