use std::sync::Arc;

use axum::{debug_handler, extract::{Path, State}, Json};
use serde::Serialize;

use crate::{store::ChatState, AppResult};

use super::UsernameBody;

#[derive(Serialize)]
pub(crate) struct JoinResponse {
    success: bool,
    message: String,
    members: Vec<String>,
    member_count: usize,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn join_room(
    Path(room_id): Path<String>,
    State(chat): State<Arc<ChatState>>,
    Json(UsernameBody { username }): Json<UsernameBody>,
) -> AppResult<Json<JoinResponse>> {
    let members = chat.join(&room_id, &username).await?;
    let member_count = members.len();

    Ok(Json(JoinResponse {
        success: true,
        message: format!("Joined room {room_id}"),
        members,
        member_count,
    }))
}
