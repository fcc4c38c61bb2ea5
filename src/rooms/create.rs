use std::sync::Arc;

use axum::{debug_handler, extract::State, Json};
use serde::Serialize;

use crate::store::ChatState;

use super::UsernameBody;

#[derive(Serialize)]
pub(crate) struct CreateInviteResponse {
    success: bool,
    #[serde(rename = "roomId")]
    room_id: String,
    username: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn create_invite(
    State(chat): State<Arc<ChatState>>,
    Json(UsernameBody { username }): Json<UsernameBody>,
) -> Json<CreateInviteResponse> {
    let room_id = chat.create_room(&username).await;

    Json(CreateInviteResponse {
        success: true,
        room_id,
        username,
    })
}
