use std::sync::Arc;

use axum::{debug_handler, extract::{Path, State}, Json};
use serde::Serialize;

use crate::{store::{ChatState, Message}, AppResult};

use super::SendMessageBody;

#[derive(Serialize)]
pub(crate) struct SendMessageResponse {
    success: bool,
    message: &'static str,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn send_message(
    Path(room_id): Path<String>,
    State(chat): State<Arc<ChatState>>,
    Json(SendMessageBody { username, message }): Json<SendMessageBody>,
) -> AppResult<Json<SendMessageResponse>> {
    chat.post_message(&room_id, &username, &message).await?;

    Ok(Json(SendMessageResponse {
        success: true,
        message: "Message sent",
    }))
}

#[derive(Serialize)]
pub(crate) struct MessagesResponse {
    success: bool,
    messages: Vec<Message>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn get_messages(
    Path(room_id): Path<String>,
    State(chat): State<Arc<ChatState>>,
) -> Json<MessagesResponse> {
    let messages = chat.recent_messages(&room_id).await;

    Json(MessagesResponse {
        success: true,
        messages,
    })
}
