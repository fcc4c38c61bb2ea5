use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{AppError, AppResult};

const MESSAGE_LOG_CAP: usize = 100;
const RECENT_WINDOW: usize = 50;

pub const SYSTEM_USERNAME: &str = "System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    System,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub username: String,
    pub message: String,
    pub timestamp: f64,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

#[derive(Debug)]
struct Room {
    members: Vec<String>,
    host: String,
    created_at: f64,
}

#[derive(Default)]
struct Shared {
    rooms: HashMap<String, Room>,
    messages: HashMap<String, Vec<Message>>,
}

/// All chat state lives here, behind one lock. Every operation is a quick
/// dictionary update, so a single coarse mutex is plenty.
#[derive(Default)]
pub struct ChatState {
    shared: Mutex<Shared>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_room(&self, username: &str) -> String {
        let mut shared = self.shared.lock().await;

        let room_id = loop {
            let candidate = room_code();
            if !shared.rooms.contains_key(&candidate) {
                break candidate;
            }
        };

        let room = Room {
            members: vec![username.to_owned()],
            host: username.to_owned(),
            created_at: now_unix(),
        };
        tracing::info!(%room_id, host = %room.host, created_at = room.created_at, "room created");

        shared.rooms.insert(room_id.clone(), room);
        shared.messages.insert(room_id.clone(), Vec::new());
        room_id
    }

    /// Adds `username` to the room if not already present and announces the
    /// join in the room's log. Joining twice is a no-op for the member list.
    pub async fn join(&self, room_id: &str, username: &str) -> AppResult<Vec<String>> {
        let mut shared = self.shared.lock().await;

        let room = shared.rooms.get_mut(room_id).ok_or(AppError::RoomNotFound)?;
        if !room.members.iter().any(|m| m == username) {
            room.members.push(username.to_owned());
        }
        let members = room.members.clone();

        push_message(&mut shared.messages, room_id, Message {
            username: SYSTEM_USERNAME.to_owned(),
            message: format!("{username} joined the room"),
            timestamp: now_unix(),
            kind: MessageKind::System,
        });

        tracing::info!(%room_id, %username, "user joined room");
        Ok(members)
    }

    pub async fn members(&self, room_id: &str) -> AppResult<Vec<String>> {
        let shared = self.shared.lock().await;
        let room = shared.rooms.get(room_id).ok_or(AppError::RoomNotFound)?;
        Ok(room.members.clone())
    }

    /// The emptiness check runs on the trimmed text, but the stored value is
    /// the text exactly as received.
    pub async fn post_message(&self, room_id: &str, username: &str, text: &str) -> AppResult<()> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let mut shared = self.shared.lock().await;
        if !shared.rooms.contains_key(room_id) {
            return Err(AppError::RoomNotFound);
        }

        push_message(&mut shared.messages, room_id, Message {
            username: username.to_owned(),
            message: text.to_owned(),
            timestamp: now_unix(),
            kind: MessageKind::Text,
        });

        tracing::info!(%room_id, %username, "message posted");
        Ok(())
    }

    /// Last 50 messages in chronological order; unknown room yields an empty
    /// list rather than an error.
    pub async fn recent_messages(&self, room_id: &str) -> Vec<Message> {
        let shared = self.shared.lock().await;
        let Some(log) = shared.messages.get(room_id) else {
            return Vec::new();
        };
        let start = log.len().saturating_sub(RECENT_WINDOW);
        log[start..].to_vec()
    }
}

fn push_message(messages: &mut HashMap<String, Vec<Message>>, room_id: &str, message: Message) {
    let log = messages.entry(room_id.to_owned()).or_default();
    log.push(message);
    if log.len() > MESSAGE_LOG_CAP {
        let overflow = log.len() - MESSAGE_LOG_CAP;
        log.drain(..overflow);
    }
}

// First 8 hex chars of a v4 UUID, uppercased, e.g. "3F09A2C4".
fn room_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

fn now_unix() -> f64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 / 1e9
}
