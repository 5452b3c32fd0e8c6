// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live change notification for the admin dashboard.
//!
//! This module streams read-only, non-authoritative change events over
//! WebSocket connections. An event names the table that changed and
//! the kind of write; clients re-fetch over HTTP for authoritative
//! data.
//!
//! - Events are broadcast to all connected clients
//! - Events are informational only and never authoritative
//! - No commands are executed over WebSocket connections

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Maximum number of events to buffer in the broadcast channel.
/// If clients cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// A live change notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A table changed: one row was created, updated or deleted.
    Changed {
        /// The table that changed (e.g. `"bookings"`).
        table: String,
        /// The kind of write: `"created"`, `"updated"` or `"deleted"`.
        op: String,
    },
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

impl LiveEvent {
    /// Builds a change event for a table and operation.
    #[must_use]
    pub fn changed(table: &str, op: &str) -> Self {
        Self::Changed {
            table: table.to_string(),
            op: op.to_string(),
        }
    }
}

/// Broadcaster for live change events.
///
/// A lightweight wrapper around `tokio::sync::broadcast` that allows
/// multiple WebSocket clients to receive change notifications.
#[derive(Clone)]
pub struct LiveEventBroadcaster {
    /// The broadcast channel sender.
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all connected clients.
    ///
    /// If no clients are connected, the event is silently dropped.
    /// This is non-blocking and will not wait for clients to receive
    /// the event.
    pub fn broadcast(&self, event: &LiveEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast live event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No receivers for live event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Returns a receiver that will receive all future events.
    /// Events sent before subscription are not received.
    fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles WebSocket upgrade requests for live change streaming.
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(app_state): AxumState<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state.live))
}

/// Handles an individual WebSocket connection.
///
/// Sends a connection confirmation, then streams all change events
/// until the client disconnects or an error occurs.
async fn handle_socket(socket: WebSocket, broadcaster: std::sync::Arc<LiveEventBroadcaster>) {
    info!("Client connected to live change stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();

    // Send connection confirmation
    let connected_event = LiveEvent::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
    };

    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    // Task for sending events to the client
    let mut send_task = tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        // Client disconnected
                        break;
                    }
                }
                Err(e) => {
                    error!(?e, "Failed to serialize live event");
                }
            }
        }
    });

    // Task for receiving messages from the client (though we don't expect any)
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    // We don't process commands over WebSocket
                    warn!("Received unexpected message from client, ignoring");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Ping/pong handled automatically by Axum
                }
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            debug!("Send task completed");
            recv_task.abort();
        }
        _ = &mut recv_task => {
            debug!("Receive task completed");
            send_task.abort();
        }
    }

    info!("Client disconnected from live change stream");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcaster_creation() {
        let broadcaster = LiveEventBroadcaster::new();
        assert_eq!(broadcaster.tx.receiver_count(), 0);
    }

    #[test]
    fn test_broadcast_no_receivers() {
        let broadcaster = LiveEventBroadcaster::new();
        // Should not panic when no receivers
        broadcaster.broadcast(&LiveEvent::changed("bookings", "created"));
    }

    #[test]
    fn test_broadcast_with_receiver() {
        let broadcaster = LiveEventBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.broadcast(&LiveEvent::changed("bookings", "created"));

        match rx.try_recv() {
            Ok(LiveEvent::Changed { table, op }) => {
                assert_eq!(table, "bookings");
                assert_eq!(op, "created");
            }
            other => panic!("Expected Changed, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_receivers() {
        let broadcaster = LiveEventBroadcaster::new();
        let mut rx1 = broadcaster.subscribe();
        let mut rx2 = broadcaster.subscribe();

        broadcaster.broadcast(&LiveEvent::changed("technicians", "updated"));

        // Both receivers should get the event
        assert!(matches!(rx1.try_recv(), Ok(LiveEvent::Changed { .. })));
        assert!(matches!(rx2.try_recv(), Ok(LiveEvent::Changed { .. })));
    }

    #[test]
    fn test_event_serialization() {
        let event = LiveEvent::changed("gallery_images", "deleted");

        let json = serde_json::to_string(&event).expect("Failed to serialize");
        let deserialized: LiveEvent = serde_json::from_str(&json).expect("Failed to deserialize");

        match deserialized {
            LiveEvent::Changed { table, op } => {
                assert_eq!(table, "gallery_images");
                assert_eq!(op, "deleted");
            }
            LiveEvent::Connected { .. } => panic!("Wrong event type"),
        }
    }
}
