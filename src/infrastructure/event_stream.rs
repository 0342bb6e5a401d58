// Newline-delimited JSON streaming of dashboard events
use crate::domain::event::DashboardEvent;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use tokio::sync::broadcast;

/// Serialize one event as a JSON line.
pub fn serialize_line(event: &DashboardEvent) -> Result<Bytes, serde_json::Error> {
    let json = serde_json::to_vec(event)?;
    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');
    Ok(line.freeze())
}

/// Yield events until the channel closes, skipping over lagged gaps.
pub fn event_lines(
    mut rx: broadcast::Receiver<DashboardEvent>,
) -> impl Stream<Item = Result<Bytes, serde_json::Error>> {
    async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(event) => yield serialize_line(&event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event subscriber lagged, dropping events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

/// Streaming NDJSON response fed by a broadcast subscription.
pub fn ndjson_response(rx: broadcast::Receiver<DashboardEvent>) -> impl IntoResponse {
    let body = Body::from_stream(event_lines(rx));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_serialize_line() {
        let line = serialize_line(&DashboardEvent::ControlActivated {
            group: "view-toggle".to_string(),
            key: "list".to_string(),
        })
        .unwrap();
        assert_eq!(
            &line[..],
            b"{\"type\":\"control_activated\",\"group\":\"view-toggle\",\"key\":\"list\"}\n"
        );
    }

    #[tokio::test]
    async fn test_event_lines_end_when_channel_closes() {
        let (tx, rx) = broadcast::channel(8);
        tx.send(DashboardEvent::NotificationDismissed { id: 3 }).unwrap();
        drop(tx);

        let lines: Vec<_> = event_lines(rx).collect().await;
        assert_eq!(lines.len(), 1);
        assert_eq!(
            &lines[0].as_ref().unwrap()[..],
            b"{\"type\":\"notification_dismissed\",\"id\":3}\n"
        );
    }
}
