// WebSocket session: one duplex connection driven by a single select
// loop. Inbound frames, outbound frames, key edges and the countdown
// timer all land here and are processed to completion one at a time.

use std::time::{Duration, Instant};

use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};

use crate::domain::{Key, KeyEdge};
use crate::interface_adapters::presentation::PresentationSink;
use crate::interface_adapters::protocol::{self, ServerEvent, WireFrameDto};
use crate::use_cases::phase::PhaseController;
use crate::use_cases::types::{ChatCommand, ChatLine, OutboundFrame};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const LOG_THROTTLE: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub enum NetError {
    Ws(tungstenite::Error),
    Serialization(serde_json::Error),
    OutboundClosed,
}

impl From<tungstenite::Error> for NetError {
    fn from(e: tungstenite::Error) -> Self {
        NetError::Ws(e)
    }
}

pub async fn connect(url: &str) -> Result<WsStream, NetError> {
    let (stream, response) = connect_async(url).await.map_err(NetError::Ws)?;
    debug!(status = %response.status(), "websocket connected");
    Ok(stream)
}

/// Runs the session until the server disconnects, the key source closes
/// (user quit) or the transport errors. Disconnect is fatal to the
/// session; there is no reconnect.
pub async fn run_session<S: PresentationSink>(
    stream: WsStream,
    controller: &mut PhaseController<S>,
    mut outbound_rx: mpsc::Receiver<OutboundFrame>,
    mut keys_rx: mpsc::Receiver<(Key, KeyEdge)>,
) -> Result<(), NetError> {
    let (mut ws_tx, mut ws_rx) = stream.split();

    // The one scheduled piece of work in the client: the countdown stage
    // timer. A single slot, so a second match start cannot re-enter it.
    let mut countdown_deadline: Option<tokio::time::Instant> = None;

    let mut invalid_frames: u32 = 0;
    let mut last_invalid_log = Instant::now() - LOG_THROTTLE;

    loop {
        let deadline = countdown_deadline;
        let countdown_timer = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            incoming = ws_rx.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(delay) = handle_server_text(
                            controller,
                            &text,
                            &mut invalid_frames,
                            &mut last_invalid_log,
                        ) {
                            countdown_deadline =
                                Some(tokio::time::Instant::now() + delay);
                        }
                    }
                    Some(Ok(Message::Binary(_))) => {
                        warn!("binary frame ignored");
                    }
                    Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => {}
                    Some(Ok(Message::Close(_))) => {
                        info!("server closed the connection");
                        return Ok(());
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "websocket recv error");
                        return Err(NetError::Ws(e));
                    }
                    None => {
                        info!("websocket closed");
                        return Ok(());
                    }
                }
            }

            frame = outbound_rx.recv() => {
                let Some(frame) = frame else {
                    return Err(NetError::OutboundClosed);
                };
                send_frame(&mut ws_tx, frame).await?;
            }

            key = keys_rx.recv() => {
                match key {
                    Some((key, edge)) => controller.handle_key(key, edge),
                    None => {
                        info!("key input closed; leaving session");
                        return Ok(());
                    }
                }
            }

            _ = countdown_timer => {
                countdown_deadline = controller
                    .countdown_tick()
                    .map(|delay| tokio::time::Instant::now() + delay);
            }
        }
    }
}

/// Routes one inbound text frame. Returns a delay when the frame started
/// the countdown. Malformed frames are dropped; the session continues.
fn handle_server_text<S: PresentationSink>(
    controller: &mut PhaseController<S>,
    text: &str,
    invalid_frames: &mut u32,
    last_invalid_log: &mut Instant,
) -> Option<Duration> {
    match protocol::decode_server_event(text) {
        Ok(ServerEvent::Chat(msg)) => {
            if ChatCommand::parse(&msg.command) == Some(ChatCommand::StartGame) {
                return controller.handle_match_start(&msg.message);
            }
            controller.handle_chat_line(ChatLine {
                username: msg.username,
                message: msg.message,
            });
            None
        }
        Ok(ServerEvent::Snapshot(snapshot)) => {
            controller.handle_snapshot(snapshot.into());
            None
        }
        Err(parse_err) => {
            *invalid_frames += 1;
            if should_log(last_invalid_log) {
                warn!(
                    bytes = text.len(),
                    count = *invalid_frames,
                    error = %parse_err,
                    "failed to parse server frame"
                );
            }
            None
        }
    }
}

async fn send_frame(
    ws_tx: &mut SplitSink<WsStream, Message>,
    frame: OutboundFrame,
) -> Result<(), NetError> {
    let dto = WireFrameDto::from(frame);
    let txt = serde_json::to_string(&dto).map_err(NetError::Serialization)?;
    ws_tx
        .send(Message::Text(txt.into()))
        .await
        .map_err(NetError::Ws)
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}
