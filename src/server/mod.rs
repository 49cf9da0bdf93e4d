//! # Server Module
//!
//! The UDP dispatch loop and per-player outbound delivery.
//!
//! One datagram is one command. The loop decodes the sender address into a
//! client key, parses the text, applies the command to the engine under a
//! single lock (the lock guards the sessions and the building order
//! together, since a reset mutates both), and routes the reply: a
//! `player:<id>` acknowledgement straight back over UDP on join, room text
//! through the player's delivery channel.

pub mod commands;

pub use commands::{parse_command, Command};

use crate::engine::{Engine, Reply, INVALID_COMMAND_TEXT};
use crate::{PlayerId, WarrenError, WarrenResult};
use log::{info, warn};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, Mutex};

/// Outbound delivery seam between the engine's replies and the transport.
///
/// Delivery is fire-and-forget: implementations must not block the command
/// loop, and a player with no subscriber simply misses the message.
pub trait DeliverySink: Send {
    fn deliver(&mut self, player_id: PlayerId, text: &str);
}

/// Fans each player's messages out over in-process channels, one topic per
/// player (the role MQTT topics `mud/player/<id>` played in the reference
/// deployment).
#[derive(Default)]
pub struct ChannelDelivery {
    subscribers: HashMap<PlayerId, Vec<mpsc::UnboundedSender<String>>>,
}

impl ChannelDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a subscriber to a player's message stream.
    pub fn subscribe(&mut self, player_id: PlayerId) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.entry(player_id).or_default().push(tx);
        rx
    }
}

impl DeliverySink for ChannelDelivery {
    fn deliver(&mut self, player_id: PlayerId, text: &str) {
        let Some(senders) = self.subscribers.get_mut(&player_id) else {
            return;
        };
        // Drop subscribers whose receiving end has gone away.
        senders.retain(|tx| tx.send(text.to_string()).is_ok());
    }
}

/// The UDP command server.
pub struct Server<D: DeliverySink> {
    socket: UdpSocket,
    engine: Arc<Mutex<Engine>>,
    delivery: Arc<Mutex<D>>,
}

impl<D: DeliverySink> Server<D> {
    /// Binds the UDP socket and wires up the engine and delivery sink.
    pub async fn bind(
        addr: &str,
        engine: Arc<Mutex<Engine>>,
        delivery: Arc<Mutex<D>>,
    ) -> WarrenResult<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!("listening on UDP {}", socket.local_addr()?);
        Ok(Self {
            socket,
            engine,
            delivery,
        })
    }

    /// The address the server actually bound, for clients and tests.
    pub fn local_addr(&self) -> WarrenResult<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Receives and dispatches datagrams until the socket fails.
    ///
    /// Datagrams are processed one at a time, which preserves per-player
    /// command ordering for free.
    pub async fn run(&self) -> WarrenResult<()> {
        let mut buf = vec![0u8; 1024];
        loop {
            let (n, peer) = self.socket.recv_from(&mut buf).await?;
            let text = String::from_utf8_lossy(&buf[..n]);
            info!("received command: {} from {peer}", text.trim());
            self.handle_datagram(text.trim(), peer).await;
        }
    }

    /// Applies one datagram's command and routes the reply.
    async fn handle_datagram(&self, text: &str, peer: SocketAddr) {
        let client_key = peer.to_string();
        let mut engine = self.engine.lock().await;

        let command = parse_command(text);
        let known_player = engine.player_for_key(&client_key);

        match command {
            Some(Command::New) => match engine.join(&client_key) {
                Ok((player_id, reply)) => {
                    // The join acknowledgement goes straight back over UDP
                    // so the client learns which channel to subscribe to.
                    self.send_udp(&format!("player:{player_id}"), peer).await;
                    self.deliver(player_id, &reply).await;
                }
                Err(WarrenError::CapacityExceeded) => {
                    self.send_udp("server full, try again later", peer).await;
                }
                Err(e) => warn!("join failed for {peer}: {e}"),
            },
            Some(cmd) => {
                let Some(player_id) = known_player else {
                    warn!("command from unknown player: {text}");
                    return;
                };
                let result = match cmd {
                    Command::Reset => engine.reset(player_id),
                    Command::Move(direction) => engine.move_player(player_id, direction),
                    Command::New => unreachable!("handled above"),
                };
                match result {
                    Ok(reply) => self.deliver(player_id, &reply).await,
                    Err(e) => warn!("command '{text}' from player {player_id} failed: {e}"),
                }
            }
            None => {
                let Some(player_id) = known_player else {
                    warn!("command from unknown player: {text}");
                    return;
                };
                info!("player {player_id} sent invalid command: {text}");
                self.delivery
                    .lock()
                    .await
                    .deliver(player_id, INVALID_COMMAND_TEXT);
            }
        }
    }

    async fn deliver(&self, player_id: PlayerId, reply: &Reply) {
        let mut delivery = self.delivery.lock().await;
        delivery.deliver(player_id, reply.text());
        if let Reply::Description { won: true, .. } = reply {
            delivery.deliver(player_id, "You found the item! Send 'reset' to play again.");
        }
    }

    async fn send_udp(&self, message: &str, peer: SocketAddr) {
        if let Err(e) = self.socket.send_to(message.as_bytes(), peer).await {
            warn!("failed to send UDP reply to {peer}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_delivery_routes_to_the_right_player() {
        let mut delivery = ChannelDelivery::new();
        let mut rx0 = delivery.subscribe(0);
        let mut rx1 = delivery.subscribe(1);

        delivery.deliver(0, "hello zero");
        delivery.deliver(1, "hello one");

        assert_eq!(rx0.try_recv().unwrap(), "hello zero");
        assert_eq!(rx1.try_recv().unwrap(), "hello one");
        assert!(rx0.try_recv().is_err());
    }

    #[test]
    fn delivery_without_subscribers_is_a_no_op() {
        let mut delivery = ChannelDelivery::new();
        delivery.deliver(9, "nobody listening");
    }

    #[test]
    fn dead_subscribers_are_dropped() {
        let mut delivery = ChannelDelivery::new();
        let rx = delivery.subscribe(0);
        drop(rx);
        delivery.deliver(0, "gone");
        assert!(delivery.subscribers.get(&0).unwrap().is_empty());
    }
}
