use std::{process, thread, time::Duration};
use rumqttc::{Client, Event, MqttOptions, Packet, QoS};
use crate::{args::Args, error::WatchError, watch::Watcher};

pub const KEEP_ALIVE: Duration = Duration::from_secs(60);
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Capacity of the request channel between the client and the event loop.
const REQUEST_CAPACITY: usize = 10;

/// Connection options for the broker named in the arguments. Credentials are only sent when a
/// user is given, a missing password is sent as an empty one.
/// 
pub fn options(args: &Args) -> MqttOptions {
    let client_id = format!("chronodecahedron-watcher-{}", process::id());
    let mut options = MqttOptions::new(client_id, args.server.clone(), args.port);
    options.set_keep_alive(KEEP_ALIVE);
    if let Some(user) = &args.user {
        options.set_credentials(user.clone(), args.password.clone().unwrap_or_default());
    }
    options
}

/// Connects to the broker and feeds every message on the watched topics to `watcher`. Runs until
/// the client is dropped by the event loop or the log file cannot be written.
/// 
pub fn watch(args: &Args, watcher: &mut Watcher) -> Result<(), WatchError> {
    log::info!("Connecting to {}:{}", args.server, args.port);
    let (client, mut connection) = Client::new(options(args), REQUEST_CAPACITY);

    for notification in connection.iter() {
        match notification {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                log::info!("Connected to MQTT");
                // The session is clean, so subscriptions are renewed on every (re)connect.
                for topic in watcher.topics() {
                    client.try_subscribe(topic.as_str(), QoS::AtMostOnce)?;
                }
            }
            Ok(Event::Incoming(Packet::SubAck(_))) => log::info!("Completed subscription"),
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let payload = String::from_utf8_lossy(&publish.payload);
                watcher.on_message(&publish.topic, &payload)?;
            }
            Ok(_) => {}
            Err(err) => {
                log::warn!("MQTT connection failed: {}", err);
                thread::sleep(RECONNECT_DELAY);
            }
        }
    }
    Ok(())
}
