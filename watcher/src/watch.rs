use std::io::BufRead;
use chrono::Local;
use crate::{args::Args, error::WatchError, state::*};

/// Follows the state topics of one device and logs every side change.
/// 
pub struct Watcher
{
    topics: [String; 3],
    state: Chronodecahedron,
    state_log: StateLog,
}

impl Watcher {
    pub fn new(args: &Args) -> Self {
        Watcher {
            topics: [SIDE_SENSOR, BATTERY_SENSOR, LAST_SEEN_SENSOR].map(|sensor| state_topic(&args.device, sensor)),
            state: Chronodecahedron::default(),
            state_log: StateLog::new(args.logfile.clone()),
        }
    }

    /// The topics to subscribe to.
    pub fn topics(&self) -> &[String; 3] {
        &self.topics
    }

    /// Handles one message. Messages on other topics are ignored and bad payloads only logged,
    /// failing to write the log file is an error.
    /// 
    pub fn on_message(&mut self, topic: &str, payload: &str) -> Result<(), WatchError> {
        if !self.topics.iter().any(|t| t == topic) {
            log::debug!("Ignoring message on {}", topic);
            return Ok(());
        }

        match self.state.on_message(topic, payload) {
            Ok(true) => println!("{}", self.state_log.record(Local::now().naive_local(), &self.state)?),
            Ok(false) => {}
            Err(err) => log::warn!("{}", err),
        }
        Ok(())
    }
}

/// Follows `<topic> <payload>` lines on `input` until it is closed.
/// 
pub fn watch_lines<R: BufRead>(watcher: &mut Watcher, input: R) -> Result<(), WatchError> {
    for line in input.lines() {
        let line = line?;
        let Some((topic, payload)) = line.split_once(' ') else {
            log::debug!("Skipping line without payload: {:?}", line);
            continue;
        };
        watcher.on_message(topic, payload)?;
    }
    Ok(())
}
