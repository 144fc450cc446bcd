use std::{fmt, fs::OpenOptions, io::Write, path::PathBuf};
use chrono::NaiveDateTime;
use crate::error::WatchError;

pub static SIDE_SENSOR: &str = "chronodecahedron_side";
pub static BATTERY_SENSOR: &str = "battery_level";
pub static LAST_SEEN_SENSOR: &str = "last_seen";

/// Topic the device publishes the given sensor's state on.
/// 
pub fn state_topic(device: &str, sensor: &str) -> String {
    format!("{}/sensor/{}/state", device, sensor)
}

/// Last known state of the chronodecahedron, as far as the published values tell.
/// 
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chronodecahedron
{
    /// The face that is up.
    pub side: Option<u8>,

    /// In percent.
    pub battery_level: Option<i32>,

    pub last_seen: Option<String>,
}

impl fmt::Display for Chronodecahedron {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.side {
            Some(side) => write!(f, "{:>2}", side)?,
            None => write!(f, "--")?,
        }
        write!(
            f, " {:>3} {}",
            self.battery_level.unwrap_or(-1),
            self.last_seen.as_deref().unwrap_or("Unknown"),
        )
    }
}

impl Chronodecahedron {

    /// Updates the state from a single message, returns true if the side changed.
    /// 
    pub fn on_message(&mut self, topic: &str, payload: &str) -> Result<bool, WatchError> {
        let mut side_changed = false;
        if topic.contains(SIDE_SENSOR) {
            let side = u8::try_from(parse_number(topic, payload)?)
                .map_err(|_| bad_payload(topic, payload))?;
            if self.side != Some(side) {
                self.side = Some(side);
                side_changed = true;
            }
        }
        if topic.contains(BATTERY_SENSOR) {
            self.battery_level = Some(parse_number(topic, payload)?);
        }
        if topic.contains(LAST_SEEN_SENSOR) {
            self.last_seen = Some(payload.to_string());
        }
        Ok(side_changed)
    }
}

/// Sensor values may be published as floats (`"3.0"`), those are accepted as long as they hold a
/// whole number.
/// 
fn parse_number(topic: &str, payload: &str) -> Result<i32, WatchError> {
    let payload = payload.trim();
    if let Ok(number) = payload.parse::<i32>() {
        return Ok(number);
    }
    payload
        .parse::<f32>()
        .ok()
        .and_then(|number| math::nearest_integer(number, 1e-3))
        .ok_or_else(|| bad_payload(topic, payload))
}

fn bad_payload(topic: &str, payload: &str) -> WatchError {
    WatchError::BadPayload {
        topic: topic.to_string(),
        payload: payload.trim().to_string(),
    }
}

/// Non-volatile log of side changes, one line per change.
/// 
pub struct StateLog
{
    path: Option<PathBuf>,
}

impl StateLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        StateLog { path }
    }

    /// Formats the log line for the state at the given time and appends it to the log file, if
    /// there is one. The line is returned so it can be shown as well.
    /// 
    pub fn record(&self, time: NaiveDateTime, state: &Chronodecahedron) -> Result<String, WatchError> {
        let line = format!("{} {}", time.format("%Y-%m-%dT%H:%M:%S"), state);
        if let Some(path) = &self.path {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", line)?;
        }
        Ok(line)
    }
}
