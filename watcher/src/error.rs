use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum WatchError
{
    Io(io::Error),
    /// A payload that is not the number the topic should carry.
    BadPayload { topic: String, payload: String },
    /// A command line flag that needs a value came last.
    MissingValue(String),
    BadValue { flag: String, value: String },
    UnknownArgument(String),
    Mqtt(rumqttc::ClientError),
}

impl Error for WatchError {}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::BadPayload { topic, payload } => write!(f, "Bad payload on {}: {:?}", topic, payload),
            Self::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            Self::BadValue { flag, value } => write!(f, "Bad value for {}: {}", flag, value),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {}", arg),
            Self::Mqtt(err) => write!(f, "MQTT error: {}", err),
        }
    }
}

impl From<io::Error> for WatchError
{
    fn from(err: io::Error) -> Self {
        WatchError::Io(err)
    }
}

impl From<rumqttc::ClientError> for WatchError
{
    fn from(err: rumqttc::ClientError) -> Self {
        WatchError::Mqtt(err)
    }
}
