use std::path::PathBuf;
use crate::error::WatchError;

pub static DEFAULT_DEVICE: &str = "timecube";
pub static DEFAULT_SERVER: &str = "localhost";
pub const DEFAULT_PORT: u16 = 1883;

pub static USAGE: &str = "\
Watch the MQTT topics of a chronodecahedron and keep a log of the side it lies on.

Usage: watcher [options]

  -s, --server    MQTT host [default: localhost]
  -p, --port      MQTT port [default: 1883]
  -u, --user      MQTT user [env: CHRONO_MQTT_USER]
  -w, --password  MQTT password [env: CHRONO_MQTT_PASS]
  -d, --device    ESPHome hostname, used for the MQTT topics [default: timecube]
  -l, --logfile   File to append side changes to
      --stdin     Read `<topic> <payload>` lines from stdin instead of connecting, e.g. the
                  output of `mosquitto_sub -v`
  -h, --help      Print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args
{
    pub server: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub device: String,
    pub logfile: Option<PathBuf>,
    pub stdin: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            user: None,
            password: None,
            device: DEFAULT_DEVICE.to_string(),
            logfile: None,
            stdin: false,
            help: false,
        }
    }
}

impl Args {

    /// Parses the command line arguments (without the program name). The MQTT user and password
    /// fall back to the environment, read through `env`.
    /// 
    pub fn parse<I, E>(args: I, env: E) -> Result<Args, WatchError>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut parsed = Args {
            user: env("CHRONO_MQTT_USER"),
            password: env("CHRONO_MQTT_PASS"),
            ..Default::default()
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-s" | "--server" => parsed.server = value(&mut args, arg)?,
                "-p" | "--port" => {
                    let port = value(&mut args, arg.clone())?;
                    parsed.port = port
                        .parse()
                        .map_err(|_| WatchError::BadValue { flag: arg, value: port })?;
                }
                "-u" | "--user" => parsed.user = Some(value(&mut args, arg)?),
                "-w" | "--password" => parsed.password = Some(value(&mut args, arg)?),
                "-d" | "--device" => parsed.device = value(&mut args, arg)?,
                "-l" | "--logfile" => parsed.logfile = Some(PathBuf::from(value(&mut args, arg)?)),
                "--stdin" => parsed.stdin = true,
                "-h" | "--help" => parsed.help = true,
                _ => return Err(WatchError::UnknownArgument(arg)),
            }
        }
        Ok(parsed)
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: String) -> Result<String, WatchError> {
    args.next().ok_or(WatchError::MissingValue(flag))
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    pub fn test_defaults() {
        let parsed = Args::parse(args(&[]), no_env).unwrap();
        assert_eq!(parsed, Args::default());
        assert_eq!(parsed.server, "localhost");
        assert_eq!(parsed.port, 1883);
        assert_eq!(parsed.device, "timecube");
        assert_eq!(parsed.user, None);
        assert_eq!(parsed.logfile, None);
        assert!(!parsed.stdin);
        assert!(!parsed.help);
    }

    #[test]
    pub fn test_flags() {
        let parsed = Args::parse(args(&[
            "-s", "broker.lan", "--port", "8883", "-u", "alice", "--password", "secret",
            "-d", "dice", "--logfile", "/tmp/sides.log", "--stdin",
        ]), no_env).unwrap();
        assert_eq!(parsed.server, "broker.lan");
        assert_eq!(parsed.port, 8883);
        assert_eq!(parsed.user.as_deref(), Some("alice"));
        assert_eq!(parsed.password.as_deref(), Some("secret"));
        assert_eq!(parsed.device, "dice");
        assert_eq!(parsed.logfile, Some(PathBuf::from("/tmp/sides.log")));
        assert!(parsed.stdin);
    }

    #[test]
    pub fn test_credentials_from_environment() {
        let env = |name: &str| match name {
            "CHRONO_MQTT_USER" => Some("env-user".to_string()),
            "CHRONO_MQTT_PASS" => Some("env-pass".to_string()),
            _ => None,
        };
        let parsed = Args::parse(args(&[]), env).unwrap();
        assert_eq!(parsed.user.as_deref(), Some("env-user"));
        assert_eq!(parsed.password.as_deref(), Some("env-pass"));

        let parsed = Args::parse(args(&["--user", "cli"]), env).unwrap();
        assert_eq!(parsed.user.as_deref(), Some("cli"));
        assert_eq!(parsed.password.as_deref(), Some("env-pass"));
    }

    #[test]
    pub fn test_missing_value() {
        let result = Args::parse(args(&["--device"]), no_env);
        assert!(matches!(result, Err(WatchError::MissingValue(flag)) if flag == "--device"));
    }

    #[test]
    pub fn test_bad_port() {
        let result = Args::parse(args(&["-p", "70000"]), no_env);
        assert!(matches!(result, Err(WatchError::BadValue { flag, value }) if flag == "-p" && value == "70000"));
    }

    #[test]
    pub fn test_unknown_argument() {
        let result = Args::parse(args(&["--qos", "1"]), no_env);
        assert!(matches!(result, Err(WatchError::UnknownArgument(arg)) if arg == "--qos"));
    }
}
