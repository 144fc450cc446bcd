use std::{env, io, process::ExitCode};

mod args;
mod error;
mod mqtt;
mod state;
mod watch;

use args::{Args, USAGE};
use watch::Watcher;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse(env::args().skip(1), |name| env::var(name).ok()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let mut watcher = Watcher::new(&args);
    for topic in watcher.topics() {
        log::info!("Watching {}", topic);
    }

    let result = if args.stdin {
        watch::watch_lines(&mut watcher, io::stdin().lock())
    } else {
        mqtt::watch(&args, &mut watcher)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
