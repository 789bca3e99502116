use clap::Parser;
use cqlschema::{
    cli::{CliApp, Config},
    util::SimpleLogger,
};

static LOGGER: SimpleLogger = SimpleLogger;

pub fn main() {
    let config = Config::parse();

    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(config.log_level()))
        .unwrap();

    let stdout = std::io::stdout();
    let mut app = CliApp::new(config, stdout.lock());
    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
