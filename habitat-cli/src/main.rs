//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = habitat_cli::run() {
        eprintln!("habitat: {err}");
        std::process::exit(1);
    }
}
