//! Evaluates the Pietrzak delay function and prints the proof.

mod cmd;

use clap::Parser;

fn main() {
    let cmd = cmd::Cmd::parse();
    if let Err(err) = cmd.run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
