//! Randclip CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = randclip::run() {
        eprintln!("error: {}", e.display_chain());
        std::process::exit(e.exit_code());
    }
}
