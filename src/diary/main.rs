//! The binary is a thin shell: everything user-facing lives in `cli/`, and this
//! file only runs it and turns a startup failure into exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
