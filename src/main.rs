// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match sales_summary::run() {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
