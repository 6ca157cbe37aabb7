use std::process;

fn main() {
    if let Err(e) = textbook_rsa::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
