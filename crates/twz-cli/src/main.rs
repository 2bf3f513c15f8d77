#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = twz_cli::run_from_env() {
        eprintln!("twz: {error}");
        std::process::exit(error.exit_code());
    }
}
