fn main() {
    if let Err(err) = snippetforge::cli::run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
