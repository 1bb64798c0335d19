fn main() {
    if let Err(err) = popover_placement::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
