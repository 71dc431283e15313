fn main() {
    if let Err(err) = player_stats_clean::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
