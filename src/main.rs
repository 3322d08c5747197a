fn main() {
    if let Err(err) = rail_network_graph::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
