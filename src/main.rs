use woodpusher::uci;

fn main() {
    env_logger::init();
    uci::run_uci_loop();
}
