use abc_path::game::calc_riddle;
use abc_path::render;
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| rand::thread_rng().next_u64());
    info!(target: "main", "generating riddle from seed {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let riddle = calc_riddle(&mut rng);

    println!("{}", render::riddle_table(&riddle));
    println!("Solution:\n{}", riddle.solution);
}
