use std::io;

use plaza::cli::{seed_demo, App};
use plaza::network::Directory;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Initializing Social Network Simulation...");
    let mut directory = Directory::new();
    seed_demo(&mut directory)?;
    println!("Initialization complete. Welcome!");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(directory, stdin.lock(), stdout.lock());
    app.run()?;
    Ok(())
}
