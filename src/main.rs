mod blueprint;
mod cli;
mod content;
mod logging;
mod runner;
mod tree;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    runner::run(app)
}
