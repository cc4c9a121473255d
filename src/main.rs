mod app;
mod catalog;
mod config;
mod mpris;
mod player;
mod runtime;
mod store;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
