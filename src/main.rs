use actix_web::{App, HttpServer};
use anyhow::Context;
use clap::Parser;

use heimdall::{configure, PingRegistrar, TrackingAllocator};

mod cli;

use cli::CommandArgs;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    TrackingAllocator::enable();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);

    print_banner(&args);

    let registrar = PingRegistrar::new();
    let route = args.route.clone();

    HttpServer::new(move || App::new().configure(configure(registrar.clone(), route.clone())))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    Ok(())
}

fn print_banner(args: &CommandArgs) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Heimdall v{:<43}║", env!("CARGO_PKG_VERSION"));
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    {:<24}- Liveness and memory usage", args.route);
    println!("═══════════════════════════════════════════════════════════");
}
