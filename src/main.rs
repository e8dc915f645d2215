use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = waypost::cli::Cli::parse();
    if let Err(e) = waypost::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
