use clap::Parser;
use libris::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "libris", about = "Terminal Open Library browser")]
struct Args {
    /// Search query to run on startup (overrides config and env)
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to libris.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("libris.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("libris: {e}");
            std::process::exit(2);
        }
    };
    let resolved = config::resolve(&file_config, args.query.as_deref());
    log::info!(
        "Libris starting up (startup query: {:?}, catalog: {})",
        resolved.default_query,
        resolved.openlibrary_base_url
    );

    libris::tui::run(resolved)
}
