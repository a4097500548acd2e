use clap::Parser;
use partfetch::downloader::{DEFAULT_CHUNKS_PER_PART, DEFAULT_PART_SIZE};
use partfetch::{Download, DownloaderBuilder};
use reqwest::Url;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Download one file with concurrent HTTP range requests.
#[derive(Parser, Debug)]
#[command(name = "partfetch", version, about)]
struct Cli {
    /// URL of the file to download.
    url: Url,

    /// Output file name. Defaults to the last segment of the URL.
    #[arg(short, long)]
    output: Option<String>,

    /// Directory to save the file in.
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Maximum bytes per sequential part.
    #[arg(long, default_value_t = DEFAULT_PART_SIZE)]
    part_size: u64,

    /// Concurrent sub-ranges per part.
    #[arg(long, default_value_t = DEFAULT_CHUNKS_PER_PART)]
    chunks: u32,

    /// Hide the progress bars.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let download = match cli.output {
        Some(ref name) => Download::new(&cli.url, name),
        None => match Download::try_from(&cli.url) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("{} (use --output to name the file)", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let builder = if cli.quiet {
        DownloaderBuilder::hidden()
    } else {
        DownloaderBuilder::new()
    };
    let downloader = builder
        .directory(cli.directory)
        .part_size_bytes(cli.part_size)
        .chunks_per_part(cli.chunks)
        .build();

    match downloader.download(&download).await {
        Ok(summary) => {
            println!(
                "Download completed successfully: {} bytes to {}",
                summary.size(),
                summary.path().display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Download failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
