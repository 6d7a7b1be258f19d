use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ablog")]
#[command(about = "An in-memory micro-blog sandbox for the terminal", long_about = None)]
pub struct Cli {
    /// Number of posts to seed the feed with (default from config, 30)
    #[arg(long)]
    pub seed: Option<usize>,

    /// Size of the archive batch (default from config, 10000)
    #[arg(long)]
    pub archive_size: Option<usize>,

    /// Start the session in fake dark mode
    #[arg(long)]
    pub dark: bool,
}
