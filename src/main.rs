use clap::Parser;
use pagemenu::core::config::{self, CliOverrides};
use pagemenu::documents::{load_documents, sample_documents};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagemenu", about = "Page through text files with a scrolling tab strip")]
struct Args {
    /// Files to show, one page each (built-in samples if omitted)
    files: Vec<PathBuf>,

    /// Zero-based page to open on
    #[arg(short, long)]
    start: Option<usize>,

    /// Tabs visible in the menu strip at once (1 or 3)
    #[arg(short, long)]
    visible: Option<usize>,

    /// Config file (default: ~/.pagemenu/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to pagemenu.log in current directory.
    // Installed before config loading so its warnings are kept; the level
    // from the config is applied once resolved.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("pagemenu.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_page: args.start,
            visible_items: args.visible,
        },
    );
    log::set_max_level(log_level_filter(&resolved.log_level));

    log::info!("pagemenu starting up: {:?}", resolved);

    let documents = if args.files.is_empty() {
        sample_documents()
    } else {
        load_documents(&args.files)?
    };

    pagemenu::tui::run(documents, &resolved)
}

/// Level from the config string; unknown names fall back to debug.
fn log_level_filter(name: &str) -> LevelFilter {
    name.parse().unwrap_or_else(|_| {
        log::warn!("Unknown log_level {name:?}, using debug");
        LevelFilter::Debug
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log_level_filter("info"), LevelFilter::Info);
        assert_eq!(log_level_filter("OFF"), LevelFilter::Off);
        assert_eq!(log_level_filter("chatty"), LevelFilter::Debug);
    }
}
