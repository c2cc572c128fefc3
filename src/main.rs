use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use sigcard::rendering::{encode, encode_png, trim_with_bounds};
use sigcard::{replay_events, PadConfig, Pen, SaveOutcome, Stroke};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Parser)]
#[command(name = "sigcard", version, about = "Signature trimming and GIF lookup for greeting cards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Crop the transparent margins of a PNG
    Trim {
        input: PathBuf,
        /// Write the trimmed PNG here instead of printing a data URL
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replay recorded strokes (JSON) through the signature pad and save
    Sign {
        strokes: PathBuf,
        #[arg(long, default_value_t = 600)]
        width: u32,
        #[arg(long, default_value_t = 200)]
        height: u32,
        #[arg(long, default_value_t = 2.0)]
        pen_width: f32,
    },
    /// Search GIFs (Giphy first, Tenor tops up)
    #[cfg(feature = "gif")]
    Search {
        query: String,
        #[arg(short, long, default_value_t = 8)]
        limit: usize,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// First GIF for each gallery category
    #[cfg(feature = "gif")]
    Gallery {
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Cards for an explore theme, gathered from every provider
    #[cfg(feature = "gif")]
    Theme {
        name: String,
        #[arg(long, default_value_t = sigcard::gif::THEME_GIFS_PER_PROVIDER)]
        per_provider: usize,
    },
    /// The trending card strip with its images
    #[cfg(feature = "gif")]
    Trending {
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        Command::Trim { input, output } => run_trim(input, output),
        Command::Sign { strokes, width, height, pen_width } => {
            let config = PadConfig {
                width,
                height,
                pen: Pen { width: pen_width, ..Pen::default() },
            };
            run_sign(strokes, config)
        }
        #[cfg(feature = "gif")]
        Command::Search { query, limit, timeout_ms } => run_search(&query, limit, timeout_ms),
        #[cfg(feature = "gif")]
        Command::Gallery { concurrency } => run_gallery(concurrency),
        #[cfg(feature = "gif")]
        Command::Theme { name, per_provider } => run_theme(&name, per_provider),
        #[cfg(feature = "gif")]
        Command::Trending { concurrency } => run_trending(concurrency),
    }
}

fn run_trim(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let raster = sigcard::rendering::decode_png(&bytes)?;
    let (trimmed, bounds) = trim_with_bounds(&raster);

    match bounds {
        Some(b) => eprintln!(
            "bounds: top={} left={} right={} bottom={} ({}x{} -> {}x{})",
            b.top,
            b.left,
            b.right,
            b.bottom,
            raster.width(),
            raster.height(),
            trimmed.width(),
            trimmed.height()
        ),
        None => eprintln!("no ink found; image left untrimmed"),
    }

    match output {
        Some(path) => {
            std::fs::write(&path, encode_png(&trimmed)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{}", encode(&trimmed)?),
    }
    Ok(())
}

fn run_sign(strokes_path: PathBuf, config: PadConfig) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&strokes_path)
        .with_context(|| format!("reading {}", strokes_path.display()))?;
    let strokes: Vec<Stroke> = serde_json::from_str(&json).context("parsing strokes")?;

    let mut pad = sigcard::new_pad(config)?;
    let saved = Arc::new(Mutex::new(None));
    let slot = saved.clone();
    pad.on_save(move |img| {
        if let Ok(mut s) = slot.lock() {
            *s = Some(img.clone());
        }
    });
    pad.on_notice(|msg| eprintln!("{}", msg));

    for event in replay_events(&strokes) {
        pad.handle_pointer(event);
    }

    match pad.save() {
        SaveOutcome::Saved => {}
        other => bail!("no signature produced ({:?})", other),
    }
    let image = saved
        .lock()
        .map_err(|_| anyhow::anyhow!("save callback panicked"))?
        .take()
        .context("save callback did not run")?;
    println!("{}", image);
    Ok(())
}

#[cfg(feature = "gif")]
fn run_search(query: &str, limit: usize, timeout_ms: Option<u64>) -> anyhow::Result<()> {
    let mut config = sigcard::gif::GifConfig::from_env();
    if let Some(t) = timeout_ms {
        config.timeout_ms = t;
    }
    if !config.has_any_key() {
        bail!("set {} or {}", sigcard::gif::GIPHY_KEY_ENV, sigcard::gif::TENOR_KEY_ENV);
    }

    let search = sigcard::gif::GifSearch::from_config(&config)?;
    for gif in search.search(query, limit) {
        println!("{}\t{}\t{}", gif.id, gif.url, gif.title);
    }
    Ok(())
}

#[cfg(feature = "gif")]
fn run_gallery(concurrency: Option<usize>) -> anyhow::Result<()> {
    let config = sigcard::gif::GifConfig::from_env();
    let search = Arc::new(sigcard::gif::GifSearch::from_config(&config)?);
    let results = sigcard::gif::fetch_category_gifs_blocking(
        &search,
        sigcard::catalog::gallery_categories(),
        concurrency.unwrap_or(config.concurrency),
    )?;

    for r in results {
        match r.gif {
            Some(gif) => println!("{}\t{}", r.category.name, gif.url),
            None => println!("{}\t{}", r.category.name, sigcard::catalog::PLACEHOLDER_IMAGE),
        }
    }
    Ok(())
}

#[cfg(feature = "gif")]
fn run_theme(name: &str, per_provider: usize) -> anyhow::Result<()> {
    let Some(theme) = sigcard::catalog::find_theme(name) else {
        bail!("unknown theme '{}'; pick one of {}", name, sigcard::catalog::THEMES.join(", "));
    };
    let search = sigcard::gif::GifSearch::from_config(&sigcard::gif::GifConfig::from_env())?;
    for card in sigcard::gif::fetch_theme_cards(&search, theme, per_provider) {
        println!("{}\t{}\t{}", card.id, card.image, card.title);
    }
    Ok(())
}

#[cfg(feature = "gif")]
fn run_trending(concurrency: Option<usize>) -> anyhow::Result<()> {
    let config = sigcard::gif::GifConfig::from_env();
    let search = Arc::new(sigcard::gif::GifSearch::from_config(&config)?);
    let cards = sigcard::gif::fetch_card_images_blocking(
        &search,
        sigcard::catalog::trending_cards(),
        concurrency.unwrap_or(config.concurrency),
    )?;
    for card in cards {
        println!("{}\t{}\t{}", card.title, card.category, card.image);
    }
    Ok(())
}
