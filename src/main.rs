use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use raymarch_frames::config::{load_config, RenderConfig};
use raymarch_frames::Animation;

/// The only accepted argument is an optional RON config path.
fn config_path<I: Iterator<Item = String>>(mut args: I) -> Result<Option<String>> {
    let path = args.next();
    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        bail!("Usage: raymarch_frames [CONFIG.ron] (unexpected arguments: {})", extra.join(" "));
    }
    Ok(path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional RON config; defaults render the stock map.
    let config = match config_path(std::env::args().skip(1))? {
        Some(path) => {
            info!("loading config from {}", path);
            load_config(&path).with_context(|| format!("Failed to load config {}", path))?
        }
        None => RenderConfig::default(),
    };

    let mut animation = Animation::new(&config).context("Failed to set up scene")?;

    let bar = ProgressBar::new(config.frames as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} frames [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let written = animation.run(&bar).context("Rendering stopped")?;
    bar.finish_and_clear();

    println!("Wrote {} frames to {}", written.len(), config.output_dir.display());
    Ok(())
}
