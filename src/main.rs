use clap::Parser;
use log::{error, info};
use phong_rasterizer::app;
use phong_rasterizer::error::Result;
use phong_rasterizer::io::config::Config;
use std::path::Path;
use std::process::ExitCode;

/// Renders a TOML-described scene to an image file.
#[derive(Parser, Debug)]
#[command(name = "phong-rasterizer", version, about)]
struct Args {
    /// Scene configuration file (TOML)
    #[arg(short, long, value_name = "FILE", default_value = "scene.toml")]
    config: String,

    /// Override [render].shading: barycentric, flat, phong or depth
    #[arg(short, long)]
    shading: Option<String>,

    /// Override [render].output
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = if Path::new(&args.config).exists() {
        info!("Loading config from '{}'", args.config);
        Config::load(&args.config)?
    } else {
        info!("Config '{}' not found, using defaults.", args.config);
        Config::default()
    };

    if let Some(shading) = &args.shading {
        config.render.shading = shading.clone();
    }
    if let Some(output) = &args.output {
        config.render.output = output.clone();
    }
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match load_config(&args).and_then(|config| app::run(&config)) {
        Ok(stats) => {
            info!(
                "Done: {} faces drawn, {} pixels shaded.",
                stats.faces_rasterized, stats.pixels_shaded
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
