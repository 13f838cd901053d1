//! pixel-orb: an image wrapped onto a clipped, spinning sphere and shown
//! through a simulated display.
//!
//! ```bash
//! pixel-orb view photo.png --preset crt
//! pixel-orb render anim.gif --out frames --frames 120 --scene scene.toml
//! pixel-orb presets
//! ```

mod content;
mod headless;
mod scene_file;
mod viewer;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use orb_core::{EffectStyle, Scene};

use content::Content;
use headless::ExportSettings;

#[derive(Parser)]
#[command(name = "pixel-orb")]
#[command(author, version, about = "Sphere-mapped images through simulated display pixels")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand that builds a scene.
#[derive(Args)]
struct SceneArgs {
    /// Image or GIF to wrap onto the sphere
    content: PathBuf,

    /// TOML scene description (anchor, clip, rotation, texture, preset, viewport)
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Effect preset, overriding the scene file
    #[arg(long, short = 'p')]
    preset: Option<String>,

    /// Rotation speed in radians per frame, overriding the scene file
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f32>,
}

#[derive(Subcommand)]
enum Command {
    /// Open a window and show the sphere until it is closed
    View {
        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Render a fixed number of frames to numbered PNG files
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output directory, created if missing
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Number of frames to write
        #[arg(long, short = 'n', default_value = "60")]
        frames: u32,

        /// Frame width, overriding the scene file
        #[arg(long)]
        width: Option<u32>,

        /// Frame height, overriding the scene file
        #[arg(long)]
        height: Option<u32>,

        /// Simulated frames per second (drives GIF playback and effect time)
        #[arg(long, default_value = "30")]
        fps: f32,
    },
    /// List the effect presets
    Presets,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match Cli::parse().command {
        Command::View { scene } => {
            let (scene, content) = build_scene(&scene, None)?;
            viewer::run(scene, content)
        }
        Command::Render {
            scene,
            out,
            frames,
            width,
            height,
            fps,
        } => {
            let (mut scene, content) = build_scene(&scene, width.zip(height))?;
            if width.is_some() != height.is_some() {
                log::warn!("--width and --height must be given together; using scene size");
            }
            let settings = ExportSettings {
                out_dir: out,
                frames,
                fps,
            };
            headless::export(&mut scene, &content, &settings)?;
            Ok(())
        }
        Command::Presets => {
            for style in EffectStyle::ALL {
                let p = style.preset();
                println!(
                    "{:<12} {:>3}x{:<3} gap {:.2}  levels {}",
                    style.name(),
                    p.cells.x,
                    p.cells.y,
                    p.gap_size,
                    p.color_levels
                );
            }
            Ok(())
        }
    }
}

fn build_scene(args: &SceneArgs, viewport: Option<(u32, u32)>) -> Result<(Scene, Content)> {
    let mut config = scene_file::load_or_default(args.scene.as_deref())?;
    if let Some((w, h)) = viewport {
        config.viewport = [w, h];
    }
    if let Some(speed) = args.speed {
        config.rotation_speed = speed;
    }

    let mut scene = Scene::new(&config)?;
    if let Some(name) = &args.preset {
        scene.select_preset(name)?;
    }

    let content = load_content(&args.content)?;
    scene.set_content(content.frame(0).texture.clone(), content.is_animated());
    Ok((scene, content))
}

fn load_content(path: &Path) -> Result<Content> {
    if !path.exists() {
        anyhow::bail!("content file not found: {}", path.display());
    }
    Content::load(path)
}
