//! Offscreen rendering straight to numbered PNG files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use orb_core::{FrameBuffer, Scene};

use crate::content::{Content, Playback};

pub struct ExportSettings {
    pub out_dir: PathBuf,
    pub frames: u32,
    pub fps: f32,
}

/// File name for frame `index`: `frame_00000.png`, `frame_00001.png`, ...
pub fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("frame_{index:05}.png"))
}

/// Render `settings.frames` frames at a fixed time step and write each one out.
///
/// Returns the paths written, in order.
pub fn export(
    scene: &mut Scene,
    content: &Content,
    settings: &ExportSettings,
) -> Result<Vec<PathBuf>> {
    anyhow::ensure!(settings.fps > 0.0, "fps must be positive, got {}", settings.fps);
    std::fs::create_dir_all(&settings.out_dir)
        .with_context(|| format!("failed to create {}", settings.out_dir.display()))?;

    let dt = 1.0 / settings.fps;
    let step = Duration::try_from_secs_f32(dt)
        .with_context(|| format!("fps {} gives an unusable frame step", settings.fps))?;
    let (width, height) = scene.viewport();
    let mut frame = FrameBuffer::new(width, height);
    let mut playback = Playback::default();
    let mut written = Vec::with_capacity(settings.frames as usize);

    log::info!(
        "rendering {} frames at {width}x{height} into {}",
        settings.frames,
        settings.out_dir.display()
    );
    for index in 0..settings.frames {
        scene.render(&mut frame);
        let path = frame_path(&settings.out_dir, index);
        image::save_buffer(
            &path,
            frame.as_bytes(),
            frame.width(),
            frame.height(),
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("wrote {} (content frame {})", path.display(), playback.index());
        written.push(path);

        if let Some(next) = playback.advance(content, step) {
            scene.update_content_frame(content.frame(next).texture.clone());
        }
        scene.tick(dt);
    }
    log::info!("done, angle {:.4} rad", scene.status().angle);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_core::SceneConfig;

    fn small_scene() -> Scene {
        Scene::new(&SceneConfig {
            viewport: [48, 32],
            ..SceneConfig::default()
        })
        .unwrap()
    }

    fn grey_content(dir: &Path) -> Content {
        let path = dir.join("grey.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([128, 128, 128, 255]))
            .save(&path)
            .unwrap();
        Content::load(&path).unwrap()
    }

    #[test]
    fn frame_names_are_zero_padded() {
        let p = frame_path(Path::new("out"), 7);
        assert_eq!(p, Path::new("out").join("frame_00007.png"));
    }

    #[test]
    fn export_writes_one_png_per_frame() {
        let dir = tempfile::tempdir().unwrap();
        let content = grey_content(dir.path());
        let mut scene = small_scene();
        scene.set_content(content.frame(0).texture.clone(), content.is_animated());

        let settings = ExportSettings {
            out_dir: dir.path().join("frames"),
            frames: 3,
            fps: 30.0,
        };
        let written = export(&mut scene, &content, &settings).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(written[2], settings.out_dir.join("frame_00002.png"));

        let img = image::open(&written[0]).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (48, 32));
        // corners stay outside the sphere
        assert_eq!(img.get_pixel(0, 0).0[3], 0);

        // still content keeps spinning, one step per frame
        let expected = 3.0 * f64::from(orb_core::DEFAULT_ROTATION_SPEED);
        assert!((scene.status().angle - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_fps_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let content = grey_content(dir.path());
        let settings = ExportSettings {
            out_dir: dir.path().join("frames"),
            frames: 1,
            fps: 0.0,
        };
        assert!(export(&mut small_scene(), &content, &settings).is_err());
    }

    #[test]
    fn tiny_fps_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let content = grey_content(dir.path());
        let settings = ExportSettings {
            out_dir: dir.path().join("frames"),
            frames: 1,
            fps: 1e-30,
        };
        let err = export(&mut small_scene(), &content, &settings).unwrap_err();
        assert!(err.to_string().contains("frame step"), "{err}");
        assert!(!frame_path(&settings.out_dir, 0).exists());
    }
}
