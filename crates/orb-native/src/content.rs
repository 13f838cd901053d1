//! Decoding of the image shown on the sphere.
//!
//! Stills (PNG/JPEG) become a single frame. GIFs keep every frame with its
//! delay, and a GIF with more than one frame is treated as animated content.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageFormat, RgbaImage};
use orb_core::SourceTexture;

/// Shortest delay honoured between animation frames. GIFs written with a zero
/// delay would otherwise spin as fast as the render loop.
pub const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);

pub struct ContentFrame {
    pub texture: SourceTexture,
    pub delay: Duration,
}

pub struct Content {
    frames: Vec<ContentFrame>,
}

impl Content {
    pub fn load(path: &Path) -> Result<Self> {
        let format = ImageFormat::from_path(path)
            .with_context(|| format!("unrecognised image type: {}", path.display()))?;
        let content = match format {
            ImageFormat::Gif => Self::load_gif(path)?,
            _ => Self::load_still(path)?,
        };
        let (width, height) = content.size();
        log::info!(
            "loaded {} ({width}x{height}, {} frame{})",
            path.display(),
            content.frames.len(),
            if content.frames.len() == 1 { "" } else { "s" }
        );
        Ok(content)
    }

    fn load_still(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to decode {}", path.display()))?
            .to_rgba8();
        Ok(Self {
            frames: vec![ContentFrame {
                texture: texture_from_image(&image)?,
                delay: Duration::ZERO,
            }],
        })
    }

    fn load_gif(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let decoder = GifDecoder::new(BufReader::new(file))
            .with_context(|| format!("failed to read GIF header of {}", path.display()))?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .with_context(|| format!("failed to decode GIF frames of {}", path.display()))?;

        let frames = frames
            .into_iter()
            .map(|frame| {
                let (numer, denom) = frame.delay().numer_denom_ms();
                let millis = if denom == 0 { 0 } else { numer / denom };
                Ok(ContentFrame {
                    texture: texture_from_image(frame.buffer())?,
                    delay: Duration::from_millis(millis as u64).max(MIN_FRAME_DELAY),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        anyhow::ensure!(!frames.is_empty(), "{} has no frames", path.display());
        Ok(Self { frames })
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn frame(&self, index: usize) -> &ContentFrame {
        &self.frames[index % self.frames.len()]
    }

    /// Source image size of the first frame.
    pub fn size(&self) -> (u32, u32) {
        let first = &self.frames[0].texture;
        (first.width(), first.height())
    }
}

fn texture_from_image(image: &RgbaImage) -> Result<SourceTexture> {
    Ok(SourceTexture::from_rgba8(
        image.width(),
        image.height(),
        image.as_raw(),
    )?)
}

/// Walks an animated [`Content`] in step with wall-clock time, looping forever.
#[derive(Default)]
pub struct Playback {
    index: usize,
    elapsed: Duration,
}

impl Playback {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance by `dt`. Returns the new frame index when it changed.
    pub fn advance(&mut self, content: &Content, dt: Duration) -> Option<usize> {
        if !content.is_animated() {
            return None;
        }
        self.elapsed += dt;
        let start = self.index;
        loop {
            let delay = content.frame(self.index).delay;
            if self.elapsed < delay {
                break;
            }
            self.elapsed -= delay;
            self.index = (self.index + 1) % content.len();
        }
        (self.index != start).then_some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, Rgba};
    use orb_core::TextureSampler;

    #[test]
    fn png_still_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("still.png");
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(2, 1, Rgba([200, 100, 50, 128]));
        img.save(&path).unwrap();

        let content = Content::load(&path).unwrap();
        assert!(!content.is_animated());
        assert_eq!(content.size(), (3, 2));

        // centre of the bottom-right texel
        let c = content.frame(0).texture.sample(glam::Vec2::new(5.0 / 6.0, 0.75));
        assert!((c.x - 200.0 / 255.0).abs() < 1e-5);
        assert!((c.w - 128.0 / 255.0).abs() < 1e-5);
    }

    #[test]
    fn gif_frames_keep_their_delays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = GifEncoder::new(file);
            let frames = [[255, 0, 0, 255], [0, 0, 255, 255]].map(|px| {
                Frame::from_parts(
                    RgbaImage::from_pixel(4, 4, Rgba(px)),
                    0,
                    0,
                    Delay::from_numer_denom_ms(100, 1),
                )
            });
            encoder.encode_frames(frames).unwrap();
        }

        let content = Content::load(&path).unwrap();
        assert!(content.is_animated());
        assert_eq!(content.len(), 2);
        assert_eq!(content.size(), (4, 4));
        assert_eq!(content.frame(0).delay, Duration::from_millis(100));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(Content::load(&path).is_err());
    }

    fn two_frame_content(delay_ms: u64) -> Content {
        let frame = |v: u8| ContentFrame {
            texture: SourceTexture::solid(orb_core::Rgba8 { r: v, g: v, b: v, a: 255 }),
            delay: Duration::from_millis(delay_ms),
        };
        Content {
            frames: vec![frame(0), frame(255)],
        }
    }

    #[test]
    fn playback_steps_on_frame_delays_and_loops() {
        let content = two_frame_content(100);
        let mut playback = Playback::default();
        assert_eq!(playback.advance(&content, Duration::from_millis(60)), None);
        assert_eq!(playback.advance(&content, Duration::from_millis(60)), Some(1));
        assert_eq!(playback.advance(&content, Duration::from_millis(100)), Some(0));
        // a long stall skips whole cycles without drifting
        assert_eq!(playback.advance(&content, Duration::from_millis(400)), None);
        assert_eq!(playback.index(), 0);
    }

    #[test]
    fn still_content_never_advances() {
        let content = Content {
            frames: vec![ContentFrame {
                texture: SourceTexture::solid(orb_core::Rgba8::default()),
                delay: Duration::ZERO,
            }],
        };
        let mut playback = Playback::default();
        assert_eq!(playback.advance(&content, Duration::from_secs(5)), None);
    }
}
