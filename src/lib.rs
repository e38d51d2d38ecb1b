use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the fixtures are written to, relative to the working directory
pub const ASSETS_DIR: &str = "tests/test-assets";

pub const FIXTURE_WIDTH: u32 = 100;
pub const FIXTURE_HEIGHT: u32 = 100;

pub const SUCCESS_MESSAGE: &str = "Test images created successfully!";

/// A solid-color placeholder image written into the assets directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub file_name: &'static str,
    pub color: Rgb<u8>,
}

pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 128, 0]);

/// Fixtures in the order they are written
pub const FIXTURES: [Fixture; 2] = [
    Fixture {
        file_name: "test-image.jpg",
        color: BLUE,
    },
    Fixture {
        file_name: "profile-photo.jpg",
        color: GREEN,
    },
];

/// Build a fixture-sized image with every pixel set to `color`
pub fn solid_image(color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(FIXTURE_WIDTH, FIXTURE_HEIGHT, color)
}

/// Encode a fixture as JPEG into `dir`, replacing any existing file
pub fn write_fixture(dir: &Path, fixture: &Fixture) -> Result<PathBuf> {
    let output_path = dir.join(fixture.file_name);

    solid_image(fixture.color)
        .save_with_format(&output_path, ImageFormat::Jpeg)
        .with_context(|| format!("Failed to write fixture {}", output_path.display()))?;

    Ok(output_path)
}

/// Create `dir` if needed and write every fixture into it.
///
/// Returns the written paths in write order. Stops at the first failure, so a
/// failed run can leave the earlier fixtures behind.
pub fn generate_fixtures<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create assets directory {}", dir.display()))?;

    FIXTURES
        .iter()
        .map(|fixture| write_fixture(dir, fixture))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_image_fills_every_pixel() {
        let img = solid_image(GREEN);

        assert_eq!(img.dimensions(), (FIXTURE_WIDTH, FIXTURE_HEIGHT));
        assert!(img.pixels().all(|p| *p == GREEN));
    }

    #[test]
    fn fixtures_share_shape_but_not_paths() {
        assert_ne!(FIXTURES[0].file_name, FIXTURES[1].file_name);
        assert_ne!(FIXTURES[0].color, FIXTURES[1].color);
        assert_eq!(
            solid_image(FIXTURES[0].color).dimensions(),
            solid_image(FIXTURES[1].color).dimensions()
        );
    }
}
