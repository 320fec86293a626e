//! Asset loading
//!
//! Everything is read synchronously at startup: scene backgrounds, prop and
//! pickup sprites, the player sheet, the wall masks and the UI font. A missing
//! or broken file is logged and skipped; scenes draw a placeholder in its
//! place and text falls back to the built-in font.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use macroquad::prelude::*;

use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::game::WallMask;
use crate::scene::{SceneId, INTERROGATION_SUSPECTS, SUSPECTS};
use crate::ui;

/// TTF font for labels and prompts
pub const UI_FONT_PATH: &str = "assets/fonts/Harmonic.ttf";

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    Io(PathBuf, std::io::Error),
    Decode(PathBuf, image::ImageError),
    EmptyImage(PathBuf),
    Font(PathBuf, String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(path, e) => write!(f, "IO error reading {}: {}", path.display(), e),
            AssetError::Decode(path, e) => write!(f, "Failed to decode {}: {}", path.display(), e),
            AssetError::EmptyImage(path) => write!(f, "Image has no pixels: {}", path.display()),
            AssetError::Font(path, e) => write!(f, "Bad font {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for AssetError {}

/// Read and decode an image file
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, AssetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| AssetError::Io(path.to_path_buf(), e))?;
    let img = image::load_from_memory(&bytes).map_err(|e| AssetError::Decode(path.to_path_buf(), e))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(AssetError::EmptyImage(path.to_path_buf()));
    }
    Ok(img)
}

/// Read a TTF font; the file is read before the graphics context is touched
pub fn read_font<P: AsRef<Path>>(path: P) -> Result<Font, AssetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| AssetError::Io(path.to_path_buf(), e))?;
    load_ttf_font_from_bytes(&bytes).map_err(|e| AssetError::Font(path.to_path_buf(), e.to_string()))
}

/// Font for the UI, or `None` to keep the default font
pub fn load_font<P: AsRef<Path>>(path: P) -> Option<Font> {
    match read_font(&path) {
        Ok(font) => {
            println!("Loaded font: {}", path.as_ref().display());
            Some(font)
        }
        Err(e) => {
            eprintln!("Failed to load font: {}, using default font", e);
            None
        }
    }
}

/// Load a color-keyed wall image as a scene-sized mask
pub fn read_wall_mask<P: AsRef<Path>>(path: P) -> Result<WallMask, AssetError> {
    let img = read_image(path)?;
    Ok(WallMask::from_image(&img, SCENE_WIDTH as u32, SCENE_HEIGHT as u32))
}

/// GPU textures and wall masks, keyed by their asset path
#[derive(Default)]
pub struct Assets {
    textures: HashMap<String, Texture2D>,
    masks: HashMap<String, WallMask>,
    /// Debug tint of each mask, built once
    mask_overlays: HashMap<String, Texture2D>,
    font: Option<Font>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every texture and mask the game references
    pub fn load_all(player_sheet: &str) -> Self {
        let mut assets = Self::new();
        assets.font = load_font(UI_FONT_PATH);
        assets.load_texture(player_sheet);

        for id in SceneId::ALL {
            let desc = id.descriptor();
            for path in desc.texture_paths() {
                assets.load_texture(path);
            }
            if let Some(path) = desc.wall_mask {
                assets.load_mask(path);
            }
        }

        // Suspect portraits and interrogation rooms
        for card in INTERROGATION_SUSPECTS.iter() {
            assets.load_texture(card.avatar);
            assets.load_texture(card.background);
        }
        for suspect in SUSPECTS.iter() {
            assets.load_texture(suspect.avatar);
        }

        println!(
            "Loaded {} textures, {} wall masks",
            assets.textures.len(),
            assets.masks.len()
        );
        assets
    }

    /// Load one texture, returns false (and logs) on failure
    pub fn load_texture(&mut self, path: &str) -> bool {
        if self.textures.contains_key(path) {
            return true;
        }
        match read_image(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let texture = Texture2D::from_rgba8(rgba.width() as u16, rgba.height() as u16, rgba.as_raw());
                texture.set_filter(FilterMode::Linear);
                self.textures.insert(path.to_string(), texture);
                println!("Loaded texture: {}", path);
                true
            }
            Err(e) => {
                eprintln!("Failed to load texture: {}", e);
                false
            }
        }
    }

    /// Load one wall mask and its debug overlay
    pub fn load_mask(&mut self, path: &str) -> bool {
        match read_wall_mask(path) {
            Ok(mask) => {
                println!("Loaded wall mask {} ({} solid pixels)", path, mask.solid_count());
                let rgba = mask.overlay_rgba(ui::DEBUG_MASK_RGBA);
                let overlay = Texture2D::from_rgba8(mask.width() as u16, mask.height() as u16, &rgba);
                overlay.set_filter(FilterMode::Nearest);
                self.mask_overlays.insert(path.to_string(), overlay);
                self.masks.insert(path.to_string(), mask);
                true
            }
            Err(e) => {
                eprintln!("Failed to load wall mask, walls disabled: {}", e);
                false
            }
        }
    }

    pub fn texture(&self, path: &str) -> Option<&Texture2D> {
        self.textures.get(path)
    }

    /// Copy of a loaded mask, or an empty one if it never loaded
    pub fn wall_mask(&self, path: Option<&str>) -> WallMask {
        path.and_then(|p| self.masks.get(p))
            .cloned()
            .unwrap_or_else(|| WallMask::empty(SCENE_WIDTH as usize, SCENE_HEIGHT as usize))
    }

    pub fn mask_overlay(&self, path: &str) -> Option<&Texture2D> {
        self.mask_overlays.get(path)
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_image(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io(..)));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn test_missing_font_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts").join("Missing.ttf");
        assert!(matches!(read_font(&path), Err(AssetError::Io(..))));
        assert!(load_font(&path).is_none());
        assert!(Assets::new().font().is_none());
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(read_image(&path), Err(AssetError::Decode(..))));
    }

    #[test]
    fn test_wall_mask_scales_to_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walls.png");

        // 128x72 image, left half white
        let mut img = RgbaImage::from_pixel(128, 72, Rgba([0, 0, 0, 255]));
        for y in 0..72 {
            for x in 0..64 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        img.save(&path).unwrap();

        let mask = read_wall_mask(&path).unwrap();
        assert_eq!(mask.width(), 1280);
        assert_eq!(mask.height(), 720);
        assert!(mask.get(10, 10));
        assert!(mask.get(639, 719));
        assert!(!mask.get(640, 0));
        assert_eq!(mask.solid_count(), 640 * 720);
    }

    #[test]
    fn test_unloaded_mask_is_empty() {
        let assets = Assets::new();
        let mask = assets.wall_mask(Some("assets/images/scenes/missing.png"));
        assert_eq!(mask.solid_count(), 0);
        assert_eq!(mask.width(), 1280);
        assert_eq!(assets.wall_mask(None).solid_count(), 0);
    }
}
