//! Read-only pool of named base textures

use image::RgbImage;
use rand::Rng;

/// A base texture paired with the name used for derived output files
pub struct BaseTexture {
    /// Name derived from the source file stem
    pub name: String,
    /// Decoded pixel data
    pub image: RgbImage,
}

/// Ordered collection of base textures, loaded once at startup
///
/// During generation the pool is only ever read, as the source of peer
/// images for blending.
pub struct TexturePool {
    textures: Vec<BaseTexture>,
}

impl TexturePool {
    /// Create a pool from loaded textures
    pub const fn new(textures: Vec<BaseTexture>) -> Self {
        Self { textures }
    }

    /// Number of textures in the pool
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check whether the pool holds no textures
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// All textures in load order
    pub fn textures(&self) -> &[BaseTexture] {
        &self.textures
    }

    /// Pick a peer image uniformly at random, the current base included
    ///
    /// Returns `None` only when the pool is empty.
    pub fn random_peer<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RgbImage> {
        if self.textures.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.textures.len());
        self.textures.get(index).map(|texture| &texture.image)
    }
}
