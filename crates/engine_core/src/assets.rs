//! Asset loading: models and textures resolved against an assets root.
//!
//! Loading only validates that the file exists and has a format the engine
//! understands; a missing asset is a programming or packaging error and is
//! fatal to whoever asked for it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading assets. These are unrecoverable for callers.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),
    #[error("unsupported asset format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Handle to a loaded model, with its optional texture override.
#[derive(Debug, Clone)]
pub struct Model {
    path: PathBuf,
    texture: Option<Texture>,
}

impl Model {
    /// Path the model was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Texture currently applied over the model's own materials, if any.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Replace the texture applied to this model.
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }
}

/// Handle to a loaded texture.
#[derive(Debug, Clone)]
pub struct Texture {
    path: PathBuf,
}

impl Texture {
    /// Path the texture was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

const MODEL_EXTENSIONS: &[&str] = &["obj", "gltf", "glb"];
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Loads models and textures from paths relative to an assets root.
pub struct Loader {
    root: PathBuf,
}

impl Loader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The assets root all relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a model from a path relative to the assets root.
    pub fn load_model(&self, relative: &str) -> Result<Model, AssetError> {
        let path = self.resolve(relative, MODEL_EXTENSIONS)?;
        Ok(Model {
            path,
            texture: None,
        })
    }

    /// Load a texture from a path relative to the assets root.
    pub fn load_texture(&self, relative: &str) -> Result<Texture, AssetError> {
        let path = self.resolve(relative, TEXTURE_EXTENSIONS)?;
        Ok(Texture { path })
    }

    fn resolve(&self, relative: &str, extensions: &[&str]) -> Result<PathBuf, AssetError> {
        let path = self.root.join(relative);
        let known = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)));
        if !known {
            return Err(AssetError::UnsupportedFormat(path));
        }
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }
        Ok(path)
    }
}
