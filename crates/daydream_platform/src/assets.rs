//! Asset paths and loaders
//!
//! Assets are addressed either through the read-only `romfs:/` mount
//! (`romfs:/images/image1.jpg`) or by a plain filesystem path. Loaders turn
//! an [`AssetPath`] into bytes; decoding is left to the caller.

use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::error::{PlatformError, Result};

/// Scheme prefix of the read-only asset mount
pub const ROMFS_PREFIX: &str = "romfs:/";

/// A location of an asset
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssetPath {
    /// Path relative to the romfs mount root
    Romfs(String),
    /// Plain filesystem path
    File(PathBuf),
}

impl AssetPath {
    /// Parse a path string, recognizing the `romfs:/` scheme
    pub fn parse(path: &str) -> Self {
        match path.strip_prefix(ROMFS_PREFIX) {
            Some(relative) => AssetPath::Romfs(relative.trim_start_matches('/').to_string()),
            None => AssetPath::File(PathBuf::from(path)),
        }
    }

    pub fn is_romfs(&self) -> bool {
        matches!(self, AssetPath::Romfs(_))
    }
}

impl From<&str> for AssetPath {
    fn from(path: &str) -> Self {
        AssetPath::parse(path)
    }
}

impl From<String> for AssetPath {
    fn from(path: String) -> Self {
        AssetPath::parse(&path)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetPath::Romfs(relative) => write!(f, "{}{}", ROMFS_PREFIX, relative),
            AssetPath::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Something that can produce the bytes of an asset
pub trait AssetLoader {
    /// Read the whole asset
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>>;

    /// Whether the asset can be loaded
    fn exists(&self, path: &AssetPath) -> bool {
        self.load(path).is_ok()
    }
}

impl<T: AssetLoader + ?Sized> AssetLoader for Arc<T> {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        (**self).load(path)
    }

    fn exists(&self, path: &AssetPath) -> bool {
        (**self).exists(path)
    }
}

impl<T: AssetLoader + ?Sized> AssetLoader for Box<T> {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        (**self).load(path)
    }

    fn exists(&self, path: &AssetPath) -> bool {
        (**self).exists(path)
    }
}

/// Loader backed by the filesystem, with an optional romfs mount
///
/// `romfs:/x` resolves to `<root>/x`. Paths that would leave the mount
/// (`..`, absolute components) are rejected.
#[derive(Clone, Debug, Default)]
pub struct RomfsLoader {
    root: Option<PathBuf>,
}

impl RomfsLoader {
    /// Mount `root` as `romfs:/`
    pub fn mount(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        tracing::debug!("romfs mounted at {}", root.display());
        Self { root: Some(root) }
    }

    /// Loader without a romfs mount; only plain paths resolve
    pub fn unmounted() -> Self {
        Self { root: None }
    }

    /// Mount root, if any
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Resolve an asset path to a filesystem path
    pub fn resolve(&self, path: &AssetPath) -> Result<PathBuf> {
        match path {
            AssetPath::File(file) => Ok(file.clone()),
            AssetPath::Romfs(relative) => {
                let root = self
                    .root
                    .as_ref()
                    .ok_or_else(|| PlatformError::RomfsNotMounted(path.to_string()))?;

                let relative = Path::new(relative);
                let escapes = relative
                    .components()
                    .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
                if escapes {
                    return Err(PlatformError::InvalidAssetPath(path.to_string()));
                }
                Ok(root.join(relative))
            }
        }
    }
}

impl AssetLoader for RomfsLoader {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        let resolved = self.resolve(path)?;
        std::fs::read(&resolved).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlatformError::AssetNotFound(path.to_string())
            } else {
                PlatformError::AssetRead {
                    path: path.to_string(),
                    source: e,
                }
            }
        })
    }

    fn exists(&self, path: &AssetPath) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }
}

/// In-memory asset store, for tests and embedded assets
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetLoader {
    assets: HashMap<AssetPath, Vec<u8>>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset under `path`
    pub fn insert(&mut self, path: impl Into<AssetPath>, data: Vec<u8>) {
        self.assets.insert(path.into(), data);
    }

    /// Builder form of `insert`
    pub fn with(mut self, path: impl Into<AssetPath>, data: Vec<u8>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load(&self, path: &AssetPath) -> Result<Vec<u8>> {
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| PlatformError::AssetNotFound(path.to_string()))
    }

    fn exists(&self, path: &AssetPath) -> bool {
        self.assets.contains_key(path)
    }
}
