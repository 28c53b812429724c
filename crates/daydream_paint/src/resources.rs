//! Image and font storage behind a paint context

use daydream_core::{FontId, ImageId};
use daydream_image::ImageData;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, KeyData, SlotMap};

new_key_type! {
    /// Slot of a decoded image
    struct ImageKey;
}

impl ImageKey {
    fn to_id(self) -> ImageId {
        ImageId(self.data().as_ffi())
    }

    fn from_id(id: ImageId) -> Self {
        Self::from(KeyData::from_ffi(id.0))
    }
}

/// A decoded image and the asset it came from
#[derive(Debug)]
pub struct StoredImage {
    /// Asset path the image was loaded from
    pub path: String,
    /// Decoded pixels
    pub data: ImageData,
}

/// Decoded images keyed by generational handles
///
/// A deleted handle never resolves again, even after its slot is reused.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: SlotMap<ImageKey, StoredImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: StoredImage) -> ImageId {
        self.images.insert(image).to_id()
    }

    pub fn get(&self, id: ImageId) -> Option<&StoredImage> {
        self.images.get(ImageKey::from_id(id))
    }

    pub fn remove(&mut self, id: ImageId) -> Option<StoredImage> {
        self.images.remove(ImageKey::from_id(id))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Fonts registered by name
#[derive(Debug, Default)]
pub struct FontStore {
    fonts: FxHashMap<String, FontId>,
    next_id: u64,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `data` as a font face and register it under `name`
    ///
    /// Registering a name twice keeps its id.
    pub fn insert(
        &mut self,
        name: &str,
        data: &[u8],
    ) -> Result<FontId, ttf_parser::FaceParsingError> {
        ttf_parser::Face::parse(data, 0)?;

        if let Some(&id) = self.fonts.get(name) {
            return Ok(id);
        }
        self.next_id += 1;
        let id = FontId(self.next_id);
        self.fonts.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(path: &str) -> StoredImage {
        StoredImage {
            path: path.to_string(),
            data: ImageData::from_rgba(vec![0; 4], 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_image_store_roundtrip() {
        let mut store = ImageStore::new();
        let id = store.insert(stored("a"));

        assert_eq!(store.get(id).map(|i| i.path.as_str()), Some("a"));
        assert!(store.remove(id).is_some());
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_stale_handle_does_not_resolve() {
        let mut store = ImageStore::new();
        let first = store.insert(stored("a"));
        store.remove(first);
        let second = store.insert(stored("b"));

        assert_ne!(first, second);
        assert!(store.get(first).is_none());
        assert!(store.remove(first).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_font_store_rejects_garbage() {
        let mut fonts = FontStore::new();
        assert!(fonts.insert("sans", b"not a font").is_err());
        assert!(!fonts.contains("sans"));
    }
}
