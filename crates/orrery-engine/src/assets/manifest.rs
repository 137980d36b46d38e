use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the textures a scene may request.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Prefix prepended to every texture path (e.g., "textures/").
    #[serde(default)]
    pub base_path: String,
    /// Named texture lookup: name → image file.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "earth.jpg").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a texture name to a loadable path.
    /// Names missing from the manifest fall back to `<name>.jpg`.
    pub fn texture_path(&self, name: &str) -> String {
        match self.textures.get(name) {
            Some(desc) => format!("{}{}", self.base_path, desc.path),
            None => format!("{}{}.jpg", self.base_path, name),
        }
    }
}
