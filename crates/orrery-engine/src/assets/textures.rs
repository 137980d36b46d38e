use std::collections::HashMap;
use serde::Serialize;
use crate::assets::manifest::AssetManifest;

/// Handle to a requested texture. Valid from the moment of the request,
/// whether or not the image ever arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextureId(pub u32);

/// Load state reported by the host image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Ready,
    Failed,
}

/// A load request handed to the host. Serialized to JSON for TypeScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureRequest {
    pub id: TextureId,
    pub name: String,
    pub path: String,
}

struct TextureEntry {
    name: String,
    state: TextureState,
}

/// Fire-and-forget texture registry.
///
/// `request` returns a handle immediately; the host drains the request list,
/// loads images asynchronously and reports back with `mark_loaded` or
/// `mark_failed`. Meshes render untextured until their texture is `Ready`,
/// and stay untextured if loading fails.
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    by_name: HashMap<String, TextureId>,
    /// Requests not yet handed to the host.
    outbox: Vec<TextureId>,
    manifest: AssetManifest,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
            outbox: Vec::new(),
            manifest: AssetManifest::default(),
        }
    }

    /// Replace the manifest used to resolve paths of future drains.
    pub fn set_manifest(&mut self, manifest: AssetManifest) {
        self.manifest = manifest;
    }

    /// Request a texture by name. Repeat requests share one handle.
    pub fn request(&mut self, name: &str) -> TextureId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = TextureId(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            name: name.to_string(),
            state: TextureState::Pending,
        });
        self.by_name.insert(name.to_string(), id);
        self.outbox.push(id);
        id
    }

    /// Take all requests not yet handed to the host.
    pub fn drain_requests(&mut self) -> Vec<TextureRequest> {
        let outbox = std::mem::take(&mut self.outbox);
        outbox
            .into_iter()
            .map(|id| {
                let name = self.entries[id.0 as usize].name.clone();
                let path = self.manifest.texture_path(&name);
                TextureRequest { id, name, path }
            })
            .collect()
    }

    /// Drain pending requests as a JSON array.
    pub fn requests_json(&mut self) -> String {
        let requests = self.drain_requests();
        serde_json::to_string(&requests).unwrap_or_else(|e| {
            log::error!("texture requests: serialization failed: {e}");
            "[]".to_string()
        })
    }

    pub fn mark_loaded(&mut self, id: TextureId) {
        self.set_state(id, TextureState::Ready);
    }

    pub fn mark_failed(&mut self, id: TextureId) {
        if let Some(entry) = self.entries.get(id.0 as usize) {
            log::warn!("texture '{}' failed to load; rendering untextured", entry.name);
        }
        self.set_state(id, TextureState::Failed);
    }

    fn set_state(&mut self, id: TextureId, state: TextureState) {
        match self.entries.get_mut(id.0 as usize) {
            Some(entry) => entry.state = state,
            None => log::warn!("texture update for unknown id {}", id.0),
        }
    }

    pub fn state(&self, id: TextureId) -> Option<TextureState> {
        self.entries.get(id.0 as usize).map(|e| e.state)
    }

    pub fn is_ready(&self, id: TextureId) -> bool {
        self.state(id) == Some(TextureState::Ready)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_returns_stable_handle() {
        let mut reg = TextureRegistry::new();
        let a = reg.request("earth");
        let b = reg.request("mars");
        assert_ne!(a, b);
        assert_eq!(reg.request("earth"), a);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.state(a), Some(TextureState::Pending));
    }

    #[test]
    fn drain_hands_out_each_request_once() {
        let mut reg = TextureRegistry::new();
        reg.request("earth");
        reg.request("earth");
        let first = reg.drain_requests();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].path, "earth.jpg");
        assert!(reg.drain_requests().is_empty());
    }

    #[test]
    fn drain_resolves_paths_through_manifest() {
        let mut reg = TextureRegistry::new();
        let manifest = AssetManifest::from_json(
            r#"{ "base_path": "img/", "textures": { "saturn": { "path": "saturn.png" } } }"#,
        )
        .unwrap();
        reg.set_manifest(manifest);
        reg.request("saturn");
        reg.request("uranus");
        let paths: Vec<String> = reg.drain_requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["img/saturn.png", "img/uranus.jpg"]);
    }

    #[test]
    fn requests_json_lists_ids_and_paths() {
        let mut reg = TextureRegistry::new();
        reg.request("sun");
        let json = reg.requests_json();
        assert_eq!(json, r#"[{"id":0,"name":"sun","path":"sun.jpg"}]"#);
        assert_eq!(reg.requests_json(), "[]");
    }

    #[test]
    fn load_outcomes_update_state() {
        let mut reg = TextureRegistry::new();
        let ok = reg.request("earth");
        let bad = reg.request("pluto");
        reg.mark_loaded(ok);
        reg.mark_failed(bad);
        assert!(reg.is_ready(ok));
        assert!(!reg.is_ready(bad));
        assert_eq!(reg.state(bad), Some(TextureState::Failed));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut reg = TextureRegistry::new();
        reg.mark_loaded(TextureId(42));
        assert_eq!(reg.state(TextureId(42)), None);
        assert!(reg.is_empty());
    }
}
