//! TOML definition format for faces and blocks.
//!
//! ```toml
//! [faces."core.grass"]
//! texture = 0
//!
//! [[blocks]]
//! name = "core.grass"
//! top = "core.grass"
//! side = "core.grass_side"
//! bottom = "core.dirt"
//! ```
//!
//! A block may give a single `face` instead of the three roles; missing
//! roles fall back to it.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VoxelsConfig {
    #[serde(default)]
    pub faces: HashMap<String, FaceDef>,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

#[derive(Debug, Deserialize)]
pub struct FaceDef {
    pub texture: u32,
}

#[derive(Debug, Deserialize)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub face: Option<String>,
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub bottom: Option<String>,
}

impl BlockDef {
    /// Resolved face name for a role, falling back to the shared `face`.
    pub fn face_name(&self, role: &str) -> Option<&str> {
        let specific = match role {
            "top" => self.top.as_deref(),
            "side" => self.side.as_deref(),
            "bottom" => self.bottom.as_deref(),
            _ => None,
        };
        specific.or(self.face.as_deref())
    }
}
