use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::config::VoxelsConfig;
use super::types::{Block, BlockFace, BlockId, FaceId};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read voxel definitions: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse voxel definitions: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("block {block:?} references unknown face {face:?} for {role}")]
    UnknownFace {
        block: String,
        face: String,
        role: &'static str,
    },
    #[error("block {0:?} defines no face for {1}")]
    MissingFace(String, &'static str),
}

/// Process-wide table of face and block definitions, keyed by string id.
///
/// Two-phase lifecycle: open (register freely, insert-or-replace) then
/// locked (read-only for the rest of the process). Handles returned while
/// open stay valid forever because entries are never removed, only
/// replaced in place.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    faces: Vec<BlockFace>,
    face_ids: HashMap<String, FaceId>,
    blocks: Vec<Block>,
    block_ids: HashMap<String, BlockId>,
    locked: bool,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-way transition: all further `register_*` calls become no-ops.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Inserts or replaces the face stored under `id`. Logged no-op if the
    /// registry has been locked.
    pub fn register_face(&mut self, id: &str, face: BlockFace) {
        if self.locked {
            log::error!("registry is locked, dropping face registration {id:?}");
            return;
        }
        match self.face_ids.get(id) {
            Some(&fid) => self.faces[fid.0 as usize] = face,
            None => {
                let fid = FaceId(self.faces.len() as u16);
                self.faces.push(face);
                self.face_ids.insert(id.to_string(), fid);
            }
        }
    }

    /// Inserts or replaces the block stored under `id`. Logged no-op if the
    /// registry has been locked.
    pub fn register_block(&mut self, id: &str, block: Block) {
        if self.locked {
            log::error!("registry is locked, dropping block registration {id:?}");
            return;
        }
        match self.block_ids.get(id) {
            Some(&bid) => self.blocks[bid.0 as usize] = block,
            None => {
                let bid = BlockId(self.blocks.len() as u16);
                self.blocks.push(block);
                self.block_ids.insert(id.to_string(), bid);
            }
        }
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> Option<&BlockFace> {
        self.faces.get(id.0 as usize)
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0 as usize)
    }

    pub fn face_id(&self, name: &str) -> Option<FaceId> {
        self.face_ids.get(name).copied()
    }

    pub fn block_id(&self, name: &str) -> Option<BlockId> {
        self.block_ids.get(name).copied()
    }

    pub fn face_by_name(&self, name: &str) -> Option<&BlockFace> {
        self.face_id(name).and_then(|id| self.face(id))
    }

    pub fn block_by_name(&self, name: &str) -> Option<&Block> {
        self.block_id(name).and_then(|id| self.block(id))
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Builds an unlocked registry from a TOML definition string. Face ids
    /// are assigned in sorted name order so handle assignment is stable
    /// across runs regardless of map iteration order.
    pub fn from_toml_str(s: &str) -> Result<Self, RegistryError> {
        let cfg: VoxelsConfig = toml::from_str(s)?;
        Self::from_config(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_config(cfg: VoxelsConfig) -> Result<Self, RegistryError> {
        let mut reg = BlockRegistry::new();

        let mut face_names: Vec<&String> = cfg.faces.keys().collect();
        face_names.sort();
        for name in face_names {
            let def = &cfg.faces[name];
            reg.register_face(name, BlockFace::new(def.texture));
        }

        for def in &cfg.blocks {
            let resolve = |role: &'static str| -> Result<FaceId, RegistryError> {
                let face_name = def
                    .face_name(role)
                    .ok_or_else(|| RegistryError::MissingFace(def.name.clone(), role))?;
                reg.face_id(face_name)
                    .ok_or_else(|| RegistryError::UnknownFace {
                        block: def.name.clone(),
                        face: face_name.to_string(),
                        role,
                    })
            };
            let block = Block::new(resolve("top")?, resolve("side")?, resolve("bottom")?);
            reg.register_block(&def.name, block);
        }

        Ok(reg)
    }
}
