//! Scene file contract.
//!
//! A scene is the CLI's input boundary: a world region, quad-tree
//! thresholds, and a list of named colliders, serialized as JSON.
//! Validation happens eagerly at load so the index and classifier can
//! stay on their infallible hot paths.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use broadside_geom::Rect;
use broadside_index::{Collidable, QuadtreeConfig};
use broadside_types::{BroadsideError, BroadsideResult};

/// A complete scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// World region the index covers.
    pub region: Rect,

    /// Quad-tree thresholds; defaults apply when omitted.
    #[serde(default)]
    pub config: QuadtreeConfig,

    /// Named colliders to index.
    pub colliders: Vec<SceneCollider>,
}

/// One named axis-aligned collider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneCollider {
    /// Unique name, used to pick query targets.
    pub name: String,
    /// Bounding box.
    pub bounds: Rect,
}

impl Collidable for SceneCollider {
    fn collision_bounds(&self) -> Rect {
        self.bounds
    }
}

impl Scene {
    /// Loads and parses a scene file.
    pub fn load(path: impl AsRef<Path>) -> BroadsideResult<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| BroadsideError::Serialization(e.to_string()))
    }

    /// Validates region, config, and collider geometry.
    ///
    /// Collider bounds may be zero-size (the index degrades gracefully)
    /// but never negative or non-finite; names must be unique so query
    /// targets are unambiguous.
    pub fn validate(&self) -> BroadsideResult<()> {
        self.region.validate()?;
        self.config.validate()?;

        let mut seen = HashSet::new();
        for collider in &self.colliders {
            if collider.name.is_empty() {
                return Err(BroadsideError::InvalidScene("Collider with empty name".into()));
            }
            if !seen.insert(collider.name.as_str()) {
                return Err(BroadsideError::InvalidScene(format!(
                    "Duplicate collider name: '{}'",
                    collider.name
                )));
            }
            collider.bounds.validate().map_err(|e| {
                BroadsideError::InvalidScene(format!("Collider '{}': {e}", collider.name))
            })?;
        }
        Ok(())
    }

    /// Finds a collider by name.
    pub fn find(&self, name: &str) -> BroadsideResult<&SceneCollider> {
        self.colliders
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| BroadsideError::InvalidScene(format!("No collider named '{name}'")))
    }
}
