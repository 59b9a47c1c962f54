//! Single entry design memo
//!
//! Owning layers (a CLI session, an editor view) regenerate the design only
//! when one of its inputs changes. Any change to the key replaces the entry.

use crate::generator::generate_design;
use crate::types::{CabinetDesign, Configuration};
use cabinetkit_core::{CabinetArchetype, CabinetError, Material, Result};
use tracing::debug;

/// Every input that determines a design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignKey {
    pub archetype: CabinetArchetype,
    pub width: f64,
    pub height: f64,
    pub material: Material,
    pub configuration: Configuration,
}

impl DesignKey {
    pub fn new(archetype: CabinetArchetype, width: f64, height: f64) -> Self {
        Self {
            archetype,
            width,
            height,
            material: Material::default(),
            configuration: Configuration::default(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }
}

/// Holds the most recent design and the key it was built from
#[derive(Debug, Default)]
pub struct DesignCache {
    entry: Option<(DesignKey, CabinetDesign)>,
    hits: u64,
    misses: u64,
}

impl DesignCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached design for `key`, generating it on a miss.
    ///
    /// A failed generation clears the entry.
    pub fn get_or_build(&mut self, key: DesignKey) -> Result<&CabinetDesign> {
        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);

        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entry = None;
            let design = generate_design(
                key.archetype,
                key.width,
                key.height,
                key.material,
                key.configuration,
            )?;
            debug!(archetype = %key.archetype, width = key.width, "design cache refreshed");
            self.entry = Some((key, design));
        }

        self.entry
            .as_ref()
            .map(|(_, design)| design)
            .ok_or_else(|| CabinetError::degenerate("design cache is empty after build"))
    }

    /// The cached key, if any
    pub fn key(&self) -> Option<&DesignKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    /// Drop the cached design
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_hits() {
        let mut cache = DesignCache::new();
        let key = DesignKey::new(CabinetArchetype::Wall, 24.0, 30.0);
        cache.get_or_build(key).unwrap();
        cache.get_or_build(key).unwrap();
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_key_change_replaces_entry() {
        let mut cache = DesignCache::new();
        let first = DesignKey::new(CabinetArchetype::Wall, 24.0, 30.0);
        let second = first.with_configuration(Configuration {
            shelf_count: 2,
            ..Configuration::default()
        });

        cache.get_or_build(first).unwrap();
        let design = cache.get_or_build(second).unwrap();
        assert_eq!(design.configuration.shelf_count, 2);
        assert_eq!(cache.key(), Some(&second));
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_error_clears_entry() {
        let mut cache = DesignCache::new();
        cache
            .get_or_build(DesignKey::new(CabinetArchetype::Base, 24.0, 30.0))
            .unwrap();
        assert!(cache
            .get_or_build(DesignKey::new(CabinetArchetype::Base, 25.0, 30.0))
            .is_err());
        assert!(cache.key().is_none());
    }

    #[test]
    fn test_invalidate() {
        let mut cache = DesignCache::new();
        let key = DesignKey::new(CabinetArchetype::Tall, 24.0, 85.5);
        cache.get_or_build(key).unwrap();
        cache.invalidate();
        cache.get_or_build(key).unwrap();
        assert_eq!(cache.misses(), 2);
    }
}
