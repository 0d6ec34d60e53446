//! Descriptive chest properties.
//!
//! None of these influence transitions.

use serde::{Deserialize, Serialize};

crate::label_enum! {
    /// What the chest is built from.
    pub enum Material {
        Oak,
        RichMahogany,
        Iron,
    }
}

crate::label_enum! {
    /// Difficulty of the chest's lock.
    pub enum LockType {
        Novice,
        Intermediate,
        Expert,
    }
}

crate::label_enum! {
    /// Rarity tier of the loot inside.
    pub enum LootQuality {
        Grey,
        Green,
        Purple,
    }
}

/// The fixed properties of a chest, set once at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ChestDescriptor {
    pub material: Material,
    pub lock_type: LockType,
    pub loot_quality: LootQuality,
}

impl ChestDescriptor {
    pub const fn new(material: Material, lock_type: LockType, loot_quality: LootQuality) -> Self {
        Self {
            material,
            lock_type,
            loot_quality,
        }
    }
}

/// An iron chest with an expert lock and green loot.
impl Default for ChestDescriptor {
    fn default() -> Self {
        Self::new(Material::Iron, LockType::Expert, LootQuality::Green)
    }
}
