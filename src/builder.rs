//! Fluent construction of chests.

use crate::chest::{ChestDescriptor, ChestState, LockType, LootQuality, Material, TreasureChest};

/// Builder for [`TreasureChest`] with a fluent API.
///
/// Anything left unset falls back to the stock chest: iron, expert lock,
/// green loot, locked.
///
/// # Example
///
/// ```
/// use treasure_chest::chest::{ChestState, Material, TreasureChest};
///
/// let chest = TreasureChest::builder()
///     .material(Material::Oak)
///     .state(ChestState::Closed)
///     .build();
///
/// assert_eq!(chest.material(), Material::Oak);
/// assert_eq!(chest.state(), ChestState::Closed);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ChestBuilder {
    material: Option<Material>,
    lock_type: Option<LockType>,
    loot_quality: Option<LootQuality>,
    state: Option<ChestState>,
}

impl ChestBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the material.
    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Set the lock difficulty.
    pub fn lock_type(mut self, lock_type: LockType) -> Self {
        self.lock_type = Some(lock_type);
        self
    }

    /// Set the loot rarity.
    pub fn loot_quality(mut self, loot_quality: LootQuality) -> Self {
        self.loot_quality = Some(loot_quality);
        self
    }

    /// Set all three properties at once.
    pub fn descriptor(self, descriptor: ChestDescriptor) -> Self {
        self.material(descriptor.material)
            .lock_type(descriptor.lock_type)
            .loot_quality(descriptor.loot_quality)
    }

    /// Set the initial state (defaults to locked).
    pub fn state(mut self, state: ChestState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the chest, using stock defaults for anything unset.
    pub fn build(self) -> TreasureChest {
        let stock = ChestDescriptor::default();
        let descriptor = ChestDescriptor::new(
            self.material.unwrap_or(stock.material),
            self.lock_type.unwrap_or(stock.lock_type),
            self.loot_quality.unwrap_or(stock.loot_quality),
        );
        TreasureChest::with_descriptor_and_state(descriptor, self.state.unwrap_or_default())
    }
}
