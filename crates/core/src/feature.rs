//! Feature trait for game subsystems (wallet, upgrades, settings, ...).

use serde::{Serialize, de::DeserializeOwned};

use crate::error::DomainResult;

/// A game subsystem with a persistent save slot and lifecycle hooks.
///
/// Features are owned by the game loop, which calls [`Feature::initialize`]
/// once after every feature exists and [`Feature::update`] on each tick.
/// Each feature persists its own [`Feature::SaveData`] under
/// [`Feature::save_key`].
///
/// Hooks take `&self`: features that mutate state from a hook hold that state
/// behind interior mutability, so observers may read a feature while one of
/// its operations is in progress.
pub trait Feature {
    /// Shape of this feature's persisted state.
    type SaveData: Serialize + DeserializeOwned + Default;

    /// Stable key this feature's data is saved under.
    fn save_key(&self) -> &'static str;

    /// Called once after every feature has been constructed.
    fn initialize(&self) {}

    /// Called on every game tick.
    fn update(&self, _delta_seconds: f64) {}

    /// Whether the player can access this feature yet.
    fn can_access(&self) -> bool;

    fn save(&self) -> Self::SaveData;

    fn load(&self, data: &Self::SaveData);

    /// Encode [`Feature::save`] as JSON.
    fn save_json(&self) -> DomainResult<serde_json::Value> {
        Ok(serde_json::to_value(self.save())?)
    }

    /// Decode save data from JSON and [`Feature::load`] it.
    ///
    /// Nothing is loaded if the value does not match [`Feature::SaveData`].
    fn load_json(&self, value: &serde_json::Value) -> DomainResult<()> {
        let data: Self::SaveData = serde_json::from_value(value.clone())?;
        self.load(&data);
        Ok(())
    }
}
