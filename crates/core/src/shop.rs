use crate::{Catalog, Profile, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardOffer {
    pub key: String,
    pub price: i64,
    pub sold: bool,
}

/// Post-victory card shop: distinct catalog keys at a fixed price. Offers
/// stay visible after purchase but cannot be bought twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopState {
    pub offers: Vec<CardOffer>,
}

impl ShopState {
    pub fn generate(catalog: &Catalog, price: i64, slots: usize, rng: &mut RngState) -> Self {
        let offers = catalog
            .sample_keys(slots, rng)
            .into_iter()
            .map(|key| CardOffer {
                key,
                price,
                sold: false,
            })
            .collect();
        Self { offers }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeOffer {
    pub base_key: String,
    pub upgraded_key: String,
}

/// Post-victory upgrade chamber: pick one deck card to replace with its
/// enhanced form. A visit with nothing upgradable is complete on arrival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeState {
    pub options: Vec<UpgradeOffer>,
    pub spent: bool,
}

impl UpgradeState {
    pub fn generate(
        profile: &Profile,
        catalog: &Catalog,
        slots: usize,
        rng: &mut RngState,
    ) -> Self {
        let mut keys = profile.upgradable_keys(catalog);
        rng.shuffle(&mut keys);
        keys.truncate(slots);
        let options = keys
            .into_iter()
            .filter_map(|base_key| {
                catalog.upgrade_key(&base_key).map(|upgraded_key| UpgradeOffer {
                    base_key,
                    upgraded_key,
                })
            })
            .collect();
        Self {
            options,
            spent: false,
        }
    }

    pub fn complete(&self) -> bool {
        self.spent || self.options.is_empty()
    }
}
