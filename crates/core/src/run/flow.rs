use super::{RunError, RunState};
use crate::{Event, EventBus, Phase};

impl RunState {
    /// Buy a shop offer: gold down, key onto the blueprint, offer marked
    /// sold. A sold offer stays sold no matter how rich the player gets.
    pub fn buy(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Shop)?;
        let gold = self.profile.gold;
        let shop = self.shop.as_mut().ok_or(RunError::ShopNotAvailable)?;
        let offer = shop.offers.get_mut(index).ok_or(RunError::InvalidOffer)?;
        if offer.sold {
            return Err(RunError::OfferSold);
        }
        if gold < offer.price {
            return Err(RunError::NotEnoughGold);
        }
        offer.sold = true;
        let key = offer.key.clone();
        let price = offer.price;
        self.profile.gold -= price;
        self.profile.add_card(key.clone());
        events.push(Event::CardBought {
            key,
            cost: price,
            gold: self.profile.gold,
        });
        Ok(())
    }

    /// Swap one blueprint entry for its enhanced form. One upgrade per
    /// visit; the remaining offers die with it.
    pub fn apply_upgrade(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Upgrade)?;
        let upgrade = self.upgrade.as_mut().ok_or(RunError::UpgradeNotAvailable)?;
        if upgrade.spent {
            return Err(RunError::UpgradeSpent);
        }
        let option = upgrade.options.get(index).ok_or(RunError::InvalidOffer)?.clone();
        if !self
            .profile
            .replace_first(&option.base_key, option.upgraded_key.clone())
        {
            return Err(RunError::InvalidOffer);
        }
        upgrade.spent = true;
        events.push(Event::UpgradeApplied {
            from: option.base_key,
            to: option.upgraded_key,
        });
        Ok(())
    }

    /// Leave the shop or upgrade chamber and start the next battle from the
    /// current blueprint. The upgrade chamber holds the player until an
    /// upgrade is taken, unless it had nothing to offer.
    pub fn continue_run(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        match self.phase {
            Phase::Shop => {}
            Phase::Upgrade => {
                let upgrade = self.upgrade.as_ref().ok_or(RunError::UpgradeNotAvailable)?;
                if !upgrade.complete() {
                    return Err(RunError::UpgradePending);
                }
            }
            Phase::Combat => return Err(RunError::InvalidPhase(Phase::Combat)),
        }
        self.shop = None;
        self.upgrade = None;
        self.phase = Phase::Combat;
        self.rebuild_combat(events)
    }
}
