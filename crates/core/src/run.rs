use crate::{
    Action, Catalog, CatalogError, CombatState, EventBus, GameConfig, Phase, Profile, RngState,
    ShopState, UpgradeState,
};
use thiserror::Error;

mod combat;
mod flow;
mod state;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("the battle is already over")]
    GameOver,
    #[error("a card is still waiting for dice")]
    SelectionPending,
    #[error("no selection in progress")]
    NoSelection,
    #[error("not enough dice selected")]
    SelectionIncomplete,
    #[error("no die at index {0}")]
    InvalidDie(usize),
    #[error("card is not in hand")]
    CardNotInHand,
    #[error("not enough gold")]
    NotEnoughGold,
    #[error("offer already sold")]
    OfferSold,
    #[error("invalid offer index")]
    InvalidOffer,
    #[error("shop not available")]
    ShopNotAvailable,
    #[error("upgrade not available")]
    UpgradeNotAvailable,
    #[error("upgrade already applied")]
    UpgradeSpent,
    #[error("pick an upgrade before continuing")]
    UpgradePending,
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One whole run: the immutable catalog and config, the persistent profile,
/// and whichever combat/shop/upgrade flow currently owns the turn.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub catalog: Catalog,
    pub profile: Profile,
    pub rng: RngState,
    pub phase: Phase,
    pub combat: CombatState,
    pub shop: Option<ShopState>,
    pub upgrade: Option<UpgradeState>,
    next_card_id: u32,
}

impl RunState {
    pub fn perform(&mut self, action: Action, events: &mut EventBus) -> Result<(), RunError> {
        match action {
            Action::DieClicked { index } => self.die_clicked(index, events),
            Action::PlayCard { instance } => self.play_card(instance, events),
            Action::ConfirmSelection => self.confirm_selection(events),
            Action::EndTurn => self.end_turn(events),
            Action::ResetCombat => self.reset_combat(events),
            Action::Buy { index } => self.buy(index, events),
            Action::ApplyUpgrade { index } => self.apply_upgrade(index, events),
            Action::Continue => self.continue_run(events),
        }
    }

    pub(crate) fn expect_phase(&self, phase: Phase) -> Result<(), RunError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(RunError::InvalidPhase(self.phase))
        }
    }
}
