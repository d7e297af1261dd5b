use serde::{Deserialize, Serialize};

/// One discrete input from whatever frontend drives the run. Every command
/// runs to completion before the next is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    DieClicked { index: usize },
    PlayCard { instance: u32 },
    ConfirmSelection,
    EndTurn,
    ResetCombat,
    Buy { index: usize },
    ApplyUpgrade { index: usize },
    Continue,
}
