use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Attack,
    Defense,
    Enhance,
    Manipulation,
    #[default]
    Utility,
}

/// One variant per card effect; catalog JSON refers to effects by their
/// snake_case wire key. An unrecognized key maps to `Unknown`, which the
/// loader rejects and the resolver treats as a logged no-op.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum EffectKind {
    Clone,
    Mirror,
    Stasis,
    Tinker,
    TinkerPlus,
    Reroll,
    RerollPlus,
    OddAttack,
    EvenShield,
    Strike,
    StrikePlus,
    Fortify,
    FortifyPlus,
    Strafe,
    PairShot,
    PairShotPlus,
    OneShot,
    OneShotPlus,
    DoubleGuard,
    DoubleGuardPlus,
    Unknown,
}

impl EffectKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "clone" => Self::Clone,
            "mirror" => Self::Mirror,
            "stasis" => Self::Stasis,
            "tinker" => Self::Tinker,
            "tinker_plus" => Self::TinkerPlus,
            "reroll" => Self::Reroll,
            "reroll_plus" => Self::RerollPlus,
            "odd_attack" => Self::OddAttack,
            "even_shield" => Self::EvenShield,
            "strike" => Self::Strike,
            "strike_plus" => Self::StrikePlus,
            "fortify" => Self::Fortify,
            "fortify_plus" => Self::FortifyPlus,
            "strafe" => Self::Strafe,
            "pair_shot" => Self::PairShot,
            "pair_shot_plus" => Self::PairShotPlus,
            "one_shot" => Self::OneShot,
            "one_shot_plus" => Self::OneShotPlus,
            "double_guard" => Self::DoubleGuard,
            "double_guard_plus" => Self::DoubleGuardPlus,
            _ => Self::Unknown,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Clone => "clone",
            Self::Mirror => "mirror",
            Self::Stasis => "stasis",
            Self::Tinker => "tinker",
            Self::TinkerPlus => "tinker_plus",
            Self::Reroll => "reroll",
            Self::RerollPlus => "reroll_plus",
            Self::OddAttack => "odd_attack",
            Self::EvenShield => "even_shield",
            Self::Strike => "strike",
            Self::StrikePlus => "strike_plus",
            Self::Fortify => "fortify",
            Self::FortifyPlus => "fortify_plus",
            Self::Strafe => "strafe",
            Self::PairShot => "pair_shot",
            Self::PairShotPlus => "pair_shot_plus",
            Self::OneShot => "one_shot",
            Self::OneShotPlus => "one_shot_plus",
            Self::DoubleGuard => "double_guard",
            Self::DoubleGuardPlus => "double_guard_plus",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for EffectKind {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<EffectKind> for String {
    fn from(value: EffectKind) -> Self {
        value.key().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardDef {
    pub key: String,
    pub name: String,
    pub effect: EffectKind,
    pub description: String,
    #[serde(default)]
    pub targets: u8,
    #[serde(default)]
    pub category: CardCategory,
    #[serde(default)]
    pub multi_select: bool,
}

impl CardDef {
    pub fn requires_targets(&self) -> bool {
        self.targets > 0
    }

    /// Player-facing prompt shown while the card waits for dice.
    pub fn selection_hint(&self) -> &'static str {
        match self.effect {
            EffectKind::Clone => "Select the source die, then the destination die.",
            EffectKind::Mirror => {
                if self.multi_select {
                    "Choose dice to invert, then confirm to apply."
                } else {
                    "Choose a die to invert."
                }
            }
            EffectKind::Stasis => {
                if self.multi_select {
                    "Select dice to freeze and confirm to apply."
                } else {
                    "Select a die to freeze."
                }
            }
            EffectKind::Tinker | EffectKind::TinkerPlus => {
                if self.multi_select {
                    "Select dice to tune up, then confirm to finish."
                } else {
                    "Select a die to tune up."
                }
            }
            EffectKind::Reroll | EffectKind::RerollPlus => {
                "Choose dice to reroll, then confirm when ready."
            }
            _ => "Select dice.",
        }
    }
}

/// A concrete copy of a catalog card inside one combat. The id tells two
/// copies of the same card apart so that playing one removes exactly that
/// copy from hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardInstance {
    pub id: u32,
    pub key: String,
}

impl CardInstance {
    pub fn new(id: u32, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
        }
    }
}
