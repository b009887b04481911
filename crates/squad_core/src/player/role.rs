//! Player role classification
//!
//! 카드에 표시되는 역할명: overall 등급별로 가장 두드러진 능력치를 본다.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::PlayerAttributes;

/// Rating band a player falls into by overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    Developing,
    Average,
    Good,
    Great,
    Elite,
}

impl RoleTier {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            85..=u8::MAX => RoleTier::Elite,
            75..=84 => RoleTier::Great,
            65..=74 => RoleTier::Good,
            50..=64 => RoleTier::Average,
            _ => RoleTier::Developing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerRole {
    pub title: String,
    pub icon: String,
    pub tier: RoleTier,
}

impl PlayerRole {
    fn new(title: &str, icon: &str, tier: RoleTier) -> Self {
        Self { title: title.to_string(), icon: icon.to_string(), tier }
    }

    /// Classify a player. First matching rule in each tier wins.
    pub fn classify(attrs: &PlayerAttributes) -> Self {
        let tier = RoleTier::from_overall(attrs.overall);
        let (title, icon) = match tier {
            RoleTier::Elite => elite_role(attrs),
            RoleTier::Great => great_role(attrs),
            RoleTier::Good => good_role(attrs),
            RoleTier::Average => average_role(attrs),
            RoleTier::Developing => developing_role(attrs),
        };
        Self::new(title, icon, tier)
    }
}

fn elite_role(a: &PlayerAttributes) -> (&'static str, &'static str) {
    if a.shooting >= 80 && a.pace >= 80 {
        ("Goal Machine", "🔥")
    } else if a.defense >= 80 && a.physical >= 80 {
        ("Wall of Steel", "🛡️")
    } else if a.passing >= 85 && a.dribbling >= 80 {
        ("Maestro", "🎭")
    } else if a.pace >= 90 {
        ("Lightning Bolt", "⚡")
    } else {
        ("Superstar", "⭐")
    }
}

fn great_role(a: &PlayerAttributes) -> (&'static str, &'static str) {
    if a.shooting >= 75 && a.shooting > a.defense {
        ("Striker", "🎯")
    } else if a.defense >= 75 && a.defense > a.shooting {
        ("Guardian", "🛡️")
    } else if a.passing >= 75 && a.passing > a.pace {
        ("Playmaker", "🧠")
    } else if a.pace >= 75 && a.pace > a.physical {
        ("Speed Demon", "💨")
    } else if a.dribbling >= 75 && a.dribbling > a.defense {
        ("Magician", "🪄")
    } else if a.physical >= 75 {
        ("Beast", "💪")
    } else {
        ("Star Player", "🌟")
    }
}

fn good_role(a: &PlayerAttributes) -> (&'static str, &'static str) {
    // 동점이면 shooting > defense > passing > pace > dribbling > physical 순
    let top = a.best_skill();
    if top == a.shooting {
        ("Finisher", "⚽")
    } else if top == a.defense {
        ("Defender", "🔒")
    } else if top == a.passing {
        ("Passer", "📤")
    } else if top == a.pace {
        ("Runner", "🏃")
    } else if top == a.dribbling {
        ("Dribbler", "⚡")
    } else {
        ("Tank", "🦏")
    }
}

fn average_role(a: &PlayerAttributes) -> (&'static str, &'static str) {
    let spread = a.best_skill() - a.worst_skill();
    if spread <= 15 {
        ("All-Rounder", "🎪")
    } else if a.pace <= 40 {
        ("Slow & Steady", "🐢")
    } else if a.shooting <= 40 {
        ("Support Player", "🤝")
    } else if a.defense >= 60 {
        ("Defensive Mind", "🧱")
    } else {
        ("Squad Player", "👥")
    }
}

fn developing_role(a: &PlayerAttributes) -> (&'static str, &'static str) {
    if a.pace >= 60 {
        ("Speedster", "🏃‍♂️")
    } else if a.physical >= 60 {
        ("Enforcer", "💪")
    } else if a.shooting >= 45 {
        ("Hopeful Striker", "🎯")
    } else if a.defense >= 45 {
        ("Last Line", "🚧")
    } else {
        ("Rookie", "🔰")
    }
}
