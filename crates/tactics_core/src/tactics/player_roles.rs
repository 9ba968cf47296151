//! Player role table
//!
//! Eleven fixed on-pitch slots, each picking a canned role and instruction by
//! style of play. The recommended formation is passed in but does not vary
//! the content; every slot is filled for every style.

use schemars::JsonSchema;
use serde::Serialize;

use crate::models::Formation;
use crate::tactics::style_of_play::StyleOfPlay;

/// Fixed on-pitch position slot
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum PositionSlot {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "RB / RWB")]
    RightBack,
    #[serde(rename = "CB (Right)")]
    RightCentreBack,
    #[serde(rename = "CB (Left)")]
    LeftCentreBack,
    #[serde(rename = "LB / LWB")]
    LeftBack,
    #[serde(rename = "CDM / DM")]
    DefensiveMidfield,
    #[serde(rename = "CM (Right)")]
    RightCentralMidfield,
    #[serde(rename = "CM (Left)")]
    LeftCentralMidfield,
    #[serde(rename = "CAM / AM")]
    AttackingMidfield,
    #[serde(rename = "RW / LW")]
    WideForwards,
    #[serde(rename = "ST / CF")]
    Striker,
}

pub const POSITION_SLOTS: [PositionSlot; 11] = [
    PositionSlot::Goalkeeper,
    PositionSlot::RightBack,
    PositionSlot::RightCentreBack,
    PositionSlot::LeftCentreBack,
    PositionSlot::LeftBack,
    PositionSlot::DefensiveMidfield,
    PositionSlot::RightCentralMidfield,
    PositionSlot::LeftCentralMidfield,
    PositionSlot::AttackingMidfield,
    PositionSlot::WideForwards,
    PositionSlot::Striker,
];

impl PositionSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::RightBack => "RB / RWB",
            Self::RightCentreBack => "CB (Right)",
            Self::LeftCentreBack => "CB (Left)",
            Self::LeftBack => "LB / LWB",
            Self::DefensiveMidfield => "CDM / DM",
            Self::RightCentralMidfield => "CM (Right)",
            Self::LeftCentralMidfield => "CM (Left)",
            Self::AttackingMidfield => "CAM / AM",
            Self::WideForwards => "RW / LW",
            Self::Striker => "ST / CF",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord)]
pub enum RolePriority {
    High,
    Medium,
    Normal,
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct PlayerRoleAssignment {
    pub position: PositionSlot,
    pub role: &'static str,
    pub instruction: &'static str,
    pub priority: RolePriority,
}

/// Build the full eleven-slot role sheet.
///
/// `_formation` is accepted for API stability; role content depends on the
/// style only.
pub fn build_player_roles(_formation: Formation, style: StyleOfPlay) -> Vec<PlayerRoleAssignment> {
    POSITION_SLOTS.iter().map(|slot| assign(*slot, style)).collect()
}

fn assign(position: PositionSlot, style: StyleOfPlay) -> PlayerRoleAssignment {
    use StyleOfPlay::*;

    let (role, instruction, priority) = match position {
        PositionSlot::Goalkeeper => (
            match style {
                Counter | LongBall => "Sweeper Keeper",
                _ => "Shot Stopper",
            },
            match style {
                LongBall => "Launch direct to striker",
                _ => "Play short from back when safe",
            },
            RolePriority::Normal,
        ),
        PositionSlot::RightBack | PositionSlot::LeftBack => {
            let right = position == PositionSlot::RightBack;
            (
                full_back_role(style),
                match (style, right) {
                    (Wing, true) => "Bomb forward at every opportunity",
                    (Wing, false) => "Overlapping runs to support crosses",
                    (_, true) => "Hold shape when out of possession",
                    (_, false) => "Recover quickly when possession lost",
                },
                if style == Wing { RolePriority::High } else { RolePriority::Normal },
            )
        }
        PositionSlot::RightCentreBack => (
            "Ball-Playing Centre-Back",
            match style {
                Passing => "Drive forward into midfield when space allows",
                _ => "Maintain defensive line",
            },
            RolePriority::Normal,
        ),
        PositionSlot::LeftCentreBack => (
            match style {
                Counter => "Defensive Centre-Back",
                _ => "Ball-Playing Centre-Back",
            },
            "Command the backline, win headers",
            RolePriority::High,
        ),
        PositionSlot::DefensiveMidfield => match style {
            Counter => ("Holding Midfielder", "Screen the back four, break up play", RolePriority::High),
            _ => ("Deep-Lying Playmaker", "Distribute quickly, dictate tempo", RolePriority::High),
        },
        PositionSlot::RightCentralMidfield => (
            match style {
                Shoot => "Box-to-Box Midfielder",
                Passing => "Central Midfielder (Attack)",
                _ => "Central Midfielder",
            },
            match style {
                Shoot => "Late runs into the box, shoot on sight",
                _ => "Support wide transitions",
            },
            RolePriority::Medium,
        ),
        PositionSlot::LeftCentralMidfield => match style {
            Passing => ("Advanced Playmaker", "Thread final third passes, dictate rhythm", RolePriority::Medium),
            _ => ("Box-to-Box Midfielder", "Balanced support play", RolePriority::Medium),
        },
        PositionSlot::AttackingMidfield => (
            match style {
                Shoot => "Shadow Striker",
                Passing => "Trequartista",
                _ => "Attacking Midfielder",
            },
            match style {
                Shoot => "Second striker movement, arrive late",
                _ => "Link midfield and attack with short passing",
            },
            RolePriority::High,
        ),
        PositionSlot::WideForwards => match style {
            Wing => ("Wide Forward (Attack)", "Hug the touchline, deliver early crosses", RolePriority::High),
            Counter => ("Fast Wide Forward", "Stay wide, provide outlet on counter", RolePriority::Medium),
            _ => ("Inverted Winger", "Cut inside on dominant foot", RolePriority::Medium),
        },
        PositionSlot::Striker => match style {
            LongBall => ("Target Man", "Hold up play, win headers, lay off to runners", RolePriority::High),
            Shoot => ("Advanced Striker", "Run in behind constantly, always look to shoot", RolePriority::High),
            Counter => ("Poacher", "Clinical in the box, exploit space on breaks", RolePriority::High),
            _ => ("Complete Forward", "Clinical in the box, exploit space on breaks", RolePriority::High),
        },
    };

    PlayerRoleAssignment { position, role, instruction, priority }
}

fn full_back_role(style: StyleOfPlay) -> &'static str {
    match style {
        StyleOfPlay::Wing => "Attacking Wing-Back",
        StyleOfPlay::Counter => "Defensive Full-Back",
        _ => "Overlapping Full-Back",
    }
}
