//! 位置与阵容槽位映射
//!
//! 球员的自然位置 (`Position`) 决定其可以出任的阵容槽位 (`Slot`)。
//! 字符串接口为全函数：未知位置返回空集，不报错。

use std::fmt;
use std::str::FromStr;

/// 场上五个阵容槽位，按 PG < SG < SF < PF < C 排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Slot {
    /// 展示顺序
    pub const ORDER: [Slot; 5] = [Slot::PG, Slot::SG, Slot::SF, Slot::PF, Slot::C];

    pub fn code(&self) -> &'static str {
        match self {
            Slot::PG => "PG",
            Slot::SG => "SG",
            Slot::SF => "SF",
            Slot::PF => "PF",
            Slot::C => "C",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Slot::PG => "控球后卫",
            Slot::SG => "得分后卫",
            Slot::SF => "小前锋",
            Slot::PF => "大前锋",
            Slot::C => "中锋",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 球员的自然位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Guard,
    Forward,
    Center,
    GuardForward,
    ForwardCenter,
    CenterForward,
    ForwardGuard,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::Guard,
        Position::Forward,
        Position::Center,
        Position::GuardForward,
        Position::ForwardCenter,
        Position::CenterForward,
        Position::ForwardGuard,
    ];

    /// 数据源中使用的英文位置名
    pub fn label(&self) -> &'static str {
        match self {
            Position::Guard => "Guard",
            Position::Forward => "Forward",
            Position::Center => "Center",
            Position::GuardForward => "Guard-Forward",
            Position::ForwardCenter => "Forward-Center",
            Position::CenterForward => "Center-Forward",
            Position::ForwardGuard => "Forward-Guard",
        }
    }

    /// 可出任的槽位（非空，按展示顺序）
    pub fn slots(&self) -> &'static [Slot] {
        match self {
            Position::Guard => &[Slot::PG, Slot::SG],
            Position::Forward => &[Slot::SF, Slot::PF],
            Position::Center => &[Slot::C],
            Position::GuardForward | Position::ForwardGuard => &[Slot::SG, Slot::SF],
            Position::ForwardCenter | Position::CenterForward => &[Slot::PF, Slot::C],
        }
    }

    pub fn can_play(&self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 位置/槽位字面量无法识别
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ParseError {
                kind: "position",
                input: s.to_string(),
            })
    }
}

impl FromStr for Slot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ORDER
            .into_iter()
            .find(|slot| slot.code() == s)
            .ok_or_else(|| ParseError {
                kind: "slot",
                input: s.to_string(),
            })
    }
}

/// 按位置名查询可出任槽位，未知位置返回空集
pub fn available_slots(position: &str) -> &'static [Slot] {
    position.parse::<Position>().map(|p| p.slots()).unwrap_or_default()
}

/// `slot` 是否属于 `available_slots(position)`
pub fn can_play_slot(position: &str, slot: &str) -> bool {
    match slot.parse::<Slot>() {
        Ok(slot) => available_slots(position).contains(&slot),
        Err(_) => false,
    }
}

/// 能出任某槽位的所有位置
pub fn eligible_positions(slot: Slot) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|p| p.can_play(slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_position_has_ordered_non_empty_slots() {
        for position in Position::ALL {
            let slots = available_slots(position.label());
            assert!(!slots.is_empty(), "{} has no slot", position);
            assert!(slots.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn unknown_position_has_no_slots() {
        for input in ["", "guard", "Point Guard", "G", "Center-Guard"] {
            assert!(available_slots(input).is_empty());
        }
    }

    #[test]
    fn mapping_matches_lineup_rules() {
        assert_eq!(available_slots("Guard"), &[Slot::PG, Slot::SG]);
        assert_eq!(available_slots("Forward"), &[Slot::SF, Slot::PF]);
        assert_eq!(available_slots("Center"), &[Slot::C]);
        assert_eq!(available_slots("Guard-Forward"), &[Slot::SG, Slot::SF]);
        assert_eq!(available_slots("Forward-Guard"), &[Slot::SG, Slot::SF]);
        assert_eq!(available_slots("Forward-Center"), &[Slot::PF, Slot::C]);
        assert_eq!(available_slots("Center-Forward"), &[Slot::PF, Slot::C]);
    }

    #[test]
    fn can_play_slot_agrees_with_available_slots() {
        let positions = Position::ALL
            .iter()
            .map(|p| p.label())
            .chain(["Unknown", ""]);
        for position in positions {
            for slot in Slot::ORDER {
                assert_eq!(
                    can_play_slot(position, slot.code()),
                    available_slots(position).contains(&slot),
                    "{} / {}",
                    position,
                    slot
                );
            }
            assert!(!can_play_slot(position, "XX"));
        }
    }

    #[test]
    fn slot_order_is_display_order() {
        let mut shuffled = vec![Slot::C, Slot::PG, Slot::PF, Slot::SG, Slot::SF];
        shuffled.sort();
        assert_eq!(shuffled, Slot::ORDER);
        assert_eq!(Slot::PG.display_name(), "控球后卫");
        assert_eq!(Slot::C.display_name(), "中锋");
    }

    #[test]
    fn eligible_positions_inverts_mapping() {
        assert_eq!(eligible_positions(Slot::PG), vec![Position::Guard]);
        assert_eq!(
            eligible_positions(Slot::C),
            vec![Position::Center, Position::ForwardCenter, Position::CenterForward]
        );
    }

    #[test]
    fn parse_errors_name_the_input() {
        let err = "Wing".parse::<Position>().unwrap_err();
        assert_eq!(err.to_string(), "unknown position: \"Wing\"");
        assert!("pg".parse::<Slot>().is_err());
    }
}
