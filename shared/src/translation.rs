//! 球队名/位置名翻译
//!
//! 字典随程序内嵌 (`data/translations.json`)，首次访问时解析一次，之后只读。
//! 查不到的键原样返回。

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

const BUILTIN_TRANSLATIONS: &str = include_str!("data/translations.json");

/// 翻译字典：球队名、位置名两张互相独立的表
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    #[serde(default)]
    teams: HashMap<String, String>,
    #[serde(default)]
    positions: HashMap<String, String>,
}

impl Translations {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 内嵌字典。解析失败时退化为空字典（所有查询原样返回）。
    pub fn builtin() -> &'static Translations {
        static BUILTIN: OnceLock<Translations> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::from_json(BUILTIN_TRANSLATIONS).unwrap_or_default())
    }

    pub fn team<'a>(&'a self, name: &'a str) -> &'a str {
        self.teams.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn position<'a>(&'a self, code: &'a str) -> &'a str {
        self.positions.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }
}

/// 英文队名 -> 中文队名
pub fn translate_team(name: &str) -> &str {
    Translations::builtin().team(name)
}

/// 英文位置 -> 中文位置
pub fn translate_position(code: &str) -> &str {
    Translations::builtin().position(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn builtin_dictionary_parses() {
        let translations = Translations::from_json(BUILTIN_TRANSLATIONS).unwrap();
        assert_eq!(translations.team_count(), 60);
        assert!(translations.position_count() >= Position::ALL.len());
    }

    #[test]
    fn known_names_are_translated() {
        assert_eq!(translate_team("Los Angeles Lakers"), "湖人");
        assert_eq!(translate_team("Mavericks"), "独行侠");
        assert_eq!(translate_position("Guard-Forward"), "后卫-前锋");
        assert_eq!(translate_position("C"), "中锋");
    }

    #[test]
    fn unknown_input_is_returned_unchanged() {
        assert_eq!(translate_team("UnknownXYZ"), "UnknownXYZ");
        assert_eq!(translate_position(""), "");
        assert_eq!(translate_position("Wing"), "Wing");
    }

    #[test]
    fn translation_reaches_a_fixed_point() {
        for name in ["Boston Celtics", "Heat", "Nobody FC"] {
            let once = translate_team(name);
            assert_eq!(translate_team(once), once);
        }
        for position in Position::ALL {
            let once = translate_position(position.label());
            assert_eq!(translate_position(once), once);
        }
    }

    #[test]
    fn every_position_label_has_a_translation() {
        for position in Position::ALL {
            assert_ne!(translate_position(position.label()), position.label());
        }
    }

    #[test]
    fn custom_dictionary_and_missing_tables() {
        let t = Translations::from_json(r#"{"teams": {"A": "甲"}}"#).unwrap();
        assert_eq!(t.team("A"), "甲");
        assert_eq!(t.position("A"), "A");
        assert!(Translations::from_json("not json").is_err());
    }
}
