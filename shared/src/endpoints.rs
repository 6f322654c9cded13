//! API 端点表
//!
//! 逻辑操作名到 URL 路径的静态映射。`ApiConfig` 只做字符串拼接，不发起任何网络请求。

use std::collections::BTreeMap;

/// 后端 API 端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    AuthLogin,
    AuthRegister,
    AuthMe,
    BasicInformation,
    Stats,
    GameStats,
    ValueForMoney,
    LineupCreate,
    LineupByDate,
    LineupBest,
    SalaryCap,
    Players,
    PlayersList,
    PlayersTeams,
}

impl Endpoint {
    pub const ALL: [Endpoint; 14] = [
        Endpoint::AuthLogin,
        Endpoint::AuthRegister,
        Endpoint::AuthMe,
        Endpoint::BasicInformation,
        Endpoint::Stats,
        Endpoint::GameStats,
        Endpoint::ValueForMoney,
        Endpoint::LineupCreate,
        Endpoint::LineupByDate,
        Endpoint::LineupBest,
        Endpoint::SalaryCap,
        Endpoint::Players,
        Endpoint::PlayersList,
        Endpoint::PlayersTeams,
    ];

    /// 逻辑操作名
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::AuthLogin => "AUTH_LOGIN",
            Endpoint::AuthRegister => "AUTH_REGISTER",
            Endpoint::AuthMe => "AUTH_ME",
            Endpoint::BasicInformation => "BASIC_INFORMATION",
            Endpoint::Stats => "STATS",
            Endpoint::GameStats => "GAME_STATS",
            Endpoint::ValueForMoney => "VALUE_FOR_MONEY",
            Endpoint::LineupCreate => "LINEUP_CREATE",
            Endpoint::LineupByDate => "LINEUP_BY_DATE",
            Endpoint::LineupBest => "LINEUP_BEST",
            Endpoint::SalaryCap => "SALARY_CAP",
            Endpoint::Players => "PLAYERS",
            Endpoint::PlayersList => "PLAYERS_LIST",
            Endpoint::PlayersTeams => "PLAYERS_TEAMS",
        }
    }

    /// 相对路径（同源时直接可用）
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AuthLogin => "/api/auth/login",
            Endpoint::AuthRegister => "/api/auth/register",
            Endpoint::AuthMe => "/api/auth/me",
            Endpoint::BasicInformation => "/api/basic_information",
            Endpoint::Stats => "/api/stats",
            Endpoint::GameStats => "/api/stats/game-stats",
            Endpoint::ValueForMoney => "/api/stats/value-for-money",
            Endpoint::LineupCreate => "/api/lineup/create",
            Endpoint::LineupByDate => "/api/lineup/by-date",
            Endpoint::LineupBest => "/api/lineup/best",
            Endpoint::SalaryCap => "/api/rule/salary_cap",
            Endpoint::Players => "/api/players_information",
            Endpoint::PlayersList => "/api/players_information/list",
            Endpoint::PlayersTeams => "/api/players_information/teams",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

/// API 配置：基础 URL + 端点表
///
/// `base_url` 为空字符串时生成同源相对路径。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        // 只去掉一个结尾斜杠，其余原样透传
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        self.url_for_path(endpoint.path())
    }

    pub fn url_for_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn player_game_stats(&self, player_id: i64) -> String {
        self.url_for_path(&format!("/api/stats/player/{}/game-stats", player_id))
    }

    pub fn player_average_stats(&self, player_id: i64) -> String {
        self.url_for_path(&format!("/api/stats/player/{}/average-stats", player_id))
    }

    pub fn team_players(&self, team_id: i64) -> String {
        self.url_for_path(&format!("/api/players_information/team/{}/players", team_id))
    }

    /// 完整端点表：操作名 -> 完整 URL
    pub fn endpoints(&self) -> BTreeMap<&'static str, String> {
        Endpoint::ALL
            .into_iter()
            .map(|e| (e.name(), self.url(e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_base_url_is_prefixed() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            config.url(Endpoint::BasicInformation),
            "https://api.example.com/api/basic_information"
        );
    }

    #[test]
    fn empty_base_url_yields_relative_paths() {
        let config = ApiConfig::new("");
        assert_eq!(config.url(Endpoint::BasicInformation), "/api/basic_information");
        assert_eq!(config.url(Endpoint::AuthMe), "/api/auth/me");
    }

    #[test]
    fn single_trailing_slash_is_dropped() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.url(Endpoint::Stats), "http://localhost:5000/api/stats");
    }

    #[test]
    fn malformed_base_is_passed_through() {
        let config = ApiConfig::new("not a url");
        assert_eq!(config.url(Endpoint::LineupBest), "not a url/api/lineup/best");
    }

    #[test]
    fn table_covers_every_endpoint_with_unique_names() {
        let table = ApiConfig::new("http://h").endpoints();
        assert_eq!(table.len(), Endpoint::ALL.len());
        for endpoint in Endpoint::ALL {
            assert_eq!(table[endpoint.name()], format!("http://h{}", endpoint.path()));
            assert_eq!(Endpoint::from_name(endpoint.name()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_name("NOPE"), None);
    }

    #[test]
    fn parameterised_paths() {
        let config = ApiConfig::new("");
        assert_eq!(config.player_game_stats(23), "/api/stats/player/23/game-stats");
        assert_eq!(config.player_average_stats(23), "/api/stats/player/23/average-stats");
        assert_eq!(config.team_players(5), "/api/players_information/team/5/players");
    }
}
