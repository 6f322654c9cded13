//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// 登录页面（唯一的公开页面）
    Login,
    /// 选择球队
    TeamSelection,
    /// 球员排行
    Rankings,
    /// 阵容评分
    LineupRatings,
    /// 球员对比
    PlayerComparison,
    /// 性价比分析
    ValueForMoney,
    /// 页面未找到
    NotFound,
}

/// 路由表项的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(AppRoute),
    Redirect(&'static str),
}

/// 路由表项：path -> 视图或重定向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub target: RouteTarget,
}

/// 声明式路由表
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        target: RouteTarget::Redirect("/team-selection"),
    },
    RouteDef {
        path: "/login",
        target: RouteTarget::View(AppRoute::Login),
    },
    RouteDef {
        path: "/team-selection",
        target: RouteTarget::View(AppRoute::TeamSelection),
    },
    RouteDef {
        path: "/rankings",
        target: RouteTarget::View(AppRoute::Rankings),
    },
    RouteDef {
        path: "/lineup-ratings",
        target: RouteTarget::View(AppRoute::LineupRatings),
    },
    RouteDef {
        path: "/player-comparison",
        target: RouteTarget::View(AppRoute::PlayerComparison),
    },
    RouteDef {
        path: "/value-for-money",
        target: RouteTarget::View(AppRoute::ValueForMoney),
    },
];

// 防止路由表中的重定向成环
const MAX_REDIRECTS: usize = 4;

/// 去掉 query/fragment 与结尾斜杠
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

impl AppRoute {
    /// 导航栏中出现的受保护页面
    pub const NAV: [AppRoute; 5] = [
        AppRoute::TeamSelection,
        AppRoute::Rankings,
        AppRoute::LineupRatings,
        AppRoute::PlayerComparison,
        AppRoute::ValueForMoney,
    ];

    /// 将 URL path 解析为路由枚举（跟随路由表中的重定向）
    pub fn from_path(path: &str) -> Self {
        let mut path = normalize(path);
        for _ in 0..=MAX_REDIRECTS {
            match ROUTES.iter().find(|def| def.path == path).map(|def| def.target) {
                Some(RouteTarget::View(route)) => return route,
                Some(RouteTarget::Redirect(to)) => path = to,
                None => return Self::NotFound,
            }
        }
        Self::NotFound
    }

    /// 路径是否命中路由表中的重定向项
    pub fn is_alias(path: &str) -> bool {
        let path = normalize(path);
        ROUTES
            .iter()
            .any(|def| def.path == path && matches!(def.target, RouteTarget::Redirect(_)))
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::TeamSelection => "/team-selection",
            Self::Rankings => "/rankings",
            Self::LineupRatings => "/lineup-ratings",
            Self::PlayerComparison => "/player-comparison",
            Self::ValueForMoney => "/value-for-money",
            Self::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "登录",
            Self::TeamSelection => "球队选择",
            Self::Rankings => "球员排行",
            Self::LineupRatings => "阵容评分",
            Self::PlayerComparison => "球员对比",
            Self::ValueForMoney => "性价比分析",
            Self::NotFound => "页面未找到",
        }
    }

    /// **核心守卫逻辑：公开页面无需认证**
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login)
    }

    pub fn requires_auth(&self) -> bool {
        !self.is_public()
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取登录成功后的落地页
    pub fn auth_success_redirect() -> Self {
        Self::TeamSelection
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
