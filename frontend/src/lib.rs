//! ScoutLens 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::guard`: 路由守卫（凭据校验）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod login;
    pub mod pages;
    pub mod shell;
}
mod config;
pub mod logging;

pub use crate::config::AppConfig;

use crate::auth::AuthContext;
use crate::components::login::LoginPage;
use crate::components::pages::{
    LineupRatingsPage, PlayerComparisonPage, RankingsPage, TeamSelectionPage, ValueForMoneyPage,
};

use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod guard;
    pub mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::{BrowserSession, SessionStore};
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::TeamSelection => view! { <TeamSelectionPage /> }.into_any(),
        AppRoute::Rankings => view! { <RankingsPage /> }.into_any(),
        AppRoute::LineupRatings => view! { <LineupRatingsPage /> }.into_any(),
        AppRoute::PlayerComparison => view! { <PlayerComparisonPage /> }.into_any(),
        AppRoute::ValueForMoney => view! { <ValueForMoneyPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 配置与认证上下文
    provide_context(config.clone());
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 认证状态信号与守卫回调注入路由服务（解耦）
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let on_verified = auth_ctx.verified_callback();

    view! {
        <Router is_authenticated=is_authenticated on_verified=on_verified config=config>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
