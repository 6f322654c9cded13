//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫(异步校验) -> 处理 -> 加载"。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use super::guard::{GuardDecision, GuardOutcome, GuardState, NavigationGuard, NavigationTicket};
use super::route::AppRoute;
use super::storage::BrowserSession;
use crate::api::ScoutApi;
use crate::config::AppConfig;

/// 获取当前浏览器路径（含 query）
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            let path = location.pathname().ok()?;
            let search = location.search().unwrap_or_default();
            Some(format!("{}{}", path, search))
        })
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证状态通过注入的信号与回调传递，与认证模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由；首次守卫完成前为 `None`
    current_route: ReadSignal<Option<AppRoute>>,
    set_route: WriteSignal<Option<AppRoute>>,
    /// 认证状态（注入）
    is_authenticated: Signal<bool>,
    /// 守卫校验结果回调（注入）
    on_verified: Callback<bool>,
    config: StoredValue<AppConfig>,
    /// 导航序号，用于丢弃已被取代的守卫结果
    ticket: StoredValue<NavigationTicket>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, on_verified: Callback<bool>, config: AppConfig) -> Self {
        let (current_route, set_route) = signal(None);

        Self {
            current_route,
            set_route,
            is_authenticated,
            on_verified,
            config: StoredValue::new(config),
            ticket: StoredValue::new(NavigationTicket::default()),
        }
    }

    pub fn current_route(&self) -> ReadSignal<Option<AppRoute>> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_path(path.to_string(), HistoryMode::Push);
    }

    fn next_ticket(&self) -> u64 {
        let mut issued = 0;
        self.ticket.update_value(|t| issued = t.issue());
        issued
    }

    /// 启动守卫；守卫挂起期间旧页面保持不变
    fn navigate_to_path(&self, requested: String, mode: HistoryMode) {
        let target_route = AppRoute::from_path(&requested);
        let ticket = self.next_ticket();
        let router = *self;

        spawn_local(async move {
            let api = ScoutApi::new(&router.config.get_value());
            let outcome = NavigationGuard::new(&BrowserSession, &api)
                .check(target_route)
                .await;

            if !router.ticket.with_value(|t| t.is_current(ticket)) {
                log::debug!(target: "router", "navigation to {} superseded, dropping guard result", target_route);
                return;
            }
            router.apply(outcome, &requested, mode);
        });
    }

    /// 根据守卫结果更新 History 与界面
    fn apply(&self, outcome: GuardOutcome, requested: &str, mode: HistoryMode) {
        let route = outcome.decision.route();
        if let GuardDecision::Redirect(_) = outcome.decision {
            log::info!(target: "router", "{:?}, redirecting to {}", outcome.state, route);
        }
        write_history(&outcome.decision.address(requested), mode);
        self.set_route.set(Some(route));

        match outcome.state {
            GuardState::Authenticated => self.on_verified.run(true),
            GuardState::Unauthenticated | GuardState::VerificationFailed => {
                self.on_verified.run(false)
            }
            GuardState::Public | GuardState::PendingVerification => {}
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 时也执行守卫逻辑；URL 已经变化，重定向时替换当前记录
            router.navigate_to_path(current_path(), HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登出（认证状态 true -> false）时，若停留在受保护页面则重定向到登录页
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let ticket = self.ticket;

        Effect::new(move |was_authenticated: Option<bool>| {
            let is_auth = is_authenticated.get();
            let on_protected = current_route
                .get_untracked()
                .is_some_and(|route| route.requires_auth());

            if was_authenticated == Some(true) && !is_auth && on_protected {
                // 登出前发起的守卫结果不能再把用户带回受保护页面
                ticket.update_value(|t| t.invalidate());
                let redirect = AppRoute::auth_failure_redirect();
                write_history(redirect.to_path(), HistoryMode::Push);
                set_route.set(Some(redirect));
                log::info!(target: "router", "logged out, redirecting to login");
            }
            is_auth
        });
    }
}

/// 提供路由服务到 Context 并执行首次导航
fn provide_router(
    is_authenticated: Signal<bool>,
    on_verified: Callback<bool>,
    config: AppConfig,
) -> RouterService {
    let router = RouterService::new(is_authenticated, on_verified, config);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    // 首次加载：当前 URL 已存在，重定向时替换
    router.navigate_to_path(current_path(), HistoryMode::Replace);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 守卫校验结果回调
    on_verified: Callback<bool>,
    config: AppConfig,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, on_verified, config);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件；首次守卫完成前显示加载状态。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.current_route().get() {
        Some(route) => matcher(route),
        None => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 站内链接：拦截点击并走路由守卫
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.to_path());
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
