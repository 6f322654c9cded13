//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 凭据（token）保存在 LocalStorage，由路由守卫在每次导航时校验；
//! 这里只负责登录/注册/登出，以及把守卫结果同步到界面状态。

use crate::api::{ApiError, ScoutApi};
use crate::config::AppConfig;
use crate::web::{BrowserSession, SessionStore};
use leptos::prelude::*;
use scoutlens_shared::{AuthResponse, RegisterRequest, User};

/// 认证状态
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// 当前用户（登录响应或 `/api/auth/me` 填充）
    pub user: Option<User>,
    /// 最近一次守卫校验是否通过
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    /// 守卫校验结果回调（用于路由服务注入）
    pub fn verified_callback(&self) -> Callback<bool> {
        let set_state = self.set_state;
        Callback::new(move |verified: bool| {
            set_state.update(|state| {
                state.is_authenticated = verified;
                if !verified {
                    state.user = None;
                }
            });
        })
    }

    fn establish(&self, response: AuthResponse) -> User {
        BrowserSession.set(&response.token);
        let user = response.user;
        self.set_state.update(|state| {
            state.user = Some(user.clone());
            state.is_authenticated = true;
        });
        user
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录：成功后保存凭据
pub async fn sign_in(
    ctx: &AuthContext,
    config: &AppConfig,
    username: String,
    password: String,
) -> Result<User, ApiError> {
    let response = ScoutApi::new(config).login(username, password).await?;
    log::info!(target: "auth", "signed in as {}", response.user.username);
    Ok(ctx.establish(response))
}

/// 注册：后端注册成功即返回凭据，直接进入登录状态
pub async fn sign_up(
    ctx: &AuthContext,
    config: &AppConfig,
    request: RegisterRequest,
) -> Result<User, ApiError> {
    let response = ScoutApi::new(config).register(request).await?;
    log::info!(target: "auth", "registered {}", response.user.username);
    Ok(ctx.establish(response))
}

/// 加载当前用户信息（仅用于展示，不影响守卫判定）
pub async fn load_current_user(ctx: &AuthContext, config: &AppConfig) {
    let Some(token) = BrowserSession.get() else {
        return;
    };
    match ScoutApi::new(config).me(&token).await {
        Ok(user) => ctx.set_state.update(|state| state.user = Some(user)),
        Err(e) => log::warn!(target: "auth", "failed to load current user: {}", e),
    }
}

/// 注销并清除凭据
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn sign_out(ctx: &AuthContext) {
    BrowserSession.clear();
    ctx.set_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
    log::info!(target: "auth", "signed out");
}
