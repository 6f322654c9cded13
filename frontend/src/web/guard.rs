//! 路由守卫
//!
//! 每次导航都会执行一次完整的守卫流程：
//! 公开页面直接放行；没有凭据重定向到登录页；
//! 有凭据时向 `/api/auth/me` 发起一次校验，失败则清除凭据并重定向。
//! 不重试，也不跨导航缓存校验结果。

use async_trait::async_trait;

use super::route::AppRoute;
use super::storage::SessionStore;
use crate::api::ApiError;

/// 远端凭据校验 ("who am I")
#[async_trait(?Send)]
pub trait AuthVerifier {
    /// 仅当后端返回 2xx 时为 `Ok`
    async fn verify(&self, token: &str) -> Result<(), ApiError>;
}

/// 单次导航的守卫状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Public,
    Unauthenticated,
    PendingVerification,
    Authenticated,
    VerificationFailed,
}

/// 守卫对本次导航的裁决
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 放行到目标路由
    Proceed(AppRoute),
    /// 取消原导航并重定向
    Redirect(AppRoute),
}

impl GuardDecision {
    /// 最终渲染的路由
    pub fn route(&self) -> AppRoute {
        match self {
            GuardDecision::Proceed(route) | GuardDecision::Redirect(route) => *route,
        }
    }

    /// 写入地址栏的路径
    ///
    /// 放行时保留用户请求的原始路径（含 query，未知路径也原样保留）；
    /// 重定向或命中路由表别名（如 `/`）时改写为目标路由的规范路径。
    pub fn address(&self, requested: &str) -> String {
        match self {
            GuardDecision::Proceed(_) if !AppRoute::is_alias(requested) => requested.to_string(),
            _ => self.route().to_path().to_string(),
        }
    }
}

/// 导航序号
///
/// 每次导航领取一个序号；守卫结果只有在序号仍为最新时才生效。
/// 守卫之外的路由变更（如登出重定向）通过 `invalidate` 作废所有在途结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationTicket {
    current: u64,
}

impl NavigationTicket {
    /// 开始一次新导航，之前领取的序号全部失效
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }

    /// 作废所有在途导航，不开始新导航
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardOutcome {
    /// 终止状态（不会是 `PendingVerification`）
    pub state: GuardState,
    pub decision: GuardDecision,
}

impl GuardOutcome {
    fn proceed(state: GuardState, to: AppRoute) -> Self {
        Self {
            state,
            decision: GuardDecision::Proceed(to),
        }
    }

    fn redirect(state: GuardState) -> Self {
        Self {
            state,
            decision: GuardDecision::Redirect(AppRoute::auth_failure_redirect()),
        }
    }
}

/// 校验失败策略：任何校验错误（非 2xx、网络错误、超时）一律视为已登出。
///
/// 不区分 "令牌过期" 与 "服务器不可达"。
pub struct FailClosed;

impl FailClosed {
    pub fn is_authenticated(result: &Result<(), ApiError>) -> bool {
        result.is_ok()
    }
}

/// 导航守卫
///
/// 凭据存储与远端校验均通过注入的接口访问。
pub struct NavigationGuard<'a, S: ?Sized, V: ?Sized> {
    session: &'a S,
    verifier: &'a V,
}

impl<'a, S, V> NavigationGuard<'a, S, V>
where
    S: SessionStore + ?Sized,
    V: AuthVerifier + ?Sized,
{
    pub fn new(session: &'a S, verifier: &'a V) -> Self {
        Self { session, verifier }
    }

    /// 对导航目标 `to` 执行守卫
    pub async fn check(&self, to: AppRoute) -> GuardOutcome {
        if to.is_public() {
            log::debug!(target: "guard", "{} is public", to);
            return GuardOutcome::proceed(GuardState::Public, to);
        }

        let Some(token) = self.session.get() else {
            log::info!(target: "guard", "no credential for {}, redirecting to login", to);
            return GuardOutcome::redirect(GuardState::Unauthenticated);
        };

        log::debug!(target: "guard", "{:?}: verifying credential for {}", GuardState::PendingVerification, to);
        let result = self.verifier.verify(&token).await;

        if FailClosed::is_authenticated(&result) {
            // 校验期间凭据被清除或替换（登出/重新登录），结果不再适用于当前会话
            if self.session.get().as_deref() != Some(token.as_str()) {
                log::info!(target: "guard", "credential changed while verifying {}, redirecting to login", to);
                return GuardOutcome::redirect(GuardState::Unauthenticated);
            }
            GuardOutcome::proceed(GuardState::Authenticated, to)
        } else {
            if let Err(e) = &result {
                log::warn!(target: "guard", "credential rejected for {}: {}", to, e);
            }
            self.session.clear();
            GuardOutcome::redirect(GuardState::VerificationFailed)
        }
    }
}
