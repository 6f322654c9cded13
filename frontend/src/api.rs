use core::future::Future;

use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use scoutlens_shared::protocol::{ApiRequest, HttpMethod, MeRequest};
use scoutlens_shared::{
    ApiConfig, AuthResponse, Endpoint, ErrorBody, LoginRequest, RegisterRequest, User,
};

use crate::config::AppConfig;
use crate::web::guard::AuthVerifier;
use crate::web::http::{HttpClient, HttpError, HttpResponse};

/// API 调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 传输层失败（网络不可达、请求构建失败等）
    Http(HttpError),
    /// 非 2xx 响应，附带后端返回的错误信息（如有）
    Status { status: u16, message: Option<String> },
    /// 请求超时（毫秒）
    Timeout(u32),
    /// 响应体无法解析
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "{}", e),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "请求失败 ({}): {}", status, message),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "请求失败: {}", status),
            ApiError::Timeout(ms) => write!(f, "请求超时 ({} ms)", ms),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Http(e)
    }
}

/// 篮球数据后端客户端
#[derive(Clone, Debug, PartialEq)]
pub struct ScoutApi {
    config: ApiConfig,
    timeout_ms: u32,
}

impl ScoutApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.api.clone(),
            timeout_ms: config.verify_timeout_ms,
        }
    }

    /// 整个请求往返（发送 + 读取响应体）共用一个计时器，超时视为失败
    async fn with_timeout<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        race_timeout(work, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
    }

    /// 非 2xx 响应转换为 `ApiError::Status`
    async fn status_error(response: HttpResponse) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        ApiError::Status { status, message }
    }

    /// 按 `ApiRequest` 元数据发送请求并解析响应
    pub async fn call<R: ApiRequest>(
        &self,
        request: &R,
        token: Option<&str>,
    ) -> Result<R::Response, ApiError> {
        let url = self.config.url(R::ENDPOINT);
        let mut builder = HttpClient::request(&url, R::METHOD.into());

        if R::AUTHENTICATED {
            if let Some(token) = token {
                builder = builder.bearer_auth(token);
            }
        }
        if R::METHOD != HttpMethod::Get {
            builder = builder.json(request)?;
        }

        self.with_timeout(async move {
            let response = builder.send().await?;
            if !response.ok() {
                return Err(Self::status_error(response).await);
            }
            response
                .json::<R::Response>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
    }

    /// 登录
    pub async fn login(&self, username: String, password: String) -> Result<AuthResponse, ApiError> {
        self.call(&LoginRequest { username, password }, None).await
    }

    /// 注册
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.call(&request, None).await
    }

    /// 获取当前用户
    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.call(&MeRequest, Some(token)).await
    }
}

#[async_trait::async_trait(?Send)]
impl AuthVerifier for ScoutApi {
    /// 只看状态码：2xx 即通过，不读取响应体
    async fn verify(&self, token: &str) -> Result<(), ApiError> {
        let url = self.config.url(Endpoint::AuthMe);
        let builder = HttpClient::get(&url).bearer_auth(token);
        self.with_timeout(async move {
            let response = builder.send().await?;
            if response.ok() {
                Ok(())
            } else {
                Err(ApiError::Status {
                    status: response.status(),
                    message: None,
                })
            }
        })
        .await
    }
}

/// `work` 与 `deadline` 竞争，`deadline` 先完成则返回 `ApiError::Timeout(ms)`
async fn race_timeout<T, W, D>(work: W, deadline: D, ms: u32) -> Result<T, ApiError>
where
    W: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    match select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let status = ApiError::Status {
            status: 401,
            message: Some("无效的认证令牌".to_string()),
        };
        assert_eq!(status.to_string(), "请求失败 (401): 无效的认证令牌");
        assert_eq!(
            ApiError::Status { status: 500, message: None }.to_string(),
            "请求失败: 500"
        );
        assert_eq!(ApiError::Timeout(3000).to_string(), "请求超时 (3000 ms)");

        let network: ApiError = HttpError::NetworkError("offline".to_string()).into();
        assert_eq!(network.to_string(), "网络错误: offline");
    }

    #[test]
    fn client_takes_endpoints_and_timeout_from_config() {
        let mut config = AppConfig::default();
        config.verify_timeout_ms = 1234;
        let api = ScoutApi::new(&config);
        assert_eq!(api.timeout_ms, 1234);
        assert_eq!(api.config.url(Endpoint::AuthMe), "/api/auth/me");
    }

    #[tokio::test]
    async fn stalled_body_read_times_out() {
        // 状态行已到达但响应体一直未完成
        let stalled = async {
            futures::future::pending::<()>().await;
            Ok::<u8, ApiError>(0)
        };
        let result = race_timeout(stalled, futures::future::ready(()), 250).await;
        assert_eq!(result, Err(ApiError::Timeout(250)));
    }

    #[tokio::test]
    async fn finished_exchange_beats_the_deadline() {
        let done = async { Err::<(), ApiError>(ApiError::Status { status: 401, message: None }) };
        let result = race_timeout(done, futures::future::pending::<()>(), 250).await;
        assert_eq!(result, Err(ApiError::Status { status: 401, message: None }));

        let ok = race_timeout(async { Ok(7u8) }, futures::future::pending::<()>(), 250).await;
        assert_eq!(ok, Ok(7));
    }
}
