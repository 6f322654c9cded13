//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，并在其上实现会话凭据存储。

use scoutlens_shared::STORAGE_TOKEN_KEY;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 会话凭据存储
///
/// 路由守卫只通过该接口读写凭据，测试中可替换为内存实现。
pub trait SessionStore {
    /// 读取凭据；空字符串视为不存在
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// 基于 LocalStorage 的会话存储（键为 `token`）
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        LocalStorage::get(STORAGE_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if !LocalStorage::set(STORAGE_TOKEN_KEY, token) {
            log::warn!(target: "auth", "failed to persist session token");
        }
    }

    fn clear(&self) {
        if !LocalStorage::delete(STORAGE_TOKEN_KEY) {
            log::warn!(target: "auth", "failed to clear session token");
        }
    }
}
