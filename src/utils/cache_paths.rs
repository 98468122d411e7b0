//! # 浏览器缓存路径解析
//!
//! 根据浏览器类型在平台配置目录下定位缓存文件夹。
//!
//! ## 规则
//! - Chrome: `%LOCALAPPDATA%/Google/Chrome/User Data/Default/Cache`
//! - Edge:   `%LOCALAPPDATA%/Microsoft/Edge/User Data/Default/Cache`
//! - Firefox: `%APPDATA%/Mozilla/Firefox/Profiles/<profile>/cache2`，
//!   取按名称排序后第一个含 `cache2` 子目录的 profile
//!
//! ## 依赖关系
//! - 被 `commands/clean.rs` 调用
//! - 使用 `cli/clean.rs` 定义的浏览器枚举

use crate::cli::clean::Browser;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 平台配置目录
#[derive(Debug, Clone, Default)]
pub struct ProfileRoots {
    /// `%LOCALAPPDATA%`
    pub local_app_data: Option<PathBuf>,
    /// `%APPDATA%`
    pub app_data: Option<PathBuf>,
}

impl ProfileRoots {
    /// 从环境变量读取
    pub fn from_env() -> Self {
        Self {
            local_app_data: env::var_os("LOCALAPPDATA").map(PathBuf::from),
            app_data: env::var_os("APPDATA").map(PathBuf::from),
        }
    }
}

/// 解析缓存路径
///
/// Chrome/Edge 只做路径拼接，不检查是否存在；Firefox 需要找到
/// 实际存在的 profile，找不到时返回 `None`。
pub fn resolve_cache_path(browser: Browser, roots: &ProfileRoots) -> Option<PathBuf> {
    match browser {
        Browser::Chrome => roots
            .local_app_data
            .as_ref()
            .map(|base| chromium_cache(base, &["Google", "Chrome"])),
        Browser::Edge => roots
            .local_app_data
            .as_ref()
            .map(|base| chromium_cache(base, &["Microsoft", "Edge"])),
        Browser::Firefox => roots.app_data.as_deref().and_then(firefox_cache),
    }
}

fn chromium_cache(base: &Path, vendor: &[&str]) -> PathBuf {
    let mut path = base.to_path_buf();
    path.extend(vendor);
    path.extend(["User Data", "Default", "Cache"]);
    path
}

fn firefox_cache(app_data: &Path) -> Option<PathBuf> {
    let profiles_dir = app_data.join("Mozilla").join("Firefox").join("Profiles");
    if !profiles_dir.is_dir() {
        return None;
    }

    let mut profiles: Vec<PathBuf> = match fs::read_dir(&profiles_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect(),
        Err(e) => {
            tracing::warn!(dir = %profiles_dir.display(), error = %e, "cannot list Firefox profiles");
            return None;
        }
    };
    profiles.sort();

    profiles
        .into_iter()
        .map(|profile| profile.join("cache2"))
        .find(|cache| cache.is_dir())
}
