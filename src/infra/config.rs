use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_AMAP_BASE_URL: &str = "https://restapi.amap.com";
pub const DEFAULT_DEEPSEEK_ENDPOINT: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";

/// 进程级配置，启动时读取一次
/// 密钥只保存在后端，Debug 输出不会泄露
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub amap: AmapConfig,
    pub deepseek: DeepseekConfig,
    pub upstream_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AmapConfig {
    pub base_url: String,
    pub key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct DeepseekConfig {
    pub endpoint: String,
    pub api_key: Secret<String>,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 从任意键值来源构建，便于测试
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let bind_addr = var("BIND_ADDR", "0.0.0.0:5000")
            .parse()
            .context("BIND_ADDR 格式错误")?;
        let timeout_secs: u64 = var("UPSTREAM_TIMEOUT_SECS", "30")
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS 必须是整数秒")?;
        anyhow::ensure!(timeout_secs > 0, "UPSTREAM_TIMEOUT_SECS 必须大于 0");

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            amap: AmapConfig {
                base_url: trim_base(var("AMAP_BASE_URL", DEFAULT_AMAP_BASE_URL)),
                key: Secret::new(var("AMAP_KEY", "")),
            },
            deepseek: DeepseekConfig {
                endpoint: trim_base(var("DEEPSEEK_API_ENDPOINT", DEFAULT_DEEPSEEK_ENDPOINT)),
                api_key: Secret::new(var("DEEPSEEK_API_KEY", "")),
                model: var("DEEPSEEK_MODEL", DEFAULT_DEEPSEEK_MODEL),
            },
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// 未配置的密钥名称，启动时提示
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amap.key.expose_secret().is_empty() {
            missing.push("AMAP_KEY");
        }
        if self.deepseek.api_key.expose_secret().is_empty() {
            missing.push("DEEPSEEK_API_KEY");
        }
        missing
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
