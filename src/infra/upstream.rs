use std::time::Duration;
use thiserror::Error;

/// 上游调用失败：网络错误、超时或响应体不是 JSON
/// 上游返回的业务错误（JSON 里的错误码）不在此列，原样透传
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{provider} 请求超时")]
    Timeout {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} 请求失败: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} 返回了非 JSON 响应: {source}")]
    InvalidBody {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    pub(crate) fn send(provider: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { provider, source }
        } else {
            Self::Transport { provider, source }
        }
    }

    pub(crate) fn body(provider: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { provider, source }
        } else {
            Self::InvalidBody { provider, source }
        }
    }
}

/// 两个上游共用一个连接池
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
