mod api;
mod core;
mod infra;
mod models;

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::core::prompt::PromptTable;
use crate::infra::amap::AmapClient;
use crate::infra::config::AppConfig;
use crate::infra::deepseek::DeepseekClient;
use crate::infra::upstream::build_http_client;

pub mod ax_state {
    use super::*;
    pub struct AppState {
        pub amap: AmapClient,
        pub deepseek: DeepseekClient,
        pub prompts: PromptTable,
    }

    impl AppState {
        /// 两个上游共用一个带超时的 HTTP 客户端
        pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
            let http = build_http_client(config.upstream_timeout)?;
            Ok(Self {
                amap: AmapClient::new(http.clone(), config.amap.clone()),
                deepseek: DeepseekClient::new(http, config.deepseek.clone()),
                prompts: PromptTable::builtin(),
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    for name in config.missing_credentials() {
        warn!("{} 未配置，上游将返回鉴权错误", name);
    }

    // 密钥只保存在后端
    let state = Arc::new(ax_state::AppState::from_config(&config)?);
    info!("提示词模板已加载: study 子风格 = {:?}", state.prompts.study_styles());
    info!("DeepSeek 模型: {}", state.deepseek.model());

    let app = api::router(state, &config.static_dir);

    let addr = config.bind_addr;
    println!("🚀 后端运行在 http://{} (静态目录: {})", addr, config.static_dir.display());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
