use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::infra::config::AmapConfig;
use crate::infra::upstream::UpstreamError;

const PROVIDER: &str = "amap";

/// 高德 Web 服务客户端：逆地理编码 + 行政区划查询
/// 响应体原样返回，不检查上游自己的 status/infocode
#[derive(Clone)]
pub struct AmapClient {
    client: Client,
    config: AmapConfig,
}

impl AmapClient {
    pub fn new(client: Client, config: AmapConfig) -> Self {
        Self { client, config }
    }

    /// 逆地理编码：location = "{lng},{lat}"
    pub async fn regeo(&self, lng: &str, lat: &str) -> Result<Value, UpstreamError> {
        let location = format!("{lng},{lat}");
        self.get_json(
            "/v3/geocode/regeo",
            &[
                ("location", location.as_str()),
                ("key", self.config.key.expose_secret().as_str()),
                ("extensions", "all"),
            ],
        )
        .await
    }

    /// 行政区划：只查本级 (subdistrict=0)，带边界 (extensions=all)
    pub async fn district(&self, adcode: &str) -> Result<Value, UpstreamError> {
        self.get_json(
            "/v3/config/district",
            &[
                ("keywords", adcode),
                ("subdistrict", "0"),
                ("extensions", "all"),
                ("key", self.config.key.expose_secret().as_str()),
            ],
        )
        .await
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.config.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::send(PROVIDER, e.without_url()))?;

        resp.json::<Value>()
            .await
            .map_err(|e| UpstreamError::body(PROVIDER, e.without_url()))
    }
}
