use serde::Deserialize;
use serde_json::Value;

/// 逆地理编码查询参数，空串与缺失同样视为缺参
#[derive(Debug)]
pub struct GeocodeQuery {
    pub lng: Option<String>,
    pub lat: Option<String>,
}

impl GeocodeQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            lng: first_value(pairs, "lng"),
            lat: first_value(pairs, "lat"),
        }
    }
}

#[derive(Debug)]
pub struct DistrictQuery {
    pub adcode: Option<String>,
}

impl DistrictQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            adcode: first_value(pairs, "adcode"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub style: Option<String>, // 缺省为 "default"
    #[serde(default)]
    pub messages: Option<Vec<Value>>, // 消息保持原样，只改写 user 的 content
}

impl ChatRequest {
    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or("default")
    }

    pub fn messages(&self) -> &[Value] {
        self.messages.as_deref().unwrap_or(&[])
    }
}

/// 同名参数重复出现时只取第一个
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// 取非空参数
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
