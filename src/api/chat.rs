use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::ax_state::AppState;
use crate::core::prompt::PromptTable;
use crate::models::context::ChatRequest;

pub async fn deepseek_chat(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<Value>, ApiError> {
    let style = payload.style();
    info!(
        "DeepSeek 对话请求: style={}, messages={}",
        style,
        payload.messages().len()
    );

    let processed = apply_prompts(&state.prompts, style, payload.messages());
    let body = state.deepseek.chat_completions(&processed).await?;
    Ok(Json(body))
}

/// 按顺序处理消息：只改写 role == "user" 的 content，其余字段和其它消息原样保留
pub fn apply_prompts(prompts: &PromptTable, style: &str, messages: &[Value]) -> Vec<Value> {
    messages
        .iter()
        .map(|msg| match msg {
            Value::Object(fields) if fields.get("role").and_then(Value::as_str) == Some("user") => {
                let content = content_text(fields.get("content"));
                let mut fields = fields.clone();
                fields.insert(
                    "content".to_string(),
                    Value::String(prompts.resolve(style, &content)),
                );
                Value::Object(fields)
            }
            other => other.clone(),
        })
        .collect()
}

// 缺失/null 视为空串；非字符串按 JSON 文本处理
fn content_text(content: Option<&Value>) -> String {
    match content {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEFAULT_TEMPLATE: &str = "请根据上下文提供专业、准确的回答。";

    #[test]
    fn only_user_messages_are_rewritten() {
        let prompts = PromptTable::builtin();
        let messages = vec![
            json!({"role": "system", "content": "S"}),
            json!({"role": "user", "content": "U"}),
        ];

        let out = apply_prompts(&prompts, "default", &messages);
        assert_eq!(
            out,
            vec![
                json!({"role": "system", "content": "S"}),
                json!({"role": "user", "content": format!("{DEFAULT_TEMPLATE}U")}),
            ]
        );
    }

    #[test]
    fn order_and_extra_fields_survive() {
        let prompts = PromptTable::builtin();
        let messages = vec![
            json!({"role": "user", "content": "第一问", "name": "stu"}),
            json!({"role": "assistant", "content": "回答"}),
            json!({"role": "user", "content": "第二问"}),
        ];

        let out = apply_prompts(&prompts, "study.beginner", &messages);
        assert_eq!(out.len(), 3);
        assert_eq!(
            out[0],
            json!({"role": "user", "content": "请提供适合初中生的地理知识点。200字以内。第一问", "name": "stu"})
        );
        assert_eq!(out[1], messages[1]);
        assert_eq!(
            out[2]["content"],
            "请提供适合初中生的地理知识点。200字以内。第二问"
        );
    }

    #[test]
    fn missing_content_is_treated_as_empty() {
        let prompts = PromptTable::builtin();
        let out = apply_prompts(
            &prompts,
            "default",
            &[json!({"role": "user"}), json!({"role": "user", "content": null})],
        );
        assert_eq!(out[0]["content"], DEFAULT_TEMPLATE);
        assert_eq!(out[1]["content"], DEFAULT_TEMPLATE);
    }

    #[test]
    fn non_object_entries_pass_through() {
        let prompts = PromptTable::builtin();
        let messages = vec![json!("raw"), json!(42)];
        assert_eq!(apply_prompts(&prompts, "default", &messages), messages);
    }
}
