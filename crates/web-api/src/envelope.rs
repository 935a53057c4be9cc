use serde::Serialize;

/// 统一响应包装。
///
/// 无论逻辑成败 HTTP 状态码都是 200，客户端只依据 `success` 字段
/// 区分结果，`message` 是面向用户的文案。
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: &'static str,
}

impl<T> Envelope<T> {
    pub fn ok(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message,
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            success: false,
            data: None,
            message,
        }
    }
}

impl Envelope<()> {
    /// 成功但没有负载（序列化为 data: null）。
    pub fn ok_empty(message: &'static str) -> Self {
        Self {
            success: true,
            data: None,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_shape() {
        let value = serde_json::to_value(Envelope::ok(1, "done")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 1);
        assert_eq!(value["message"], "done");
    }

    #[test]
    fn fail_envelope_has_null_data() {
        let value = serde_json::to_value(Envelope::<()>::fail("nope")).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["data"].is_null());
    }
}
