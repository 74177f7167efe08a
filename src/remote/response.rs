//! Response body shared by both endpoints and the rules that decide success.
//!
//! The endpoints disagree on their success code (0 for sign-in, 200 for
//! sign-out) and each has its own "already recorded today" message. Those
//! messages mean the server already holds today's entry, so they count as
//! success too.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiResponse {
    /// Numeric equality; `code` may arrive as an integer or a float.
    pub fn code_is(&self, expected: i64) -> bool {
        match &self.code {
            Some(Value::Number(n)) => {
                n.as_i64() == Some(expected) || n.as_f64() == Some(expected as f64)
            }
            _ => false,
        }
    }

    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or("")
    }
}

/// Success convention of one endpoint.
#[derive(Debug, Clone, Copy)]
pub struct SuccessRule {
    pub success_code: i64,
    pub already_recorded: &'static str,
}

pub const SIGN_IN_RULE: SuccessRule = SuccessRule {
    success_code: 0,
    already_recorded: "你今天已经获得了其他分数，请明天继续",
};

pub const SIGN_OUT_RULE: SuccessRule = SuccessRule {
    success_code: 200,
    already_recorded: "你今天已有成绩！",
};

impl SuccessRule {
    pub fn accepts(&self, resp: &ApiResponse) -> bool {
        resp.success == Some(true)
            || resp.code_is(self.success_code)
            || resp.msg.as_deref() == Some(self.already_recorded)
    }

    pub fn is_already_recorded(&self, resp: &ApiResponse) -> bool {
        resp.success != Some(true) && resp.msg.as_deref() == Some(self.already_recorded)
    }
}
