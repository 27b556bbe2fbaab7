use serde_json::json;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

pub fn no_portal(id: &str) -> serde_json::Value {
    err(id, "no_portal", "no portal storage open", None)
}

/// Handler-level failure, turned into the error envelope at the dispatch
/// boundary.
pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn new(code: &'static str, message: impl Into<String>) -> HandlerErr {
        HandlerErr {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_params(message: impl Into<String>) -> HandlerErr {
        HandlerErr::new("bad_params", message)
    }

    pub fn not_found(message: impl Into<String>) -> HandlerErr {
        HandlerErr::new("not_found", message)
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

impl From<anyhow::Error> for HandlerErr {
    fn from(e: anyhow::Error) -> HandlerErr {
        HandlerErr::new("store_failed", e.to_string())
    }
}
