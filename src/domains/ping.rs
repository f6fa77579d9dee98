use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub host: Option<String>,
}
