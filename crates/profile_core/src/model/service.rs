//! External services the user can connect to.

use serde::{Deserialize, Serialize};

/// Identifier of the first built-in service.
pub const SERVICE_A_ID: &str = "service-a";
/// Identifier of the second built-in service.
pub const SERVICE_B_ID: &str = "service-b";
/// Identifier of the third built-in service.
pub const SERVICE_C_ID: &str = "service-c";

/// One connectable external service.
///
/// Identity and metadata are fixed for the session; only `connected` toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub connected: bool,
}

impl ExternalService {
    fn disconnected(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            connected: false,
        }
    }
}

/// Built-in service list, all disconnected.
pub fn default_services() -> Vec<ExternalService> {
    vec![
        ExternalService::disconnected(
            SERVICE_A_ID,
            "サービス A",
            "効率的なデータ管理ソリューション",
        ),
        ExternalService::disconnected(
            SERVICE_B_ID,
            "サービス B",
            "クラウドストレージとバックアップ",
        ),
        ExternalService::disconnected(SERVICE_C_ID, "サービス C", "分析レポートとインサイト"),
    ]
}
