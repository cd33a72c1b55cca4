use serde::Serialize;

/// A registered worker whose shift and break stamps are tracked.
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
}
