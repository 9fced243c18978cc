use serde::{Deserialize, Serialize};

/// A senior/junior duo assignable to a shift as a unit. `senior` and
/// `junior` hold employee names, not ids; nothing enforces that the names
/// exist in the employee list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pair {
    pub id: String,
    pub senior: String,
    pub junior: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPairRequest {
    pub senior: String,
    pub junior: String,
}
