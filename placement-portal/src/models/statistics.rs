use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStat {
    pub department: String,
    pub placed: u32,
    pub total: u32,
}

/// Season-level placement figures shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementStatistics {
    pub placed_students: u32,
    pub companies_visited: u32,
    pub average_ctc: f64,
    pub highest_ctc: f64,
    #[serde(default)]
    pub department_stats: Vec<DepartmentStat>,
}
