use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    #[default]
    General,
    Important,
    Deadline,
}

/// Portal-wide notice published by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub kind: AnnouncementKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_type_defaults_to_general() {
        let announcement: Announcement = serde_json::from_str(
            r#"{"id":"1","title":"Drive","message":"Soon","date":"2024-02-20"}"#,
        )
        .unwrap();
        assert_eq!(announcement.kind, AnnouncementKind::General);

        let value = serde_json::to_value(&announcement).unwrap();
        assert_eq!(value["type"], "general");
    }
}
