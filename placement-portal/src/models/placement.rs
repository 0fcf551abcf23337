use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Student;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    pub min_cgpa: f64,
    pub branches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub company: String,
    pub title: String,
    /// Cost to company, in lakhs per annum.
    pub ctc: f64,
    pub location: String,
    pub eligibility: Eligibility,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub deadline: NaiveDate,
    pub recruiter_id: String,
}

impl JobOpening {
    pub fn meets_cgpa(&self, student: &Student) -> bool {
        student.cgpa >= self.eligibility.min_cgpa
    }

    /// CGPA cut-off and branch list both satisfied.
    pub fn is_eligible(&self, student: &Student) -> bool {
        self.meets_cgpa(student) && self.eligibility.branches.contains(&student.branch)
    }

    /// Case-insensitive substring match on title or company.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.company.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Rejected,
    Selected,
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "selected" => Ok(ApplicationStatus::Selected),
            _ => Err(format!("Invalid application status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub student_id: String,
    pub job_id: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Interview,
    Shortlist,
    Reject,
    Offer,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub created_at: NaiveDate,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(branch: &str, cgpa: f64) -> Student {
        Student {
            id: "student_x".to_string(),
            name: "X".to_string(),
            email: "x@college.edu".to_string(),
            roll_no: "20XX001".to_string(),
            branch: branch.to_string(),
            cgpa,
            skills: vec![],
            resume: None,
            phone: "+91-0000000000".to_string(),
        }
    }

    fn job(min_cgpa: f64) -> JobOpening {
        JobOpening {
            id: "job_x".to_string(),
            company: "TechCorp Solutions".to_string(),
            title: "Software Engineer".to_string(),
            ctc: 12.0,
            location: "Bangalore".to_string(),
            eligibility: Eligibility {
                min_cgpa,
                branches: vec!["Computer Science".to_string(), "IT".to_string()],
            },
            description: String::new(),
            requirements: vec![],
            deadline: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            recruiter_id: "recruiter_1".to_string(),
        }
    }

    #[test]
    fn test_eligibility_needs_cgpa_and_branch() {
        let job = job(7.0);
        assert!(job.is_eligible(&student("Computer Science", 7.0)));
        assert!(!job.is_eligible(&student("Computer Science", 6.9)));
        assert!(job.meets_cgpa(&student("Mechanical", 8.1)));
        assert!(!job.is_eligible(&student("Mechanical", 8.1)));
    }

    #[test]
    fn test_job_search_is_case_insensitive() {
        let job = job(7.0);
        assert!(job.matches("software"));
        assert!(job.matches("techcorp"));
        assert!(!job.matches("analyst"));
    }

    #[test]
    fn test_notification_kind_serializes_as_type() {
        let notification = Notification {
            id: "notif_1".to_string(),
            student_id: Some("student_1".to_string()),
            recruiter_id: None,
            message: "Shortlisted".to_string(),
            kind: NotificationKind::Shortlist,
            created_at: NaiveDate::from_ymd_opt(2024, 2, 22).unwrap(),
            read: false,
        };
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["type"], "shortlist");
        assert_eq!(value["created_at"], "2024-02-22");
        assert!(value.get("recruiter_id").is_none());
    }

    #[test]
    fn test_application_status_parses_any_case() {
        assert_eq!("Shortlisted".parse::<ApplicationStatus>(), Ok(ApplicationStatus::Shortlisted));
        assert!("pending".parse::<ApplicationStatus>().is_err());
    }
}
