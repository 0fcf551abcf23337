//! Response bodies for the three dashboard areas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    AnnouncementKind, Application, ApplicationStatus, JobOpening, Notification,
    PlacementStatistics, Recruiter, Student,
};

/// Applications per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub applied: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub selected: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally<'a>(applications: impl IntoIterator<Item = &'a Application>) -> Self {
        applications
            .into_iter()
            .fold(Self::default(), |mut counts, app| {
                match app.status {
                    ApplicationStatus::Applied => counts.applied += 1,
                    ApplicationStatus::Shortlisted => counts.shortlisted += 1,
                    ApplicationStatus::Rejected => counts.rejected += 1,
                    ApplicationStatus::Selected => counts.selected += 1,
                }
                counts.total += 1;
                counts
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    pub search: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// An application joined with the job it targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationView {
    #[serde(flatten)]
    pub application: Application,
    pub job: Option<JobOpening>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentOverview {
    pub student: Option<Student>,
    pub counts: StatusCounts,
    pub applications: Vec<ApplicationView>,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: JobOpening,
    pub eligible: bool,
    pub applied: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobBoard {
    pub jobs: Vec<JobListing>,
    pub companies: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentApplications {
    pub counts: StatusCounts,
    pub applications: Vec<ApplicationView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationFeed {
    pub unread: usize,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecruiterOverview {
    pub recruiter: Option<Recruiter>,
    pub open_jobs: usize,
    pub applicants: StatusCounts,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecruiterJob {
    #[serde(flatten)]
    pub job: JobOpening,
    pub applications: StatusCounts,
}

/// An application to one of the recruiter's jobs, joined with the applicant.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicantView {
    #[serde(flatten)]
    pub application: Application,
    pub student: Option<Student>,
    pub job: Option<JobOpening>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecruiterApplicants {
    pub counts: StatusCounts,
    pub applicants: Vec<ApplicantView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_students: usize,
    pub total_recruiters: usize,
    pub total_jobs: usize,
    pub statistics: PlacementStatistics,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[serde(rename = "type", default)]
    pub kind: AnnouncementKind,
}
