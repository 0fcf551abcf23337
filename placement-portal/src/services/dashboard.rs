use placement_session::Identity;
use std::collections::HashSet;
use std::sync::Arc;

use super::NoticeBoard;
use crate::{
    catalog::Catalog,
    dtos::dashboard::{
        AdminOverview, ApplicantView, ApplicationView, JobBoard, JobListing, JobQuery,
        NotificationFeed, RecruiterApplicants, RecruiterJob, RecruiterOverview, StatusCounts,
        StudentApplications, StudentOverview,
    },
    models::{Application, ApplicationStatus, JobOpening, Notification, Recruiter, Student},
};

/// Views of the catalog and notice board, scoped to the identity asking.
///
/// Callers are expected to have passed the matching role guard; the methods
/// only scope by identity id.
#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<Catalog>,
    notices: Arc<NoticeBoard>,
}

impl DashboardService {
    pub fn new(catalog: Arc<Catalog>, notices: Arc<NoticeBoard>) -> Self {
        Self { catalog, notices }
    }

    // --- student area ---

    pub async fn student_overview(&self, identity: &Identity) -> StudentOverview {
        let notifications = self.notices.for_student(identity.id()).await;
        let own = self.applications_of(identity.id());
        StudentOverview {
            student: self.catalog.student(identity.id()).cloned(),
            counts: StatusCounts::tally(own.iter().copied()),
            applications: self.with_jobs(own),
            notifications,
        }
    }

    /// Job board filtered by free-text search (title or company), exact
    /// company, and the CGPA cut-off when the student has a reference record.
    pub fn student_jobs(&self, identity: &Identity, query: &JobQuery) -> JobBoard {
        let student = self.catalog.student(identity.id());
        let applied: HashSet<&str> = self
            .applications_of(identity.id())
            .into_iter()
            .map(|app| app.job_id.as_str())
            .collect();

        let needle = normalized(query.search.as_deref());
        let company = query.company.as_deref().filter(|c| !c.is_empty());

        let jobs: Vec<JobListing> = self
            .catalog
            .jobs
            .iter()
            .filter(|job| needle.as_deref().map_or(true, |n| job.matches(n)))
            .filter(|job| company.map_or(true, |c| job.company == c))
            .filter(|job| student.map_or(true, |s| job.meets_cgpa(s)))
            .map(|job| JobListing {
                job: job.clone(),
                eligible: student.is_some_and(|s| job.is_eligible(s)),
                applied: applied.contains(job.id.as_str()),
            })
            .collect();

        // Dataset order, first appearance wins.
        let mut companies: Vec<String> = Vec::new();
        for job in &self.catalog.jobs {
            if !companies.contains(&job.company) {
                companies.push(job.company.clone());
            }
        }

        JobBoard {
            total: jobs.len(),
            jobs,
            companies,
        }
    }

    pub fn student_applications(
        &self,
        identity: &Identity,
        status: Option<ApplicationStatus>,
    ) -> StudentApplications {
        let own = self.applications_of(identity.id());
        let counts = StatusCounts::tally(own.iter().copied());
        let selected = own
            .into_iter()
            .filter(|app| status.map_or(true, |s| app.status == s))
            .collect();
        StudentApplications {
            counts,
            applications: self.with_jobs(selected),
        }
    }

    pub async fn student_notifications(&self, identity: &Identity) -> NotificationFeed {
        feed(self.notices.for_student(identity.id()).await)
    }

    // --- recruiter area ---

    pub async fn recruiter_overview(&self, identity: &Identity) -> RecruiterOverview {
        let notifications = self.notices.for_recruiter(identity.id()).await;
        let jobs = self.jobs_of(identity.id());
        let applicants = self.applications_to(&jobs);
        RecruiterOverview {
            recruiter: self.catalog.recruiter(identity.id()).cloned(),
            open_jobs: jobs.len(),
            applicants: StatusCounts::tally(applicants),
            notifications,
        }
    }

    pub fn recruiter_jobs(&self, identity: &Identity) -> Vec<RecruiterJob> {
        self.jobs_of(identity.id())
            .into_iter()
            .map(|job| RecruiterJob {
                applications: StatusCounts::tally(
                    self.catalog.applications.iter().filter(|app| app.job_id == job.id),
                ),
                job: job.clone(),
            })
            .collect()
    }

    pub fn recruiter_applicants(
        &self,
        identity: &Identity,
        status: Option<ApplicationStatus>,
    ) -> RecruiterApplicants {
        let jobs = self.jobs_of(identity.id());
        let all = self.applications_to(&jobs);
        let counts = StatusCounts::tally(all.iter().copied());
        let applicants = all
            .into_iter()
            .filter(|app| status.map_or(true, |s| app.status == s))
            .map(|app| ApplicantView {
                student: self.catalog.student(&app.student_id).cloned(),
                job: self.catalog.job(&app.job_id).cloned(),
                application: app.clone(),
            })
            .collect();
        RecruiterApplicants { counts, applicants }
    }

    // --- admin area ---

    pub fn admin_overview(&self) -> AdminOverview {
        AdminOverview {
            total_students: self.catalog.students.len(),
            total_recruiters: self.catalog.recruiters.len(),
            total_jobs: self.catalog.jobs.len(),
            statistics: self.catalog.statistics.clone(),
        }
    }

    pub fn admin_students(&self, search: Option<&str>) -> Vec<Student> {
        let needle = normalized(search);
        self.catalog
            .students
            .iter()
            .filter(|s| needle.as_deref().map_or(true, |n| s.matches(n)))
            .cloned()
            .collect()
    }

    pub fn admin_recruiters(&self, search: Option<&str>) -> Vec<Recruiter> {
        let needle = normalized(search);
        self.catalog
            .recruiters
            .iter()
            .filter(|r| needle.as_deref().map_or(true, |n| r.matches(n)))
            .cloned()
            .collect()
    }

    // --- helpers ---

    /// Newest first.
    fn applications_of(&self, student_id: &str) -> Vec<&Application> {
        let mut own: Vec<&Application> = self
            .catalog
            .applications
            .iter()
            .filter(|app| app.student_id == student_id)
            .collect();
        own.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        own
    }

    fn jobs_of(&self, recruiter_id: &str) -> Vec<&JobOpening> {
        self.catalog
            .jobs
            .iter()
            .filter(|job| job.recruiter_id == recruiter_id)
            .collect()
    }

    fn applications_to(&self, jobs: &[&JobOpening]) -> Vec<&Application> {
        self.catalog
            .applications
            .iter()
            .filter(|app| jobs.iter().any(|job| job.id == app.job_id))
            .collect()
    }

    fn with_jobs(&self, applications: Vec<&Application>) -> Vec<ApplicationView> {
        applications
            .into_iter()
            .map(|app| ApplicationView {
                job: self.catalog.job(&app.job_id).cloned(),
                application: app.clone(),
            })
            .collect()
    }
}

fn feed(notifications: Vec<Notification>) -> NotificationFeed {
    NotificationFeed {
        unread: notifications.iter().filter(|n| !n.read).count(),
        notifications,
    }
}

/// Trimmed, lowercased search text; `None` when there is nothing to match.
fn normalized(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
