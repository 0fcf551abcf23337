//! The static reference dataset behind the portal.

mod seed;

use placement_session::{Directory, PrincipalRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{
    Announcement, Application, JobOpening, Notification, PlacementStatistics, Recruiter, Student,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub recruiters: Vec<Recruiter>,
    #[serde(default)]
    pub jobs: Vec<JobOpening>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Display order; new announcements are published at the front.
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub statistics: PlacementStatistics,
}

impl Catalog {
    /// The built-in demo dataset.
    pub fn demo() -> Self {
        seed::demo_catalog()
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads `path` when given, the demo dataset otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let catalog = Self::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    students = catalog.students.len(),
                    recruiters = catalog.recruiters.len(),
                    jobs = catalog.jobs.len(),
                    "Catalog loaded"
                );
                Ok(catalog)
            }
            None => Ok(Self::demo()),
        }
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn recruiter(&self, id: &str) -> Option<&Recruiter> {
        self.recruiters.iter().find(|r| r.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&JobOpening> {
        self.jobs.iter().find(|j| j.id == id)
    }
}

impl Directory for Catalog {
    fn find_student_by_email(&self, email: &str) -> Option<PrincipalRecord> {
        self.students
            .iter()
            .find(|s| s.email == email)
            .map(|s| PrincipalRecord::new(&s.id, &s.email, &s.name))
    }

    fn find_recruiter_by_email(&self, email: &str) -> Option<PrincipalRecord> {
        self.recruiters
            .iter()
            .find(|r| r.email == email)
            .map(|r| PrincipalRecord::new(&r.id, &r.email, &r.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_catalog_is_consistent() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.students.len(), 4);
        assert_eq!(catalog.recruiters.len(), 3);
        assert_eq!(catalog.jobs.len(), 4);

        for job in &catalog.jobs {
            assert!(catalog.recruiter(&job.recruiter_id).is_some(), "{}", job.id);
        }
        for application in &catalog.applications {
            assert!(catalog.student(&application.student_id).is_some());
            assert!(catalog.job(&application.job_id).is_some());
        }
    }

    #[test]
    fn test_directory_lookup() {
        let catalog = Catalog::demo();
        let arjun = catalog.find_student_by_email("arjun.kumar@college.edu").unwrap();
        assert_eq!(arjun.id, "student_1");
        assert_eq!(arjun.name, "Arjun Kumar");
        assert!(catalog.find_recruiter_by_email("arjun.kumar@college.edu").is_none());
        assert_eq!(
            catalog.find_recruiter_by_email("sarah.johnson@innovate.com").unwrap().id,
            "recruiter_2"
        );
    }

    #[test]
    fn test_load_from_file_round_trips() {
        let demo = Catalog::demo();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&demo).unwrap().as_bytes()).unwrap();

        let loaded = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(loaded.students, demo.students);
        assert_eq!(loaded.jobs, demo.jobs);
        assert_eq!(loaded.statistics, demo.statistics);
        assert_eq!(loaded.announcements, demo.announcements);
    }

    #[test]
    fn test_partial_file_defaults_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"recruiters": []}"#).unwrap();

        let loaded = Catalog::from_file(file.path()).unwrap();
        assert!(loaded.students.is_empty());
        assert_eq!(loaded.statistics, PlacementStatistics::default());
    }

    #[test]
    fn test_bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2").unwrap();

        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
