/// The part of a reference record the resolver needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalRecord {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl PrincipalRecord {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Read-only lookup over the student and recruiter reference datasets.
///
/// Lookups are exact, case-sensitive matches on `email`; the first record in
/// dataset order wins.
pub trait Directory: Send + Sync {
    fn find_student_by_email(&self, email: &str) -> Option<PrincipalRecord>;
    fn find_recruiter_by_email(&self, email: &str) -> Option<PrincipalRecord>;
}

/// A directory over two in-memory lists.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    students: Vec<PrincipalRecord>,
    recruiters: Vec<PrincipalRecord>,
}

impl StaticDirectory {
    pub fn new(students: Vec<PrincipalRecord>, recruiters: Vec<PrincipalRecord>) -> Self {
        Self {
            students,
            recruiters,
        }
    }
}

impl Directory for StaticDirectory {
    fn find_student_by_email(&self, email: &str) -> Option<PrincipalRecord> {
        self.students.iter().find(|s| s.email == email).cloned()
    }

    fn find_recruiter_by_email(&self, email: &str) -> Option<PrincipalRecord> {
        self.recruiters.iter().find(|r| r.email == email).cloned()
    }
}
