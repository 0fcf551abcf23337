use chrono::NaiveDate;

use super::Catalog;
use crate::models::{
    Announcement, AnnouncementKind, Application, ApplicationStatus, DepartmentStat, Eligibility,
    JobOpening, Notification, NotificationKind, PlacementStatistics, Recruiter, Student,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    name: &str,
    email: &str,
    roll_no: &str,
    branch: &str,
    cgpa: f64,
    skills: &[&str],
    phone: &str,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        roll_no: roll_no.to_string(),
        branch: branch.to_string(),
        cgpa,
        skills: strings(skills),
        resume: None,
        phone: phone.to_string(),
    }
}

fn recruiter(
    id: &str,
    name: &str,
    email: &str,
    company: &str,
    phone: &str,
    designation: &str,
) -> Recruiter {
    Recruiter {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        phone: phone.to_string(),
        designation: designation.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    company: &str,
    title: &str,
    ctc: f64,
    location: &str,
    min_cgpa: f64,
    branches: &[&str],
    description: &str,
    requirements: &[&str],
    deadline: NaiveDate,
    recruiter_id: &str,
) -> JobOpening {
    JobOpening {
        id: id.to_string(),
        company: company.to_string(),
        title: title.to_string(),
        ctc,
        location: location.to_string(),
        eligibility: Eligibility {
            min_cgpa,
            branches: strings(branches),
        },
        description: description.to_string(),
        requirements: strings(requirements),
        deadline,
        recruiter_id: recruiter_id.to_string(),
    }
}

fn application(
    id: &str,
    student_id: &str,
    job_id: &str,
    status: ApplicationStatus,
    applied_date: NaiveDate,
) -> Application {
    Application {
        id: id.to_string(),
        student_id: student_id.to_string(),
        job_id: job_id.to_string(),
        status,
        applied_date,
    }
}

pub(super) fn demo_catalog() -> Catalog {
    let students = vec![
        student(
            "student_1",
            "Arjun Kumar",
            "arjun.kumar@college.edu",
            "20CS001",
            "Computer Science",
            8.5,
            &["Python", "JavaScript", "React", "Node.js", "SQL"],
            "+91-9876543210",
        ),
        student(
            "student_2",
            "Priya Singh",
            "priya.singh@college.edu",
            "20CS002",
            "Computer Science",
            9.2,
            &["Java", "Spring Boot", "Docker", "AWS", "Kubernetes"],
            "+91-9876543211",
        ),
        student(
            "student_3",
            "Rohan Patel",
            "rohan.patel@college.edu",
            "20EC001",
            "Electronics",
            7.8,
            &["Circuit Design", "VHDL", "Embedded Systems", "MATLAB"],
            "+91-9876543212",
        ),
        student(
            "student_4",
            "Neha Sharma",
            "neha.sharma@college.edu",
            "20ME001",
            "Mechanical",
            8.1,
            &["CAD", "SOLIDWORKS", "ANSYS", "Thermodynamics"],
            "+91-9876543213",
        ),
    ];

    let recruiters = vec![
        recruiter(
            "recruiter_1",
            "John Smith",
            "john.smith@techcorp.com",
            "TechCorp Solutions",
            "+91-8876543210",
            "HR Manager",
        ),
        recruiter(
            "recruiter_2",
            "Sarah Johnson",
            "sarah.johnson@innovate.com",
            "InnovateTech",
            "+91-8876543211",
            "Talent Acquisition Lead",
        ),
        recruiter(
            "recruiter_3",
            "Amit Kumar",
            "amit.kumar@finance.com",
            "FinanceFlow",
            "+91-8876543212",
            "Campus Recruiter",
        ),
    ];

    let jobs = vec![
        job(
            "job_1",
            "TechCorp Solutions",
            "Software Engineer",
            12.0,
            "Bangalore",
            7.0,
            &["Computer Science", "IT"],
            "We are looking for talented software engineers to join our team and work on cutting-edge technologies.",
            &[
                "Strong programming skills in Python or Java",
                "Experience with web development",
                "Good problem-solving abilities",
            ],
            date(2024, 3, 15),
            "recruiter_1",
        ),
        job(
            "job_2",
            "InnovateTech",
            "Full Stack Developer",
            14.0,
            "Hyderabad",
            7.5,
            &["Computer Science", "IT"],
            "Join our innovative team to build scalable web applications using modern tech stack.",
            &[
                "React.js and Node.js experience",
                "Database design knowledge",
                "REST API development",
            ],
            date(2024, 3, 20),
            "recruiter_2",
        ),
        job(
            "job_3",
            "FinanceFlow",
            "Data Analyst",
            11.0,
            "Mumbai",
            6.5,
            &["Computer Science", "IT", "Statistics"],
            "Analyze financial data and provide insights using advanced analytics and visualization tools.",
            &[
                "SQL and Python proficiency",
                "Data visualization skills",
                "Statistical analysis knowledge",
            ],
            date(2024, 3, 25),
            "recruiter_3",
        ),
        job(
            "job_4",
            "TechCorp Solutions",
            "DevOps Engineer",
            13.0,
            "Pune",
            7.5,
            &["Computer Science", "IT"],
            "Work with cutting-edge DevOps tools and infrastructure to scale our applications.",
            &[
                "Docker and Kubernetes knowledge",
                "AWS or GCP experience",
                "Linux system administration",
            ],
            date(2024, 4, 10),
            "recruiter_1",
        ),
    ];

    let applications = vec![
        application("app_1", "student_1", "job_1", ApplicationStatus::Shortlisted, date(2024, 2, 20)),
        application("app_2", "student_1", "job_2", ApplicationStatus::Applied, date(2024, 2, 21)),
        application("app_3", "student_2", "job_4", ApplicationStatus::Selected, date(2024, 2, 19)),
        application("app_4", "student_3", "job_1", ApplicationStatus::Rejected, date(2024, 2, 20)),
    ];

    let notifications = vec![
        Notification {
            id: "notif_1".to_string(),
            student_id: Some("student_1".to_string()),
            recruiter_id: None,
            message: "You have been shortlisted for Software Engineer role at TechCorp Solutions"
                .to_string(),
            kind: NotificationKind::Shortlist,
            created_at: date(2024, 2, 22),
            read: false,
        },
        Notification {
            id: "notif_2".to_string(),
            student_id: Some("student_2".to_string()),
            recruiter_id: None,
            message: "Interview scheduled for DevOps Engineer role at TechCorp Solutions on 15-Mar-2024"
                .to_string(),
            kind: NotificationKind::Interview,
            created_at: date(2024, 2, 23),
            read: false,
        },
    ];

    let announcements = vec![
        Announcement {
            id: "1".to_string(),
            title: "Campus Drive - TechCorp Solutions".to_string(),
            message: "TechCorp Solutions will be visiting our campus on 15th March 2024 for recruitment."
                .to_string(),
            date: date(2024, 2, 20),
            kind: AnnouncementKind::Important,
        },
        Announcement {
            id: "2".to_string(),
            title: "Deadline Extended".to_string(),
            message: "The deadline for registering on the placement portal has been extended to 10th March 2024."
                .to_string(),
            date: date(2024, 2, 21),
            kind: AnnouncementKind::Deadline,
        },
    ];

    let statistics = PlacementStatistics {
        placed_students: 15,
        companies_visited: 8,
        average_ctc: 11.8,
        highest_ctc: 18.0,
        department_stats: vec![
            department("Computer Science", 12, 20),
            department("IT", 8, 15),
            department("Electronics", 3, 18),
            department("Mechanical", 2, 20),
        ],
    };

    Catalog {
        students,
        recruiters,
        jobs,
        applications,
        notifications,
        announcements,
        statistics,
    }
}

fn department(name: &str, placed: u32, total: u32) -> DepartmentStat {
    DepartmentStat {
        department: name.to_string(),
        placed,
        total,
    }
}
