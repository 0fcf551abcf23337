use chrono::Utc;
use placement_session::ids::IdGenerator;
use tokio::sync::RwLock;

use super::PortalError;
use crate::{
    catalog::Catalog,
    models::{Announcement, AnnouncementKind, Notification},
};

#[derive(Debug, Default)]
struct Notices {
    notifications: Vec<Notification>,
    announcements: Vec<Announcement>,
}

/// The mutable part of the portal: notification read state and the admin
/// announcement list. Seeded from the catalog, held in memory only.
#[derive(Debug)]
pub struct NoticeBoard {
    notices: RwLock<Notices>,
    ids: IdGenerator,
}

impl NoticeBoard {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            notices: RwLock::new(Notices {
                notifications: catalog.notifications.clone(),
                announcements: catalog.announcements.clone(),
            }),
            ids: IdGenerator::new(),
        }
    }

    pub async fn for_student(&self, student_id: &str) -> Vec<Notification> {
        self.notices
            .read()
            .await
            .notifications
            .iter()
            .filter(|n| n.student_id.as_deref() == Some(student_id))
            .cloned()
            .collect()
    }

    pub async fn for_recruiter(&self, recruiter_id: &str) -> Vec<Notification> {
        self.notices
            .read()
            .await
            .notifications
            .iter()
            .filter(|n| n.recruiter_id.as_deref() == Some(recruiter_id))
            .cloned()
            .collect()
    }

    /// Another student's notification is reported as missing.
    pub async fn mark_read(
        &self,
        student_id: &str,
        notification_id: &str,
    ) -> Result<Notification, PortalError> {
        let mut notices = self.notices.write().await;
        let notification = notices
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id && n.student_id.as_deref() == Some(student_id))
            .ok_or(PortalError::NotFound("Notification"))?;
        notification.read = true;
        Ok(notification.clone())
    }

    pub async fn delete_notification(
        &self,
        student_id: &str,
        notification_id: &str,
    ) -> Result<(), PortalError> {
        let mut notices = self.notices.write().await;
        let before = notices.notifications.len();
        notices
            .notifications
            .retain(|n| !(n.id == notification_id && n.student_id.as_deref() == Some(student_id)));
        if notices.notifications.len() == before {
            return Err(PortalError::NotFound("Notification"));
        }
        tracing::info!(student_id = %student_id, notification_id = %notification_id, "Notification deleted");
        Ok(())
    }

    pub async fn announcements(&self) -> Vec<Announcement> {
        self.notices.read().await.announcements.clone()
    }

    /// Publishes at the front of the list, dated today.
    pub async fn publish(
        &self,
        title: &str,
        message: &str,
        kind: AnnouncementKind,
    ) -> Announcement {
        let announcement = Announcement {
            id: self.ids.issue("announcement"),
            title: title.to_string(),
            message: message.to_string(),
            date: Utc::now().date_naive(),
            kind,
        };
        self.notices
            .write()
            .await
            .announcements
            .insert(0, announcement.clone());
        tracing::info!(announcement_id = %announcement.id, "Announcement published");
        announcement
    }

    pub async fn retract(&self, announcement_id: &str) -> Result<(), PortalError> {
        let mut notices = self.notices.write().await;
        let before = notices.announcements.len();
        notices.announcements.retain(|a| a.id != announcement_id);
        if notices.announcements.len() == before {
            return Err(PortalError::NotFound("Announcement"));
        }
        tracing::info!(announcement_id = %announcement_id, "Announcement deleted");
        Ok(())
    }
}
