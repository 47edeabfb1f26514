use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::{Notification, NotificationKind, UserId};
use crate::route::Screen;
use crate::transport::Transport;

/// Tabs on the notifications screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    /// Tabs in display order.
    #[must_use]
    pub fn tabs() -> Vec<Self> {
        let mut tabs = vec![Self::All, Self::Unread];
        tabs.extend(NotificationKind::KNOWN.into_iter().map(Self::Kind));
        tabs
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Unread => "unread",
            Self::Kind(kind) => kind.key(),
        }
    }

    #[must_use]
    pub fn matches(self, item: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !item.read,
            Self::Kind(kind) => item.kind == kind,
        }
    }
}

#[must_use]
pub fn filter_notifications(
    items: &[Notification],
    filter: NotificationFilter,
) -> Vec<&Notification> {
    items.iter().filter(|n| filter.matches(n)).collect()
}

#[must_use]
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Set the read flag of `id`; `false` when no such item is listed.
pub fn apply_read(items: &mut [Notification], id: &str, read: bool) -> bool {
    items
        .iter_mut()
        .find(|n| n.id == id)
        .map(|n| n.read = read)
        .is_some()
}

/// Mark every item read, leaving every other field untouched.
pub fn apply_all_read(items: &mut [Notification]) {
    for item in items {
        item.read = true;
    }
}

pub fn apply_removed(items: &mut Vec<Notification>, id: &str) -> bool {
    let before = items.len();
    items.retain(|n| n.id != id);
    items.len() != before
}

/// Where activating a notification leads, if anywhere.
#[must_use]
pub fn notification_target(item: &Notification) -> Option<Screen> {
    match item.kind {
        NotificationKind::Review => item.strain_id.clone().map(Screen::Review),
        NotificationKind::Achievement => Some(Screen::Profile),
        _ => None,
    }
}

/// Flip the read flag of `id` on the server, then locally.
///
/// # Errors
///
/// The server error; the local list is left as it was.
pub async fn toggle_read<T: Transport>(
    api: &ApiClient<T>,
    items: &mut [Notification],
    id: &str,
) -> Result<bool, ApiError> {
    let read = !items.iter().find(|n| n.id == id).is_some_and(|n| n.read);
    api.set_notification_read(id, read).await?;
    apply_read(items, id, read);
    Ok(read)
}

/// # Errors
///
/// The server error; the local list is left as it was.
pub async fn mark_all_read<T: Transport>(
    api: &ApiClient<T>,
    user_id: UserId,
    items: &mut [Notification],
) -> Result<(), ApiError> {
    api.mark_all_notifications_read(user_id).await?;
    apply_all_read(items);
    Ok(())
}

/// # Errors
///
/// The server error; the local list is left as it was.
pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    items: &mut Vec<Notification>,
    id: &str,
) -> Result<(), ApiError> {
    api.delete_notification(id).await?;
    apply_removed(items, id);
    Ok(())
}
