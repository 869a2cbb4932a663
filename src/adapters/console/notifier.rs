//! Console notifier: success lines on stdout, errors on stderr.

use async_trait::async_trait;

use crate::ports::{Notification, NotificationLevel, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notification: &Notification) -> String {
        match notification.level {
            NotificationLevel::Success => format!("✓ {}", notification.message),
            NotificationLevel::Error => format!("✗ {}", notification.message),
        }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notification: Notification) {
        let line = Self::render(&notification);
        match notification.level {
            NotificationLevel::Success => println!("{}", line),
            NotificationLevel::Error => eprintln!("{}", line),
        }
    }
}
