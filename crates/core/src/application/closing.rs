// Closing Notice

use tokio::sync::watch;

/// Closing signal observed by the arrival generator
#[derive(Clone)]
pub struct ClosingNotice {
    rx: watch::Receiver<bool>,
}

impl ClosingNotice {
    /// Check if closing was announced
    pub fn is_closing(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the closing announcement (returns at once if the announcer is gone)
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|closing| *closing).await;
    }
}

/// Closing announcer, held by the shutdown coordinator
pub struct ClosingAnnouncer {
    tx: watch::Sender<bool>,
}

impl ClosingAnnouncer {
    /// Tell every notice holder the shop is closing
    pub fn announce(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a closing channel
pub fn closing_channel() -> (ClosingAnnouncer, ClosingNotice) {
    let (tx, rx) = watch::channel(false);
    (ClosingAnnouncer { tx }, ClosingNotice { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[test]
    fn test_notice_starts_open() {
        let (_announcer, notice) = closing_channel();
        assert!(!notice.is_closing());
    }

    #[test]
    fn test_wait_completes_after_announce() {
        let (announcer, mut notice) = closing_channel();
        {
            let mut wait = task::spawn(notice.wait());
            assert_pending!(wait.poll());

            announcer.announce();
            assert!(wait.is_woken());
            assert_ready!(wait.poll());
        }
        assert!(notice.is_closing());
    }

    #[test]
    fn test_late_subscriber_sees_announcement() {
        let (announcer, notice) = closing_channel();
        announcer.announce();

        let mut late = notice.clone();
        assert!(late.is_closing());
        let mut wait = task::spawn(late.wait());
        assert_ready!(wait.poll());
    }

    #[test]
    fn test_dropped_announcer_releases_waiters() {
        let (announcer, mut notice) = closing_channel();
        drop(announcer);

        let mut wait = task::spawn(notice.wait());
        assert_ready!(wait.poll());
    }
}
