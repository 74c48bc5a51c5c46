//! Simulated assistant: canned replies delivered after a fixed delay.
//!
//! The only asynchronous boundary in the app. Each scheduled reply captures
//! the palette session id at send time; the event loop compares it against
//! the current session at delivery and drops events for retired sessions.

use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

use crate::content;

/// Default latency before a reply lands. Overridable via FOLIO_REPLY_DELAY_MS.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct ReplyEvent {
    pub session_id: Uuid,
    pub text: String,
}

pub struct ReplyScheduler {
    runtime: Runtime,
    tx: UnboundedSender<ReplyEvent>,
    rx: UnboundedReceiver<ReplyEvent>,
    delay: Duration,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self { runtime, tx, rx, delay })
    }

    /// Schedule the canned (or fallback) reply for `prompt`.
    pub fn schedule(&self, session_id: Uuid, prompt: String) {
        let tx = self.tx.clone();
        let delay = self.delay;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let text = content::reply_for(&prompt).to_string();
            // The receiver only goes away on shutdown; nothing to do then.
            let _ = tx.send(ReplyEvent { session_id, text });
        });
    }

    /// Non-blocking drain, called once per UI tick.
    pub fn try_recv(&mut self) -> Option<ReplyEvent> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn recv_within(scheduler: &mut ReplyScheduler, timeout: Duration) -> Option<ReplyEvent> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(ev) = scheduler.try_recv() {
                return Some(ev);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn delivers_the_canned_reply_with_the_captured_session() {
        let mut scheduler = ReplyScheduler::new(Duration::ZERO).unwrap();
        let session = Uuid::new_v4();
        scheduler.schedule(session, "Are you open to work opportunities?".into());

        let ev = recv_within(&mut scheduler, Duration::from_secs(2)).expect("reply");
        assert_eq!(ev.session_id, session);
        assert_eq!(
            ev.text,
            "Yes, I'm currently looking for a full-time position in Singapore!"
        );
    }

    #[test]
    fn unknown_prompts_deliver_the_fallback() {
        let mut scheduler = ReplyScheduler::new(Duration::ZERO).unwrap();
        scheduler.schedule(Uuid::new_v4(), "asdf".into());

        let ev = recv_within(&mut scheduler, Duration::from_secs(2)).expect("reply");
        assert_eq!(ev.text, content::FALLBACK_REPLY);
    }

    #[test]
    fn nothing_arrives_before_the_delay() {
        let mut scheduler = ReplyScheduler::new(Duration::from_secs(30)).unwrap();
        scheduler.schedule(Uuid::new_v4(), "asdf".into());
        assert!(recv_within(&mut scheduler, Duration::from_millis(100)).is_none());
    }
}
