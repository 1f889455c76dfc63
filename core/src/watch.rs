//! Polls a submission until the judge reaches a terminal status.

use std::time::Duration;

use async_trait::async_trait;
use termoj_webclient::{OjClient, Submission, SubmissionId};

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub interval: Duration,
    pub max_polls: usize,
}

impl WatchOptions {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);
    pub const DEFAULT_MAX_POLLS: usize = 1800;
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            max_polls: Self::DEFAULT_MAX_POLLS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Submission {id} is still '{last_status}' after {polls} polls; giving up")]
    GaveUp {
        id: SubmissionId,
        polls: usize,
        last_status: String,
    },

    #[error(transparent)]
    Api(#[from] termoj_webclient::Error),
}

/// Fetches submission `id` until it is finished, calling `on_update` after each fetch
/// with the submission and the 1-based poll number.
///
/// Sleeps `opts.interval` between polls, never after the last one.
/// At least one poll is made even if `opts.max_polls` is zero.
pub async fn watch_submission<F>(
    cli: &OjClient,
    id: SubmissionId,
    opts: &WatchOptions,
    sleeper: &dyn Sleeper,
    mut on_update: F,
) -> Result<Submission, WatchError>
where
    F: FnMut(&Submission, usize),
{
    let max_polls = opts.max_polls.max(1);
    let mut last_status = String::from("unknown");

    for poll in 1..=max_polls {
        let sub = cli.get_submission(id).await?;
        on_update(&sub, poll);

        if sub.is_finished() {
            log::info!("Submission {} finished after {} polls", id, poll);
            return Ok(sub);
        }
        if let Some(status) = sub.status {
            last_status = status.to_string();
        }
        if poll < max_polls {
            sleeper.sleep(opts.interval).await;
        }
    }

    Err(WatchError::GaveUp {
        id,
        polls: max_polls,
        last_status,
    })
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use termoj_webclient::{mock::ScriptedTransport, SubmissionStatus};

    use super::*;

    #[derive(Default)]
    struct RecordingSleeper(Mutex<Vec<Duration>>);

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.0.lock().unwrap().push(duration);
        }
    }

    fn client() -> (Arc<ScriptedTransport>, OjClient) {
        let transport = Arc::new(ScriptedTransport::new());
        let cli = OjClient::with_transport(transport.clone()).with_token("t");
        (transport, cli)
    }

    fn opts(max_polls: usize) -> WatchOptions {
        WatchOptions {
            interval: Duration::from_millis(10),
            max_polls,
        }
    }

    #[tokio::test]
    async fn stops_at_terminal_status() {
        let (transport, cli) = client();
        transport
            .reply_json(json!({"id": 9, "status": "pending"}))
            .reply_json(json!({"id": 9, "status": "judging"}))
            .reply_json(json!({"id": 9, "status": "accepted", "score": 100}));

        let sleeper = RecordingSleeper::default();
        let mut seen = Vec::new();
        let sub = watch_submission(&cli, 9, &opts(10), &sleeper, |s, poll| {
            seen.push((poll, s.status))
        })
        .await
        .unwrap();

        assert_eq!(sub.status, Some(SubmissionStatus::Accepted));
        assert_eq!(
            seen,
            vec![
                (1, Some(SubmissionStatus::Pending)),
                (2, Some(SubmissionStatus::Judging)),
                (3, Some(SubmissionStatus::Accepted)),
            ]
        );
        assert_eq!(sleeper.0.lock().unwrap().len(), 2);
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn aborted_is_terminal() {
        let (transport, cli) = client();
        transport.reply_json(json!({"id": 1, "status": "aborted"}));

        let sleeper = RecordingSleeper::default();
        let sub = watch_submission(&cli, 1, &opts(5), &sleeper, |_, _| {})
            .await
            .unwrap();
        assert_eq!(sub.status, Some(SubmissionStatus::Aborted));
        assert!(sleeper.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn gives_up_without_trailing_sleep() {
        let (transport, cli) = client();
        for _ in 0..3 {
            transport.reply_json(json!({"id": 4, "status": "judging"}));
        }

        let sleeper = RecordingSleeper::default();
        let err = watch_submission(&cli, 4, &opts(3), &sleeper, |_, _| {})
            .await
            .unwrap_err();
        match err {
            WatchError::GaveUp {
                id,
                polls,
                last_status,
            } => {
                assert_eq!((id, polls), (4, 3));
                assert_eq!(last_status, "judging");
            }
            _ => panic!("Want GaveUp, but got {:?}", err),
        }
        assert_eq!(
            *sleeper.0.lock().unwrap(),
            vec![Duration::from_millis(10); 2]
        );
    }

    #[tokio::test]
    async fn api_error_stops_watching() {
        let (transport, cli) = client();
        transport.reply(401, "");

        let sleeper = RecordingSleeper::default();
        let err = watch_submission(&cli, 4, &opts(3), &sleeper, |_, _| {})
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WatchError::Api(termoj_webclient::Error::AuthenticationRequired { .. })
        ));
    }
}
