//! Fetch bridge: runs store-issued requests on the runtime and feeds the
//! results back into the action loop.
//!
//! Requests are never cancelled. A superseded request still completes; the
//! store recognises its sequence number as stale and drops the result.

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use roster_core::{FetchRequest, Msg, UserDirectory};

use crate::action::Action;

/// Spawn `request` and report its outcome as `Action::FetchFinished`.
pub fn spawn_fetch(directory: UserDirectory, request: FetchRequest, tx: UnboundedSender<Action>) {
    tokio::spawn(async move {
        debug!(seq = %request.seq, "fetch started");
        let action = match directory.execute(request).await {
            Msg::FetchFinished { seq, result } => Action::FetchFinished { seq, result },
            other => {
                warn!(?other, "fetch produced a non-completion message");
                return;
            }
        };
        if tx.send(action).is_err() {
            warn!("action channel closed before fetch completed");
        }
    });
}

#[cfg(test)]
mod tests {
    use roster_core::{Store, ViewerConfig};
    use tokio::sync::mpsc;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn completion_carries_the_request_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).expect("mock server URL");
        let directory = UserDirectory::new(&ViewerConfig::new(url)).expect("valid config");
        let request = Store::new(10).dispatch(Msg::Mounted).expect("mount fetches");
        let issued = request.seq;

        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_fetch(directory, request, tx);

        match rx.recv().await {
            Some(Action::FetchFinished { seq, result }) => {
                assert_eq!(seq, issued);
                let message = result.expect_err("500 is a failure");
                assert!(message.contains("500"), "{message}");
            }
            other => panic!("expected FetchFinished, got {other:?}"),
        }
    }
}
