// Display facts and view precedence
use super::events::{BackendEvent, DeviceCode};
use super::samples::Bucket;

/// Everything the panel has learned from the backend so far.
///
/// Events may arrive out of causal order or be repeated, so this is not a
/// state machine: each event overwrites its own fact and nothing else, and the
/// view is recomputed from whatever is known. A fact is only ever replaced by
/// a fresh value of the same kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayFacts {
    pub device_code: Option<DeviceCode>,
    pub auth_token: Option<String>,
    pub stats: Option<Vec<Bucket>>,
    pub last_error: Option<String>,
}

/// The closed set of things the panel can currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayView<'a> {
    DataReady(&'a [Bucket]),
    CodeIssued(&'a DeviceCode),
    Authenticated,
    ErrorState(&'a str),
    Unauthenticated,
}

impl DisplayFacts {
    /// Reducer: fold one inbound event into a new facts record.
    pub fn apply(&self, event: &BackendEvent) -> DisplayFacts {
        let mut next = self.clone();
        match event {
            BackendEvent::AuthCodeIssued(code) => next.device_code = Some(code.clone()),
            BackendEvent::AuthTokenRefreshed { token } => next.auth_token = Some(token.clone()),
            BackendEvent::StatsReady { buckets } => next.stats = Some(buckets.clone()),
            BackendEvent::Other { .. } => {}
        }
        // Independent of the match above: an error name sets the error fact
        // alongside whatever else the event carried.
        if event.is_error() {
            next.last_error = Some(event.name().to_string());
        }
        next
    }

    /// Order-independent precedence over the known facts. Real data always
    /// wins; the device code prompt is only useful before a token exists.
    pub fn view(&self) -> DisplayView<'_> {
        if let Some(stats) = &self.stats {
            return DisplayView::DataReady(stats);
        }
        if let (Some(code), None) = (&self.device_code, &self.auth_token) {
            return DisplayView::CodeIssued(code);
        }
        if self.auth_token.is_some() {
            return DisplayView::Authenticated;
        }
        if let Some(message) = &self.last_error {
            return DisplayView::ErrorState(message);
        }
        DisplayView::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_event() -> BackendEvent {
        BackendEvent::AuthCodeIssued(DeviceCode {
            verification_url: "https://example.com/device".to_string(),
            user_code: "ABCD-EFGH".to_string(),
        })
    }

    fn token_event() -> BackendEvent {
        BackendEvent::AuthTokenRefreshed {
            token: "opaque".to_string(),
        }
    }

    fn stats_event() -> BackendEvent {
        BackendEvent::StatsReady {
            buckets: vec![Bucket {
                start_time_millis: 1_700_000_000_000,
                data_sets: Vec::new(),
            }],
        }
    }

    #[test]
    fn boot_state_is_unauthenticated() {
        assert_eq!(DisplayFacts::default().view(), DisplayView::Unauthenticated);
    }

    #[test]
    fn code_without_token_prompts_for_code() {
        let facts = DisplayFacts::default().apply(&code_event());
        assert!(matches!(facts.view(), DisplayView::CodeIssued(_)));
    }

    #[test]
    fn token_supersedes_code_prompt() {
        let facts = DisplayFacts::default()
            .apply(&code_event())
            .apply(&token_event());
        assert_eq!(facts.view(), DisplayView::Authenticated);
    }

    #[test]
    fn data_wins_over_all_other_facts() {
        let facts = DisplayFacts::default()
            .apply(&code_event())
            .apply(&token_event())
            .apply(&stats_event());
        assert!(matches!(facts.view(), DisplayView::DataReady(_)));
    }

    #[test]
    fn data_wins_even_when_events_arrive_out_of_order() {
        let facts = DisplayFacts::default()
            .apply(&stats_event())
            .apply(&code_event());
        assert!(matches!(facts.view(), DisplayView::DataReady(_)));
    }

    #[test]
    fn error_event_sets_message_without_clearing_facts() {
        let facts = DisplayFacts::default()
            .apply(&token_event())
            .apply(&BackendEvent::Other {
                name: "UPDATE_ERROR".to_string(),
            });
        assert_eq!(facts.last_error.as_deref(), Some("UPDATE_ERROR"));
        assert!(facts.auth_token.is_some());
        // Token still outranks the error for rendering.
        assert_eq!(facts.view(), DisplayView::Authenticated);
    }

    #[test]
    fn error_alone_shows_error_state() {
        let facts = DisplayFacts::default().apply(&BackendEvent::Other {
            name: "AUTH_ERROR".to_string(),
        });
        assert_eq!(facts.view(), DisplayView::ErrorState("AUTH_ERROR"));
    }

    #[test]
    fn repeated_events_overwrite_their_own_fact() {
        let facts = DisplayFacts::default()
            .apply(&token_event())
            .apply(&BackendEvent::AuthTokenRefreshed {
                token: "newer".to_string(),
            });
        assert_eq!(facts.auth_token.as_deref(), Some("newer"));
    }
}
