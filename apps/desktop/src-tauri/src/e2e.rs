use std::sync::Arc;

use async_trait::async_trait;
use cardfile::platform::types::{AuthorizationStatus, PromptOutcome};
use cardfile::{ContactsAuthority, CoreError};
use serde_json::Value;

use crate::state::AppState;

struct ScriptedAuthority {
    status: AuthorizationStatus,
    prompt: PromptOutcome,
}

#[async_trait]
impl ContactsAuthority for ScriptedAuthority {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.status
    }

    async fn request_access(&self) -> PromptOutcome {
        self.prompt.clone()
    }
}

fn make_state(status: AuthorizationStatus, granted: bool) -> AppState {
    AppState::new(Arc::new(ScriptedAuthority {
        status,
        prompt: PromptOutcome {
            granted,
            error: None,
        },
    }))
}

#[tokio::test]
async fn e2e_permission_request_round_trips_a_grant() {
    let state = make_state(AuthorizationStatus::NotDetermined, true);

    let result = state
        .bridge()
        .dispatch(cardfile::bridge::REQUEST_CONTACTS_PERMISSION)
        .await;

    match result {
        Ok(Value::Bool(granted)) => assert!(granted),
        other => panic!("expected boolean grant, got {other:?}"),
    }
}

#[tokio::test]
async fn e2e_permission_request_round_trips_a_denial() {
    let state = make_state(AuthorizationStatus::Denied, true);

    let result = state
        .bridge()
        .dispatch(cardfile::bridge::REQUEST_CONTACTS_PERMISSION)
        .await;

    match result {
        Ok(Value::Bool(granted)) => assert!(!granted),
        other => panic!("expected boolean denial, got {other:?}"),
    }
}

#[tokio::test]
async fn e2e_unknown_method_surfaces_the_protocol_signal() {
    let state = make_state(AuthorizationStatus::Authorized, true);

    let result = state.bridge().dispatch("fetchContacts").await;

    match result {
        Err(CoreError::NotImplemented) => {}
        other => panic!("expected NotImplemented, got {other:?}"),
    }

    // The same signal the UI layer sees once it crosses the command
    // boundary as a string.
    assert_eq!(CoreError::NotImplemented.to_string(), "not implemented");
}
