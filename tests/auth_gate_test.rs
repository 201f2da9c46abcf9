use bus_booking_system::client::auth_gate::{AuthForm, AuthGate, AuthGateError, AuthMode, AuthOutcome};

use std::time::Duration;
use tokio::net::TcpListener;

mod common {
    pub mod test_utils;
}
use common::test_utils::spawn_server;

fn form(password: &str, confirm_password: &str) -> AuthForm {
    AuthForm {
        full_name: "Meera Shah".to_string(),
        email: "meera@example.com".to_string(),
        phone: "9000012345".to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    }
}

#[tokio::test]
async fn test_register_mismatch_never_contacts_endpoint() {
    // Nothing listens on the discard port; reaching it would surface as Network
    let gate = AuthGate::new("http://127.0.0.1:9").expect("client");
    let details = form("a", "b");

    assert!(details.password_mismatch());

    let result = gate.submit(AuthMode::Register, &details).await;

    assert_eq!(result, Err(AuthGateError::PasswordMismatch));
    assert!(!gate.is_in_flight());
}

#[test]
fn test_mismatch_flag_waits_for_confirmation() {
    assert!(!form("secret", "").password_mismatch());
    assert!(!form("secret", "secret").password_mismatch());
    assert!(form("secret", "secre").password_mismatch());
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_network_error() {
    let gate = AuthGate::new("http://127.0.0.1:9/").expect("client");

    let result = gate.submit(AuthMode::SignIn, &form("secret", "")).await;

    assert!(matches!(result, Err(AuthGateError::Network(_))));
    assert!(!gate.is_in_flight());
}

#[tokio::test]
async fn test_second_submit_rejected_while_first_pending() {
    // Accepts connections and never answers, so the first request stays pending
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let silent = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let gate = AuthGate::new(format!("http://{}", addr)).expect("client");
    let details = form("secret", "");

    let mut first = Box::pin(gate.submit(AuthMode::SignIn, &details));
    tokio::select! {
        result = &mut first => panic!("request should stay pending, got {:?}", result),
        _ = tokio::time::sleep(Duration::from_millis(200)) => {}
    }
    assert!(gate.is_in_flight());

    let second = gate.submit(AuthMode::SignIn, &details).await;
    assert_eq!(second, Err(AuthGateError::InFlight));
    assert!(gate.is_in_flight());

    // Abandoning the pending request frees the gate
    drop(first);
    assert!(!gate.is_in_flight());

    silent.abort();
}

#[tokio::test]
async fn test_register_then_sign_in_against_server() {
    let base_url = spawn_server(18734).await;
    let gate = AuthGate::new(base_url).expect("client");
    let details = form("pass-1234", "pass-1234");

    let registered = gate.submit(AuthMode::Register, &details).await;
    assert_eq!(registered, Ok(AuthOutcome::Registered));

    // Same email again: the server's message comes back verbatim
    let duplicate = gate.submit(AuthMode::Register, &details).await;
    assert_eq!(
        duplicate,
        Err(AuthGateError::Rejected("Conflict: Email already exists".to_string()))
    );

    let signed_in = gate.submit(AuthMode::SignIn, &details).await;
    match signed_in {
        Ok(AuthOutcome::SignedIn(identity)) => {
            assert_eq!(identity.name, "Meera Shah");
            assert_eq!(identity.email, "meera@example.com");
            assert!(!identity.token.is_empty());
        }
        other => panic!("expected sign-in, got {:?}", other),
    }

    let wrong = gate.submit(AuthMode::SignIn, &form("wrong", "")).await;
    assert_eq!(
        wrong,
        Err(AuthGateError::Rejected(
            "Authentication error: Invalid credentials".to_string()
        ))
    );
}
