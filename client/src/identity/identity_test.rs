use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// Provider that accepts one password and counts sign-outs.
#[derive(Default)]
struct FakeProvider {
    sign_outs: AtomicUsize,
}

fn user(email: &str) -> User {
    User { uid: format!("uid-{email}"), email: Some(email.to_owned()), display_name: None, id_token: None }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ClientError> {
        if password == "secret1" {
            Ok(user(email))
        } else {
            Err(ClientError::Auth("Incorrect email or password.".into()))
        }
    }

    async fn register(&self, email: &str, _password: &str) -> Result<User, ClientError> {
        Ok(user(email))
    }

    async fn sign_out(&self) -> Result<(), ClientError> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn starts_unknown() {
    let identity = Identity::new(Arc::new(FakeProvider::default()));
    assert_eq!(identity.status(), AuthStatus::Unknown);
}

#[test]
fn restore_publishes_to_subscribers() {
    let identity = Identity::new(Arc::new(FakeProvider::default()));
    let mut rx = identity.subscribe();
    identity.restore(None);
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), AuthStatus::Unauthenticated);

    identity.restore(Some(user("a@b.com")));
    assert!(rx.borrow().is_authenticated());
}

#[tokio::test]
async fn sign_in_then_out() {
    let provider = Arc::new(FakeProvider::default());
    let identity = Identity::new(provider.clone());

    let signed_in = identity.sign_in("a@b.com", "secret1").await.unwrap();
    assert_eq!(identity.status(), AuthStatus::Authenticated(signed_in));

    identity.sign_out().await.unwrap();
    assert_eq!(identity.status(), AuthStatus::Unauthenticated);
    assert_eq!(provider.sign_outs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_sign_in_keeps_status() {
    let identity = Identity::new(Arc::new(FakeProvider::default()));
    identity.restore(None);
    let err = identity.sign_in("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect email or password.");
    assert_eq!(identity.status(), AuthStatus::Unauthenticated);
}

#[tokio::test]
async fn register_signs_in() {
    let identity = Identity::new(Arc::new(FakeProvider::default()));
    let user = identity.register("new@b.com", "whatever").await.unwrap();
    assert_eq!(identity.status().user(), Some(&user));
}
