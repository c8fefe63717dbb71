// oxy-client/tests/session_integration.rs
// Session and resource services against the mock backend

mod common;

use oxy_client::{
    Access, AdminApi, ChamberApi, ClientError, Role, RouteTable, Session, TokenStore,
};
use shared::models::CustomerCreate;
use tempfile::TempDir;

#[tokio::test]
async fn test_login_restore_logout() {
    let backend = common::spawn().await;
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("nested").join("token.json");

    let mut session = Session::new(backend.client(), TokenStore::new(&token_path));
    let user = session.login("e7@oxy.example", "secret").await.unwrap();
    assert_eq!(user.role(), Some(Role::Engineer));
    assert!(token_path.exists());

    // Fresh process: nested role from /auth/me
    let mut restored = Session::init(backend.client(), TokenStore::new(&token_path)).await;
    assert_eq!(restored.role(), Some(Role::Engineer));
    assert_eq!(
        restored.auth().token().as_deref(),
        Some(common::GOOD_TOKEN)
    );

    let routes = RouteTable::standard();
    assert_eq!(
        routes.check_session(&restored, "/engineer/my-issues"),
        Access::Allow
    );
    assert_eq!(
        routes.check_session(&restored, "/admin/users"),
        Access::Redirect("/engineer")
    );

    restored.logout().unwrap();
    assert!(!token_path.exists());
    assert_eq!(routes.check_session(&restored, "/engineer"), Access::Redirect("/login"));
}

#[tokio::test]
async fn test_rejected_login_surfaces_backend_message() {
    let backend = common::spawn().await;
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().join("token.json"));

    let mut session = Session::new(backend.client(), store);
    let err = session.login("e7@oxy.example", "nope").await.unwrap_err();
    match err {
        ClientError::Unauthorized(message) => assert_eq!(message, "Invalid credentials"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_restore_with_rejected_token_clears_it() {
    let backend = common::spawn().await;
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().join("token.json"));
    store.save("expired").unwrap();

    let session = Session::init(backend.client(), TokenStore::new(store.path())).await;
    assert!(!session.is_authenticated());
    assert!(session.auth().token().is_none());
    assert!(!store.exists());
}

#[tokio::test]
async fn test_backend_error_message_is_kept() {
    let backend = common::spawn().await;
    let client = backend.client();

    let chamber = client.chamber(3).await.unwrap();
    assert_eq!(chamber.serial_number, "OX-3");

    match client.chamber(99).await.unwrap_err() {
        ClientError::Forbidden(message) => assert_eq!(message, "Chamber not assigned to you"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_customer_crud() {
    let backend = common::spawn().await;
    let client = backend.client();

    // Required field missing: nothing reaches the backend
    let err = client
        .create_customer(&CustomerCreate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.to_string(), "name is required");
    assert!(backend.received().customers.is_empty());

    let created = client
        .create_customer(&CustomerCreate {
            name: "North Clinic".into(),
            contact_email: Some("ops@north.example".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "North Clinic");

    let listed = client.customers().await.unwrap();
    assert_eq!(listed.len(), 1);

    client.delete_customer(created.id).await.unwrap();
    assert!(client.customers().await.unwrap().is_empty());
    assert!(matches!(
        client.delete_customer(created.id).await,
        Err(ClientError::NotFound(_))
    ));
}
