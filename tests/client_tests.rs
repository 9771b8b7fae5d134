//! End-to-end tests driving a live server through the API client and the
//! CLI session commands.

use catnip::clients::{CatnipClient, ClientError, Session, SessionStore, build_http_client};
use catnip::config::Config;
use catnip::models::UserData;

fn test_config(secret: &str) -> Config {
    let mut config = Config::default();
    config.auth.token_secret = Some(secret.to_string());
    config.observability.metrics_enabled = false;
    config
}

/// Serves a fresh app on an ephemeral port and returns its base URL.
async fn spawn_server(secret: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    let state = catnip::api::create_app_state_from_config(test_config(secret), None)
        .expect("Failed to create app state");
    let app = catnip::api::router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn client(server_url: &str) -> CatnipClient {
    CatnipClient::new(build_http_client(5).unwrap(), server_url).unwrap()
}

fn cli_config(server_url: &str) -> (Config, SessionStore) {
    let session_path = std::env::temp_dir()
        .join(format!("catnip-client-test-{}", uuid::Uuid::new_v4()))
        .join("session.toml");

    let mut config = Config::default();
    config.client.server_url = server_url.to_string();
    config.client.session_path = Some(session_path.display().to_string());
    config.client.request_timeout_seconds = 5;

    let store = SessionStore::from_config(&config.client).unwrap();
    (config, store)
}

#[tokio::test]
async fn test_client_login_list_and_create() {
    let server = spawn_server("client-secret").await;
    let api = client(&server);

    let login = api.login("tariq", "1122").await.unwrap();
    assert_eq!(login.user_data.id, 2);
    assert_eq!(login.user_data.username, "tariq");

    let again = api.login("tariq", "1122").await.unwrap();
    assert_eq!(again.token, login.token);

    let facts = api.list_facts().await.unwrap();
    assert_eq!(facts.len(), 7);

    let message = api.create_fact(&login.token, "Cats have 32 muscles in each ear").await.unwrap();
    assert_eq!(message.message, "New fact created successfully");

    let facts = api.list_facts().await.unwrap();
    let created = facts.last().unwrap();
    assert_eq!(created.fact_id, 8);
    assert_eq!(created.owner, "tariq");
    assert_eq!(created.cat_fact, "Cats have 32 muscles in each ear");
}

#[tokio::test]
async fn test_client_surfaces_server_errors() {
    let server = spawn_server("client-secret").await;
    let api = client(&server);

    match api.login("tariq", "nope").await {
        Err(ClientError::Unauthorized(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected unauthorized, got {other:?}"),
    }

    match api.create_fact("bogus", "Cats").await {
        Err(ClientError::Unauthorized(message)) => assert_eq!(message, "Invalid token"),
        other => panic!("expected unauthorized, got {other:?}"),
    }

    let token = api.login("hassan", "1122").await.unwrap().token;
    match api.create_fact(&token, "  ").await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert!(!message.is_empty());
        }
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cli_login_create_logout() {
    let server = spawn_server("cli-secret").await;
    let (config, store) = cli_config(&server);

    catnip::cli::cmd_login(&config, "hassan", "1122").await.unwrap();

    let session = store.load().unwrap().expect("session saved after login");
    assert_eq!(session.user.username, "hassan");
    assert_eq!(session.token.len(), 64);

    catnip::cli::cmd_create_fact(&config, "Cats can rotate their ears 180 degrees")
        .await
        .unwrap();

    let facts = client(&server).list_facts().await.unwrap();
    assert_eq!(facts.last().unwrap().owner, "hassan");

    catnip::cli::cmd_list_facts(&config, true).await.unwrap();

    catnip::cli::cmd_logout(&config).unwrap();
    assert!(store.load().unwrap().is_none());

    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}

#[tokio::test]
async fn test_cli_failed_login_keeps_no_session() {
    let server = spawn_server("cli-secret").await;
    let (config, store) = cli_config(&server);

    let err = catnip::cli::cmd_login(&config, "hassan", "wrong")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid credentials"), "{err}");
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_cli_unauthorized_create_clears_session() {
    let server = spawn_server("cli-secret").await;
    let (config, store) = cli_config(&server);

    // A token the server never issued, e.g. from before a restart.
    store
        .save(&Session {
            server_url: server.clone(),
            token: "stale-token".to_string(),
            user: UserData {
                id: 1,
                username: "hassan".to_string(),
            },
        })
        .unwrap();

    let err = catnip::cli::cmd_create_fact(&config, "Cats").await.unwrap_err();
    assert!(err.to_string().contains("Invalid token"), "{err}");

    assert!(store.load().unwrap().is_none());
    assert_eq!(client(&server).list_facts().await.unwrap().len(), 7);

    let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
}

#[tokio::test]
async fn test_cli_create_without_session_fails() {
    let server = spawn_server("cli-secret").await;
    let (config, store) = cli_config(&server);

    assert!(store.load().unwrap().is_none());
    assert!(catnip::cli::cmd_create_fact(&config, "Cats").await.is_err());
    assert!(catnip::cli::cmd_list_facts(&config, true).await.is_err());

    assert_eq!(client(&server).list_facts().await.unwrap().len(), 7);
}
