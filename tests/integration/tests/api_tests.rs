//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (with migrations applied)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return the session
async fn register_user(server: &TestServer) -> (RegisterRequest, SessionResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, session)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(session.user.email, request.email);
    assert_eq!(session.user.name, request.name);
    assert!(!session.access_token.is_empty());
    assert!(!session.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(session.user.email, register_req.email);
    assert!(!session.access_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest {
        email: register_req.email,
        password: "WrongPass999".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_current_user_without_session_is_null() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/auth/me").await.unwrap();

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_current_user_with_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, session) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/auth/me", &session.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.email, register_req.email);
    assert_eq!(user.id, session.user.id);
}

#[tokio::test]
async fn test_current_user_with_garbage_token_is_null() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/auth/me", "not-a-real-token")
        .await
        .unwrap();

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_logout_revokes_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = register_user(&server).await;

    let body = serde_json::json!({ "refresh_token": session.refresh_token });
    let response = server
        .post_auth("/api/v1/auth/logout", &session.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // The refresh token must no longer be exchangeable
    let refresh_body = serde_json::json!({ "refresh_token": session.refresh_token });
    let response = server
        .post("/api/v1/auth/refresh", &refresh_body)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_twice_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = register_user(&server).await;

    let body = serde_json::json!({ "refresh_token": session.refresh_token });
    let response = server
        .post_auth("/api/v1/auth/logout", &session.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // Second logout finds no active session
    let response = server
        .post_auth("/api/v1/auth/logout", &session.access_token, &body)
        .await
        .unwrap();
    assert!(response.status().is_client_error() || response.status().is_server_error());
}

#[tokio::test]
async fn test_refresh_rotates_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = register_user(&server).await;

    let body = serde_json::json!({ "refresh_token": session.refresh_token });
    let response = server.post("/api/v1/auth/refresh", &body).await.unwrap();
    let new_session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!new_session.access_token.is_empty());

    // The old refresh token was revoked by the rotation
    let response = server.post("/api/v1/auth/refresh", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Roster Tests
// ============================================================================

#[tokio::test]
async fn test_list_users_excludes_caller() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/users", &alice.access_token)
        .await
        .unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(users.iter().all(|u| u.id != alice.user.id));
    assert!(users.iter().any(|u| u.id == bob.user.id));
}

#[tokio::test]
async fn test_get_user_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (bob_req, bob) = register_user(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.name, bob_req.name);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/users/1", &alice.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_guarded_route_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_create_chat_is_idempotent_and_order_independent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    // Alice opens a chat with Bob
    let request = CreateChatRequest {
        recipient_id: bob.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    let chat: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Bob opens a chat with Alice: same chat comes back
    let request = CreateChatRequest {
        recipient_id: alice.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &bob.access_token, &request)
        .await
        .unwrap();
    let same_chat: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(chat.id, same_chat.id);
}

#[tokio::test]
async fn test_self_chat_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let request = CreateChatRequest {
        recipient_id: alice.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_chat_with_unknown_recipient_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let request = CreateChatRequest {
        recipient_id: "1".to_string(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_chats_returns_only_own_chats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;
    let (_, carol) = register_user(&server).await;

    // Alice <-> Bob, Bob <-> Carol
    let request = CreateChatRequest {
        recipient_id: bob.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    let alice_bob: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let request = CreateChatRequest {
        recipient_id: carol.user.id.clone(),
    };
    server
        .post_auth("/api/v1/chats", &bob.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/chats", &alice.access_token)
        .await
        .unwrap();
    let chats: Vec<ChatResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, alice_bob.id);

    let response = server
        .get_auth("/api/v1/chats", &bob.access_token)
        .await
        .unwrap();
    let chats: Vec<ChatResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(chats.len(), 2);
}

#[tokio::test]
async fn test_chat_summaries_carry_participant_names() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice_req, alice) = register_user(&server).await;
    let (bob_req, bob) = register_user(&server).await;

    let request = CreateChatRequest {
        recipient_id: bob.user.id.clone(),
    };
    server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/chats/summaries", &alice.access_token)
        .await
        .unwrap();
    let summaries: Vec<ChatSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(summaries.len(), 1);
    let names = [&summaries[0].user1_name, &summaries[0].user2_name];
    assert!(names.contains(&&alice_req.name));
    assert!(names.contains(&&bob_req.name));
    let emails = [&summaries[0].user1_email, &summaries[0].user2_email];
    assert!(emails.contains(&&alice_req.email));
    assert!(emails.contains(&&bob_req.email));
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_send_and_list_messages_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    let request = CreateChatRequest {
        recipient_id: bob.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    let chat: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();

    for content in ["hi", "yo"] {
        let body = SendMessageRequest {
            content: content.to_string(),
        };
        let response = server
            .post_auth(
                &format!("/api/v1/chats/{}/messages", chat.id),
                &alice.access_token,
                &body,
            )
            .await
            .unwrap();
        assert_json::<MessageResponse>(response, StatusCode::CREATED)
            .await
            .unwrap();
    }

    let response = server
        .get_auth(
            &format!("/api/v1/chats/{}/messages", chat.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["yo", "hi"]);
}

#[tokio::test]
async fn test_send_message_to_unknown_chat_fails() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let body = SendMessageRequest {
        content: "hello?".to_string(),
    };
    let response = server
        .post_auth("/api/v1/chats/1/messages", &alice.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_send_message_by_outsider_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;
    let (_, carol) = register_user(&server).await;

    let request = CreateChatRequest {
        recipient_id: bob.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    let chat: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let body = SendMessageRequest {
        content: "let me in".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/chats/{}/messages", chat.id),
            &carol.access_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    let request = CreateChatRequest {
        recipient_id: bob.user.id.clone(),
    };
    let response = server
        .post_auth("/api/v1/chats", &alice.access_token, &request)
        .await
        .unwrap();
    let chat: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let body = SendMessageRequest {
        content: "oops".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/chats/{}/messages", chat.id),
            &alice.access_token,
            &body,
        )
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/messages/{}", message.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // The listing no longer contains it
    let response = server
        .get_auth(
            &format!("/api/v1/chats/{}/messages", chat.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages.iter().all(|m| m.id != message.id));

    // Deleting it again fails
    let response = server
        .delete_auth(
            &format!("/api/v1/messages/{}", message.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
