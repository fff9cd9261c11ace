//! Friend Request Service - public submissions, admin moderation

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::core::error::Result;
use crate::core::handler::EventHandler;
use crate::features::auth::{require_admin, CredentialVerifier};
use crate::features::friends::dtos::FriendRequestAction;
use crate::features::friends::models::{FriendRequest, NewFriendRequest};
use crate::features::friends::store::FriendRequestStore;
use crate::shared::types::{CreatedBody, HttpEvent, HttpResponse, MessageBody, Operation};

pub struct FriendRequestService {
    store: Arc<dyn FriendRequestStore>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl FriendRequestService {
    pub fn new(store: Arc<dyn FriendRequestStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { store, verifier }
    }

    pub async fn create(&self, request: NewFriendRequest) -> Result<i32> {
        let id = self.store.insert(&request).await?;

        tracing::info!("Friend request created: id={}, name={}", id, request.name);

        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<FriendRequest>> {
        self.store.list_newest_first().await
    }

    /// Set the status on whatever row matches `id`, if any
    pub async fn update_status(&self, id: Option<&str>, status: Option<&str>) -> Result<()> {
        let affected = self.store.update_status(id, status).await?;

        tracing::info!(
            "Friend request status updated: id={:?}, status={:?}, rows={}",
            id,
            status,
            affected
        );

        Ok(())
    }

    pub async fn delete(&self, id: Option<&str>) -> Result<()> {
        let affected = self.store.delete(id).await?;

        tracing::info!("Friend request deleted: id={:?}, rows={}", id, affected);

        Ok(())
    }
}

#[async_trait]
impl EventHandler for FriendRequestService {
    fn allowed_methods(&self) -> &'static str {
        "GET, POST, PUT, DELETE, OPTIONS"
    }

    async fn route(&self, operation: Operation, event: HttpEvent) -> Result<HttpResponse> {
        // Submitting is public; everything else is moderation
        if operation != Operation::Create {
            require_admin(self.verifier.as_ref(), &event)?;
        }

        match FriendRequestAction::parse(operation, &event)? {
            FriendRequestAction::Create(request) => {
                let id = self.create(request).await?;
                HttpResponse::json(
                    StatusCode::CREATED,
                    &CreatedBody::new(id, "Friend request created"),
                )
            }
            FriendRequestAction::List => HttpResponse::json(StatusCode::OK, &self.list().await?),
            FriendRequestAction::UpdateStatus { id, status } => {
                self.update_status(id.as_deref(), status.as_deref()).await?;
                HttpResponse::json(StatusCode::OK, &MessageBody::new("Status updated"))
            }
            FriendRequestAction::Delete { id } => {
                self.delete(id.as_deref()).await?;
                HttpResponse::json(StatusCode::OK, &MessageBody::new("Request deleted"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    use crate::features::auth::SharedSecretVerifier;
    use crate::shared::test_helpers::MemoryFriendRequestStore;

    const SECRET: &str = "letmein";

    fn service() -> (FriendRequestService, Arc<MemoryFriendRequestStore>) {
        let store = Arc::new(MemoryFriendRequestStore::default());
        let verifier = Arc::new(SharedSecretVerifier::new(SECRET));
        (FriendRequestService::new(store.clone(), verifier), store)
    }

    fn admin(method: &str) -> HttpEvent {
        HttpEvent::new(method).with_header("X-Admin-Password", SECRET)
    }

    async fn submit(service: &FriendRequestService, name: &str) -> i64 {
        let response = service
            .handle(HttpEvent::new("POST").with_body(
                json!({"name": name, "description": "Let's be friends"}).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status_code, 201);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["message"], "Friend request created");
        body["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_submission_gets_default_status_and_lists_newest_first() {
        let (service, _) = service();
        submit(&service, "Older").await;
        submit(&service, "Newer").await;

        let response = service.handle(admin("GET")).await.unwrap();
        assert_eq!(response.status_code, 200);

        let rows: Vec<Value> = serde_json::from_str(&response.body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Newer");
        assert_eq!(rows[1]["name"], "Older");
        assert_eq!(rows[0]["status"], "pending");
        assert!(rows[0]["avatar_url"].is_null());
    }

    #[tokio::test]
    async fn test_missing_description_is_rejected() {
        let (service, store) = service();

        let response = service
            .handle(HttpEvent::new("POST").with_body(r#"{"name":"Solo"}"#))
            .await
            .unwrap();

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            r#"{"error":"Name and description are required"}"#
        );
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_moderation_requires_the_admin_secret() {
        let (service, store) = service();
        let id = submit(&service, "Target").await;
        let calls_after_submit = store.calls();

        let attempts = [
            HttpEvent::new("GET"),
            HttpEvent::new("GET").with_header("x-admin-password", "wrong"),
            HttpEvent::new("PUT").with_body(json!({"id": id, "status": "approved"}).to_string()),
            // body is not decoded before the gate
            HttpEvent::new("PUT").with_body("{broken"),
            HttpEvent::new("DELETE").with_query("id", id.to_string()),
        ];

        for event in attempts {
            let response = service.handle(event).await.unwrap();
            assert_eq!(response.status_code, 401);
            assert_eq!(response.body, r#"{"error":"Unauthorized"}"#);
        }

        assert_eq!(store.calls(), calls_after_submit);
        assert_eq!(store.rows()[0].status.as_deref(), Some("pending"));
    }

    #[tokio::test]
    async fn test_update_status_and_delete() {
        let (service, store) = service();
        let id = submit(&service, "Carol").await;

        let response = service
            .handle(admin("PUT").with_body(json!({"id": id, "status": "approved"}).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Status updated"}"#);
        assert_eq!(store.rows()[0].status.as_deref(), Some("approved"));

        let response = service
            .handle(admin("DELETE").with_query("id", id.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Request deleted"}"#);
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ids_still_succeed() {
        let (service, store) = service();
        submit(&service, "Dave").await;

        let response = service
            .handle(admin("PUT").with_body(r#"{"id":9999,"status":"rejected"}"#))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Status updated"}"#);

        let response = service
            .handle(admin("DELETE").with_query("id", "9999"))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Request deleted"}"#);

        let response = service.handle(admin("DELETE")).await.unwrap();
        assert_eq!(response.status_code, 200);

        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0].status.as_deref(), Some("pending"));
    }

    #[tokio::test]
    async fn test_preflight_lists_all_methods() {
        let (service, store) = service();

        let response = service.handle(HttpEvent::new("OPTIONS")).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("GET, POST, PUT, DELETE, OPTIONS")
        );
        assert_eq!(store.calls(), 0);
    }
}
