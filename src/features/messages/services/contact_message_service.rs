//! Contact Message Service

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::core::error::Result;
use crate::core::handler::EventHandler;
use crate::features::auth::{require_admin, CredentialVerifier};
use crate::features::messages::dtos::ContactMessageAction;
use crate::features::messages::models::{ContactMessage, NewContactMessage};
use crate::features::messages::store::ContactMessageStore;
use crate::shared::types::{CreatedBody, HttpEvent, HttpResponse, MessageBody, Operation};

pub struct ContactMessageService {
    store: Arc<dyn ContactMessageStore>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl ContactMessageService {
    pub fn new(store: Arc<dyn ContactMessageStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { store, verifier }
    }

    pub async fn create(&self, message: NewContactMessage) -> Result<i32> {
        let id = self.store.insert(&message).await?;

        tracing::info!(
            "Contact message received: id={}, has_email={}",
            id,
            message.email.is_some()
        );

        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        self.store.list_newest_first().await
    }

    pub async fn update_read_flag(&self, id: Option<&str>, is_read: Option<bool>) -> Result<()> {
        let affected = self.store.update_read_flag(id, is_read).await?;

        tracing::info!(
            "Contact message updated: id={:?}, is_read={:?}, rows={}",
            id,
            is_read,
            affected
        );

        Ok(())
    }

    pub async fn delete(&self, id: Option<&str>) -> Result<()> {
        let affected = self.store.delete(id).await?;

        tracing::info!("Contact message deleted: id={:?}, rows={}", id, affected);

        Ok(())
    }
}

#[async_trait]
impl EventHandler for ContactMessageService {
    fn allowed_methods(&self) -> &'static str {
        "GET, POST, PUT, DELETE, OPTIONS"
    }

    async fn route(&self, operation: Operation, event: HttpEvent) -> Result<HttpResponse> {
        if operation != Operation::Create {
            require_admin(self.verifier.as_ref(), &event)?;
        }

        match ContactMessageAction::parse(operation, &event)? {
            ContactMessageAction::Create(message) => {
                let id = self.create(message).await?;
                HttpResponse::json(
                    StatusCode::CREATED,
                    &CreatedBody::new(id, "Message sent successfully"),
                )
            }
            ContactMessageAction::List => HttpResponse::json(StatusCode::OK, &self.list().await?),
            ContactMessageAction::UpdateReadFlag { id, is_read } => {
                self.update_read_flag(id.as_deref(), is_read).await?;
                HttpResponse::json(StatusCode::OK, &MessageBody::new("Message updated"))
            }
            ContactMessageAction::Delete { id } => {
                self.delete(id.as_deref()).await?;
                HttpResponse::json(StatusCode::OK, &MessageBody::new("Message deleted"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use serde_json::{json, Value};
    use tokio_test::assert_ok;

    use crate::features::auth::SharedSecretVerifier;
    use crate::shared::test_helpers::MemoryContactMessageStore;

    const SECRET: &str = "inbox-secret";

    fn service() -> (ContactMessageService, Arc<MemoryContactMessageStore>) {
        let store = Arc::new(MemoryContactMessageStore::default());
        let verifier = Arc::new(SharedSecretVerifier::new(SECRET));
        (ContactMessageService::new(store.clone(), verifier), store)
    }

    fn admin(method: &str) -> HttpEvent {
        HttpEvent::new(method).with_header("x-admin-password", SECRET)
    }

    #[tokio::test]
    async fn test_post_then_unauthorized_list() {
        let (service, store) = service();

        let created = assert_ok!(
            service
                .handle(HttpEvent::new("POST").with_body(r#"{"name":"A","message":"hi"}"#))
                .await
        );
        assert_eq!(created.status_code, 201);
        let body: Value = serde_json::from_str(&created.body).unwrap();
        assert!(body["id"].is_i64());
        assert_eq!(body["message"], "Message sent successfully");

        let calls = store.calls();
        let listed = assert_ok!(service.handle(HttpEvent::new("GET")).await);
        assert_eq!(listed.status_code, 401);
        assert_eq!(store.calls(), calls);
    }

    #[tokio::test]
    async fn test_admin_list_is_newest_first_and_unread() {
        let (service, _) = service();
        let email: String = SafeEmail().fake();

        for name in ["first", "second"] {
            let body = json!({"name": name, "email": email, "message": "hello"});
            service
                .handle(HttpEvent::new("POST").with_body(body.to_string()))
                .await
                .unwrap();
        }

        let listed = service.handle(admin("GET")).await.unwrap();
        assert_eq!(listed.status_code, 200);

        let rows: Vec<Value> = serde_json::from_str(&listed.body).unwrap();
        assert_eq!(rows[0]["name"], "second");
        assert_eq!(rows[1]["name"], "first");
        assert_eq!(rows[0]["email"], email.as_str());
        assert_eq!(rows[0]["is_read"], false);
        assert!(rows[0]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected() {
        let (service, store) = service();
        let email: String = SafeEmail().fake();

        let response = service
            .handle(
                HttpEvent::new("POST")
                    .with_body(json!({"email": email, "message": "hi"}).to_string()),
            )
            .await
            .unwrap();

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"Name and message are required"}"#);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_mark_read_and_delete() {
        let (service, store) = service();
        let name: String = Name().fake();
        service
            .handle(
                HttpEvent::new("POST")
                    .with_body(json!({"name": name, "message": "ping"}).to_string()),
            )
            .await
            .unwrap();
        let id = store.rows()[0].id;

        let response = service
            .handle(admin("PUT").with_body(json!({"id": id, "is_read": true}).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Message updated"}"#);
        assert_eq!(store.rows()[0].is_read, Some(true));

        let response = service
            .handle(admin("DELETE").with_query("id", id.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Message deleted"}"#);
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_secret_never_mutates() {
        let (service, store) = service();
        service
            .handle(HttpEvent::new("POST").with_body(r#"{"name":"B","message":"keep me"}"#))
            .await
            .unwrap();
        let id = store.rows()[0].id;
        let calls = store.calls();

        let update = HttpEvent::new("PUT")
            .with_header("X-Admin-Password", "guess")
            .with_body(json!({"id": id, "is_read": true}).to_string());
        let delete = HttpEvent::new("DELETE")
            .with_header("X-Admin-Password", "guess")
            .with_query("id", id.to_string());

        for event in [update, delete] {
            let response = service.handle(event).await.unwrap();
            assert_eq!(response.status_code, 401);
        }

        assert_eq!(store.calls(), calls);
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.rows()[0].is_read, Some(false));
    }

    #[tokio::test]
    async fn test_unknown_id_update_succeeds() {
        let (service, _) = service();

        let response = service
            .handle(admin("PUT").with_body(r#"{"id":"404","is_read":true}"#))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Message updated"}"#);
    }
}
