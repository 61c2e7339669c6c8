//! Bill domain methods for the Billed API client.
//!
//! Request and response types come from `billed_core`; this module maps
//! them onto the wire endpoints and implements the `BillsStore` trait so
//! the app services can run over HTTP.

use async_trait::async_trait;
use billed_core::error::StoreError;
use billed_core::models::{Bill, BillPayload};
use billed_core::store::{BillsStore, CreateFileRequest, UploadedReceipt};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    /// Upload a receipt file and create the backing bill record.
    ///
    /// Multipart body: a `file` part carrying the receipt bytes and an
    /// `email` part with the session email.
    pub async fn create_file(&self, req: CreateFileRequest) -> Result<UploadedReceipt, StoreError> {
        let part = reqwest::multipart::Part::bytes(req.content)
            .file_name(req.file_name)
            .mime_str(&req.content_type)
            .map_err(|e| StoreError::Config(format!("Invalid content type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("email", req.email);

        self.post_multipart(&format!("{}/bills", api_prefix()), form)
            .await
    }

    /// Update the bill record created by the upload phase.
    ///
    /// A missing `bill_id` is passed through as an empty selector segment;
    /// the store answers with whatever status it sees fit.
    pub async fn update_bill(
        &self,
        payload: &BillPayload,
        bill_id: Option<&str>,
    ) -> Result<Bill, StoreError> {
        let path = format!("{}/bills/{}", api_prefix(), bill_id.unwrap_or(""));
        self.patch_json(&path, payload).await
    }

    /// List the bills of the current user.
    pub async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        self.get(&format!("{}/bills", api_prefix())).await
    }
}

#[async_trait]
impl BillsStore for ApiClient {
    async fn create_file(&self, req: CreateFileRequest) -> Result<UploadedReceipt, StoreError> {
        ApiClient::create_file(self, req).await
    }

    async fn update_bill(
        &self,
        payload: &BillPayload,
        bill_id: Option<&str>,
    ) -> Result<Bill, StoreError> {
        ApiClient::update_bill(self, payload, bill_id).await
    }

    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        ApiClient::list_bills(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Auth;
    use billed_core::models::BillStatus;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(server.url(), Auth::Bearer("test-jwt".to_string())).unwrap()
    }

    fn sample_payload() -> BillPayload {
        BillPayload {
            email: "john.doe@example.com".to_string(),
            expense_type: "Transports".to_string(),
            name: "testnameforexpense".to_string(),
            amount: json!(42),
            date: "2023-09-07".to_string(),
            vat: "12".to_string(),
            pct: json!(13),
            commentary: "Some random commentary".to_string(),
            file_url: Some("https://storage.example.com/receipts/receipt.jpg".to_string()),
            file_name: Some("receipt.jpg".to_string()),
            status: BillStatus::Pending,
        }
    }

    #[tokio::test]
    async fn create_file_posts_multipart_and_parses_the_receipt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", format!("{}/bills", api_prefix()).as_str())
            .match_header("authorization", "Bearer test-jwt")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"fileUrl":"https://storage.example.com/receipts/receipt.jpg","key":"47qAXb6fIm2zOKkLzMro"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let receipt = client
            .create_file(CreateFileRequest {
                file_name: "receipt.jpg".to_string(),
                content: b"fake image bytes".to_vec(),
                content_type: "image/jpeg".to_string(),
                email: "john.doe@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.key, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(
            receipt.file_url,
            "https://storage.example.com/receipts/receipt.jpg"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_bill_patches_the_record_by_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "PATCH",
                format!("{}/bills/47qAXb6fIm2zOKkLzMro", api_prefix()).as_str(),
            )
            .match_header("authorization", "Bearer test-jwt")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "47qAXb6fIm2zOKkLzMro",
                    "email": "john.doe@example.com",
                    "type": "Transports",
                    "name": "testnameforexpense",
                    "amount": 42,
                    "date": "2023-09-07",
                    "vat": "12",
                    "pct": 13,
                    "commentary": "Some random commentary",
                    "fileUrl": "https://storage.example.com/receipts/receipt.jpg",
                    "fileName": "receipt.jpg",
                    "status": "pending"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let bill = client
            .update_bill(&sample_payload(), Some("47qAXb6fIm2zOKkLzMro"))
            .await
            .unwrap();

        assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.status, BillStatus::Pending);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_bills_returns_the_user_bills() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", format!("{}/bills", api_prefix()).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "id": "BeKy598729423xZ",
                    "email": "a@a",
                    "type": "Restaurants et bars",
                    "name": "repas client",
                    "amount": 400,
                    "date": "2004-04-04",
                    "vat": "80",
                    "pct": 20,
                    "status": "accepted"
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let bills = client.list_bills().await.unwrap();

        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].status, BillStatus::Accepted);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_failure_maps_status_to_the_erreur_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", format!("{}/bills", api_prefix()).as_str())
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.list_bills().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 404");
    }

    #[tokio::test]
    async fn server_error_maps_to_erreur_500() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", format!("{}/bills", api_prefix()).as_str())
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.list_bills().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 500");
    }
}
