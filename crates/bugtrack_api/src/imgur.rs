use crate::config::{AuthScheme, ClientConfig, IMGUR_API_BASE};
use crate::error::Result;
use crate::models::{DataEnvelope, ImgurImage};
use crate::rest::RestClient;

/// Minimal Imgur client: anonymous image uploads authenticated by a
/// registered application's client id.
#[derive(Clone)]
pub struct ImgurClient {
    rest: RestClient,
}

impl ImgurClient {
    pub fn new(client_id: &str) -> Result<Self> {
        Self::with_base_url(IMGUR_API_BASE, client_id)
    }

    pub fn with_base_url(base_url: &str, client_id: &str) -> Result<Self> {
        let config = ClientConfig::new(base_url, client_id, AuthScheme::ClientId);
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    /// Uploads PNG bytes, returning the hosted image link.
    pub async fn upload_image(&self, bytes: Vec<u8>) -> Result<ImgurImage> {
        let envelope: DataEnvelope<ImgurImage> =
            self.rest.post_bytes("image", bytes, "image/png").await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::ImgurClient;
    use crate::config::{AuthScheme, ClientConfig};
    use crate::error::TrackerError;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> ImgurClient {
        let config = ClientConfig::new(server.url(), "app1d", AuthScheme::ClientId)
            .with_pace(Duration::ZERO);
        ImgurClient::with_config(config).unwrap()
    }

    #[tokio::test]
    async fn upload_unwraps_data_envelope_and_sends_client_id() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/image")
            .match_header("authorization", "Client-ID app1d")
            .with_body(r#"{"data": {"link": "https://i.imgur.com/x1.png"}, "success": true}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let image = client.upload_image(vec![0u8; 4]).await.unwrap();
        assert_eq!(image.link, "https://i.imgur.com/x1.png");
    }

    #[tokio::test]
    async fn unauthorized_upload_maps_to_authentication_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/image")
            .with_status(401)
            .with_body(r#"{"data": {"error": "invalid client id"}, "success": false}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.upload_image(vec![0u8; 4]).await.unwrap_err();
        assert!(matches!(err, TrackerError::Authentication(_)));
    }
}
