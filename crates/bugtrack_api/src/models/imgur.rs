use serde::Deserialize;

/// Imgur wraps every response body one level under `data`.
#[derive(Debug, Deserialize, Clone)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImgurImage {
    pub link: String,
}
