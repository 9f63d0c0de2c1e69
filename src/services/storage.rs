//! S3 storage service for exam files.
//!
//! Works against AWS S3, MinIO in development, and the S3-compatible
//! endpoint of Supabase Storage.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use secrecy::ExposeSecret;
use tracing::{debug, info};

use crate::config::StorageSettings;
use crate::error::{AppError, AppResult};

/// Object storage boundary used by the uploader.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Remove an object. A missing object is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Upload an object, replacing any existing one.
    async fn put(&self, key: &str, data: Vec<u8>, content_type: Option<&str>) -> AppResult<()>;

    /// Public URL of an object. Does not touch the network.
    fn public_url(&self, key: &str) -> String;
}

/// S3 storage client wrapper.
#[derive(Clone)]
pub struct Storage {
    client: Client,
    bucket: String,
    public_base: String,
}

impl Storage {
    /// Create a new S3 storage client from configuration.
    ///
    /// A missing bucket is created when `create_bucket` is set, otherwise
    /// it is an error.
    pub async fn new(config: &StorageSettings, create_bucket: bool) -> AppResult<Self> {
        let credentials = Credentials::new(
            &config.access_key,
            config.secret_key.expose_secret(),
            None,
            None,
            "exam-uploader",
        );

        let region = Region::new(config.region.clone());

        let mut s3_config_builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .force_path_style(true); // Required for MinIO and Supabase

        if let Some(ref endpoint) = config.endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(s3_config_builder.build());

        let storage = Self {
            client,
            bucket: config.bucket.clone(),
            public_base: Self::public_base(config),
        };

        storage.ensure_bucket_exists(create_bucket).await?;

        info!("S3 storage initialized: bucket={}", config.bucket);

        Ok(storage)
    }

    /// Base URL under which `<key>` is publicly reachable.
    ///
    /// Order of preference: explicit public URL (`<base>/<bucket>`), custom
    /// endpoint in path style, AWS virtual-hosted style.
    pub fn public_base(config: &StorageSettings) -> String {
        if let Some(ref base) = config.public_url {
            format!("{}/{}", base.trim_end_matches('/'), config.bucket)
        } else if let Some(ref endpoint) = config.endpoint {
            format!("{}/{}", endpoint.trim_end_matches('/'), config.bucket)
        } else {
            format!("https://{}.s3.{}.amazonaws.com", config.bucket, config.region)
        }
    }

    /// Ensure the bucket exists, creating it if allowed.
    async fn ensure_bucket_exists(&self, create: bool) -> AppResult<()> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                info!("S3 bucket '{}' exists", self.bucket);
                Ok(())
            }
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() && create {
                    info!("Creating S3 bucket '{}'", self.bucket);
                    self.client
                        .create_bucket()
                        .bucket(&self.bucket)
                        .send()
                        .await
                        .map_err(|e| {
                            AppError::Storage(format!("Failed to create bucket: {}", e))
                        })?;
                    info!("S3 bucket '{}' created", self.bucket);
                    Ok(())
                } else {
                    Err(AppError::Storage(format!(
                        "Failed to access bucket '{}': {}",
                        self.bucket, service_error
                    )))
                }
            }
        }
    }

    /// Get the content type for an exam file based on its extension.
    pub fn content_type_for_extension(ext: &str) -> &'static str {
        match ext.to_lowercase().as_str() {
            "pdf" => "application/pdf",
            "doc" => "application/msword",
            "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl ObjectStore for Storage {
    async fn remove(&self, key: &str) -> AppResult<()> {
        let result = self
            .client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            // S3 answers 204 for missing keys, some compatible stores answer 404
            Err(e) if e.raw_response().map(|r| r.status().as_u16()) == Some(404) => {
                debug!("Object '{}' did not exist", key);
                Ok(())
            }
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete '{}' from S3: {}",
                key,
                e.into_service_error()
            ))),
        }
    }

    async fn put(&self, key: &str, data: Vec<u8>, content_type: Option<&str>) -> AppResult<()> {
        let body = aws_sdk_s3::primitives::ByteStream::from(data);
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        request.send().await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to upload '{}' to S3: {}",
                key,
                e.into_service_error()
            ))
        })?;

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }
}
