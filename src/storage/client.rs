//! Object-storage client trait and S3 implementation.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::StorageConfig;
use crate::error::{Error, Result};

/// Seam over the object store so upload logic stays testable without a bucket.
#[async_trait]
pub trait ObjectStore {
    /// Upload a single local file to `bucket/key`.
    async fn put_file(&self, local_path: &Path, key: &str) -> Result<()>;

    /// Upload an in-memory buffer to `bucket/key`.
    async fn put_bytes(&self, key: &str, data: Vec<u8>) -> Result<()>;

    /// Target bucket name, for log lines.
    fn bucket(&self) -> &str;
}

/// S3-backed implementation using the AWS SDK.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a client from an explicitly constructed [`StorageConfig`].
    ///
    /// Explicit keys in the config take precedence; otherwise the SDK's
    /// default environment chain resolves credentials.
    pub async fn connect(storage: &StorageConfig) -> Result<Self> {
        let bucket = storage
            .bucket
            .clone()
            .ok_or_else(|| Error::MissingConfig("storage.bucket (or S3_BUCKET_NAME)".into()))?;

        let mut loader = aws_config::ConfigLoader::default();

        if let (Some(key_id), Some(secret)) =
            (&storage.access_key_id, &storage.secret_access_key)
        {
            loader = loader.credentials_provider(aws_sdk_s3::config::Credentials::new(
                key_id.clone(),
                secret.clone(),
                None,
                None,
                "dataset-prep-config",
            ));
        }

        if let Some(region) = &storage.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }

        if let Some(endpoint) = &storage.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }

        let conf = loader.load().await;
        let client = Client::new(&conf);

        Ok(Self { client, bucket })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_file(&self, local_path: &Path, key: &str) -> Result<()> {
        let body = ByteStream::from_path(local_path).await.map_err(|e| {
            Error::Upload {
                key: key.to_string(),
                message: format!("cannot read {}: {}", local_path.display(), e),
            }
        })?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    async fn put_bytes(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(data.into())
            .send()
            .await
            .map_err(|e| Error::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
