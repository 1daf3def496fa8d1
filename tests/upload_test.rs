//! Integration tests for upload key construction and the bulk walk,
//! using a recording in-memory store instead of a live bucket.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use dataset_prep::error::{Error, Result};
use dataset_prep::storage::{upload_dir, upload_file, ObjectStore};

/// Records keys instead of talking to a bucket; keys listed in
/// `fail_keys` return an upload error.
#[derive(Default)]
struct RecordingStore {
    keys: Mutex<Vec<String>>,
    fail_keys: Vec<String>,
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_file(&self, _local_path: &Path, key: &str) -> Result<()> {
        if self.fail_keys.iter().any(|k| k == key) {
            return Err(Error::Upload {
                key: key.to_string(),
                message: "simulated failure".to_string(),
            });
        }
        self.keys.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn put_bytes(&self, key: &str, _data: Vec<u8>) -> Result<()> {
        self.keys.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn bucket(&self) -> &str {
        "test-bucket"
    }
}

#[tokio::test]
async fn test_upload_dir_preserves_relative_paths() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("train/a")).unwrap();
    fs::write(tmp.path().join("train/a/cat.png"), b"x").unwrap();
    fs::write(tmp.path().join("train/a/cat.txt"), b"x").unwrap();
    fs::write(tmp.path().join("train/dog.png"), b"x").unwrap();

    let store = RecordingStore::default();
    let stats = upload_dir(&store, &tmp.path().join("train"), "lineart")
        .await
        .unwrap();

    assert_eq!(stats.uploaded, 3);
    assert_eq!(stats.failed, 0);

    let mut keys = store.keys.lock().unwrap().clone();
    keys.sort();
    assert_eq!(
        keys,
        vec!["lineart/a/cat.png", "lineart/a/cat.txt", "lineart/dog.png"]
    );
}

#[tokio::test]
async fn test_upload_dir_continues_past_failures() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("good.png"), b"x").unwrap();
    fs::write(tmp.path().join("bad.png"), b"x").unwrap();

    let store = RecordingStore {
        fail_keys: vec!["data/bad.png".to_string()],
        ..Default::default()
    };
    let stats = upload_dir(&store, tmp.path(), "data").await.unwrap();

    assert_eq!(stats.uploaded, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(*store.keys.lock().unwrap(), vec!["data/good.png"]);
}

#[tokio::test]
async fn test_upload_dir_rejects_non_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("single.png");
    fs::write(&file, b"x").unwrap();

    let store = RecordingStore::default();
    let result = upload_dir(&store, &file, "data").await;
    assert!(matches!(result, Err(Error::NotADirectory(_))));
}

#[tokio::test]
async fn test_upload_file_requires_existing_file() {
    let tmp = tempfile::tempdir().unwrap();

    let store = RecordingStore::default();
    let result = upload_file(&store, &tmp.path().join("gone.png"), "key").await;
    assert!(matches!(result, Err(Error::FileNotFound(_))));
}

#[tokio::test]
async fn test_upload_single_file() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("model.safetensors");
    fs::write(&file, b"weights").unwrap();

    let store = RecordingStore::default();
    upload_file(&store, &file, "checkpoints/model.safetensors")
        .await
        .unwrap();

    assert_eq!(
        *store.keys.lock().unwrap(),
        vec!["checkpoints/model.safetensors"]
    );
}

#[tokio::test]
async fn test_put_bytes_records_key() {
    let store = RecordingStore::default();
    store
        .put_bytes("manifests/run.json", b"{}".to_vec())
        .await
        .unwrap();
    assert_eq!(*store.keys.lock().unwrap(), vec!["manifests/run.json"]);
}
