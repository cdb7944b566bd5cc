use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
    pin::Pin,
    sync::Arc,
};

use tokio::{fs, sync::Mutex};

use crate::{
    models::Booking,
    store::interface::{StoreClient, StoreError},
};

/// [`StoreClient`] backed by a single JSON file.
///
/// The whole collection lives as one pretty-printed JSON array on disk. Every
/// insert re-reads the file, checks for a slot collision, appends, and
/// replaces the file atomically via a sibling temp file and rename. The whole
/// read-check-write span runs under a single-writer lock, so concurrent
/// inserts for the same slot serialize and the second one fails.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store at the given file path, creating the parent directory if
    /// it does not exist. The file itself is only created on first insert; a
    /// missing file reads as an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(Self {
            inner: Arc::new(Inner {
                path,
                write_lock: Mutex::new(()),
            }),
        })
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}

impl Inner {
    async fn read_all(&self) -> Result<Vec<Booking>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the backing file with the given collection. Writes to a
    /// sibling temp file and renames it into place so readers never observe a
    /// torn document.
    async fn write_all(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(bookings)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl StoreClient for JsonFileStore {
    fn list_bookings(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Booking>, StoreError>> + Send + '_>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move { inner.read_all().await })
    }

    fn insert_booking<'b>(
        &self,
        booking: &'b Booking,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'b>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            let _guard = inner.write_lock.lock().await;
            let mut bookings = inner.read_all().await?;
            if bookings
                .iter()
                .any(|existing| existing.occupies(&booking.date, &booking.time))
            {
                return Err(StoreError::SlotTaken);
            }
            bookings.push(booking.clone());
            inner.write_all(&bookings).await
        })
    }
}
