use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use abone_core::{CoreError, SubscriptionStore};
use abone_domain::Subscription;

const TABLE_FILE: &str = "subscriptions.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the subscription table.
///
/// The whole table lives in a single `subscriptions.json` under the data
/// directory. Every write rewrites the file through a temp-and-rename pair
/// so a crash mid-write never leaves a truncated table behind.
#[derive(Clone)]
pub struct JsonSubscriptionStore {
    data_dir: PathBuf,
}

impl JsonSubscriptionStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn table_path(&self) -> PathBuf {
        self.data_dir.join(TABLE_FILE)
    }

    fn read_table(&self) -> Result<Vec<Subscription>, CoreError> {
        let path = self.table_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn write_table(&self, rows: &[Subscription]) -> Result<(), CoreError> {
        let serialized = serde_json::to_string_pretty(rows)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let path = self.table_path();
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &serialized)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl SubscriptionStore for JsonSubscriptionStore {
    fn insert(&self, subscription: &Subscription) -> Result<(), CoreError> {
        let mut rows = self.read_table()?;
        if rows.iter().any(|row| row.id == subscription.id) {
            return Err(CoreError::DuplicateSubscription(subscription.id.clone()));
        }
        rows.push(subscription.clone());
        self.write_table(&rows)
    }

    fn select_all(&self) -> Result<Vec<Subscription>, CoreError> {
        self.read_table()
    }

    fn update(&self, subscription: &Subscription) -> Result<(), CoreError> {
        let mut rows = self.read_table()?;
        match rows.iter_mut().find(|row| row.id == subscription.id) {
            Some(row) => *row = subscription.clone(),
            None => {
                return Err(CoreError::SubscriptionNotFound(subscription.id.clone()));
            }
        }
        self.write_table(&rows)
    }

    fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
        let mut rows = self.read_table()?;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Ok(());
        }
        self.write_table(&rows)
    }

    fn clear(&self) -> Result<(), CoreError> {
        let path = self.table_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
