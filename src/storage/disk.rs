//! on-disk preference storage
use {
    crate::{error::Result, storage::PreferenceStore},
    redb::{Database, ReadableDatabase, TableDefinition},
    std::{
        fs::create_dir_all,
        path::{Path, PathBuf},
    },
    tracing::{debug, info},
};

/// the table preferences are stored in
const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// a redb-backed store
#[derive(Debug)]
pub struct RedbStore {
    /// the database itself
    db: Database,
    /// where the database lives
    path: PathBuf,
}

impl RedbStore {
    /// open or create the store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)?;
        }

        let db = Database::create(&path)?;
        info!("opened preference store at {:?}", path);

        Ok(Self { db, path })
    }

    /// where the database lives
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for RedbStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(PREFERENCES_TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(table.get(key)?.map(|value| value.value().to_string()))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;

        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }

        write_txn.commit()?;
        debug!("stored preference {} = {}", key, value);

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;

        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.remove(key)?;
        }

        write_txn.commit()?;
        debug!("removed preference {}", key);

        Ok(())
    }
}
