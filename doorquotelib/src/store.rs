//! Хранилище записей о дверях: create / list / delete / delete_all.
//!
//! Ядро хранилище не вызывает; им пользуется слой оркестрации (CLI).

use crate::{
    error::{QuoteError, Result},
    formats::csv::Csv,
    model::{DoorEntry, NewDoorEntry},
    traits::{ReadEntries, WriteEntries},
};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub trait EntryStore {
    /// Назначает id, округляет размеры, считает площадь и сохраняет запись.
    fn create(&mut self, new: NewDoorEntry) -> Result<DoorEntry>;

    /// Записи в порядке добавления.
    fn list(&self) -> Result<Vec<DoorEntry>>;

    fn delete(&mut self, id: u64) -> Result<()>;

    fn delete_all(&mut self) -> Result<()>;
}

/// Записи в памяти. Id растут с 1 и не переиспользуются, пока живёт хранилище.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    entries: Vec<DoorEntry>,
    next_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Восстановить из ранее сохранённых записей.
    pub fn from_entries(entries: Vec<DoorEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore for InMemoryStore {
    fn create(&mut self, new: NewDoorEntry) -> Result<DoorEntry> {
        let entry = DoorEntry::create(self.next_id, new);
        self.next_id += 1;
        debug!(id = entry.id, rounded = %entry.rounded, square_feet = %entry.square_feet, "door entry created");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<DoorEntry>> {
        Ok(self.entries.clone())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(QuoteError::NotFound(id))?;
        self.entries.remove(pos);
        debug!(id, "door entry deleted");
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        debug!(count = self.entries.len(), "all door entries deleted");
        self.entries.clear();
        Ok(())
    }
}

/// Записи в CSV-файле; файл переписывается после каждого изменения.
#[derive(Debug)]
pub struct CsvFileStore {
    path: PathBuf,
    inner: InMemoryStore,
}

impl CsvFileStore {
    /// Открыть файл; отсутствующий файл — пустое хранилище.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match File::open(&path) {
            Ok(f) => Csv::read(BufReader::new(f))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        info!(path = %path.display(), entries = entries.len(), "entry store opened");
        Ok(Self {
            path,
            inner: InMemoryStore::from_entries(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let mut w = BufWriter::new(File::create(&self.path)?);
        Csv::write(&mut w, &self.inner.entries)?;
        w.flush()?;
        info!(path = %self.path.display(), entries = self.inner.entries.len(), "entry store saved");
        Ok(())
    }
}

impl EntryStore for CsvFileStore {
    fn create(&mut self, new: NewDoorEntry) -> Result<DoorEntry> {
        let entry = self.inner.create(new)?;
        self.save()?;
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<DoorEntry>> {
        self.inner.list()
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        self.inner.delete(id)?;
        self.save()
    }

    fn delete_all(&mut self) -> Result<()> {
        self.inner.delete_all()?;
        self.save()
    }
}
