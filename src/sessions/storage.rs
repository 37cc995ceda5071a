//! Session log: one `sessions.json` collection file
//!
//! Append-only: sessions are added with the next `s`-prefixed id and never
//! rewritten afterward. `save` exists for whole-collection round-trips
//! (backups, migrations), not for editing individual records.

use std::path::PathBuf;

use super::models::{Session, SessionCollection, SESSION_ID_PREFIX};
use crate::storage::{self, next_id, Result};

pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// A log backed by the given `sessions.json` path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full log. Missing file reads as empty.
    pub fn load(&self) -> Result<SessionCollection> {
        storage::read_collection(&self.path)
    }

    /// Persist the full log.
    pub fn save(&self, collection: &SessionCollection) -> Result<()> {
        storage::write_collection(&self.path, collection)
    }

    /// Append a session, assigning the next id in the `s` sequence. Returns
    /// the assigned id.
    pub fn append(&self, mut session: Session) -> Result<String> {
        let mut collection = self.load()?;

        let id = next_id(&collection.sessions, SESSION_ID_PREFIX);
        session.id = id.clone();
        collection.sessions.push(session);

        self.save(&collection)?;
        log::info!("Added session {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn create_test_log() -> (SessionLog, TempDir) {
        let temp = TempDir::new().unwrap();
        let log = SessionLog::new(temp.path().join("sessions.json"));
        (log, temp)
    }

    #[test]
    fn load_without_file_is_empty() {
        let (log, _temp) = create_test_log();
        assert!(log.load().unwrap().sessions.is_empty());
    }

    #[test]
    fn append_assigns_sequential_ids() {
        let (log, _temp) = create_test_log();

        assert_eq!(log.append(Session::new(date("2024-01-01"))).unwrap(), "s001");
        assert_eq!(log.append(Session::new(date("2024-01-02"))).unwrap(), "s002");

        let collection = log.load().unwrap();
        assert_eq!(collection.sessions.len(), 2);
        assert_eq!(collection.sessions[0].date, date("2024-01-01"));
    }

    #[test]
    fn save_load_round_trip_preserves_fields() {
        let (log, _temp) = create_test_log();

        let mut session = Session::new(date("2024-01-01"));
        session.duration_minutes = 45;
        session.planned_duration = 60;
        session.planned_start = Some("09:00".to_string());
        session.actual_start = Some("09:10".to_string());
        session.cards_reviewed = 12;
        log.append(session).unwrap();

        let collection = log.load().unwrap();
        log.save(&collection).unwrap();
        assert_eq!(log.load().unwrap(), collection);
    }
}
