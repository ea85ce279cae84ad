use crate::errors::AppResult;
use crate::models::record::StudyRecord;
use crate::store::StudyStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record at `position` (1-based) and return it.
    pub fn apply(store: &mut StudyStore, position: usize) -> AppResult<StudyRecord> {
        store.delete(position)
    }
}
