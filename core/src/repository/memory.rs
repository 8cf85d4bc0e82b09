use std::cell::RefCell;

use crate::error::Result;
use crate::model::app_data::AppData;
use crate::repository::traits::AppDataRepository;

/// Keeps the aggregate in memory. Used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct InMemoryAppDataRepository {
    data: RefCell<AppData>,
    saves: RefCell<usize>,
}

impl InMemoryAppDataRepository {
    pub fn new(data: AppData) -> Self {
        Self {
            data: RefCell::new(data),
            saves: RefCell::new(0),
        }
    }

    pub fn snapshot(&self) -> AppData {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl AppDataRepository for InMemoryAppDataRepository {
    fn load(&self) -> Result<AppData> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, data: &AppData) -> Result<()> {
        *self.data.borrow_mut() = data.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
