use crate::error::Result;
use crate::model::app_data::AppData;

/// Persistence boundary for the tracker aggregate.
pub trait AppDataRepository {
    /// Returns the saved aggregate, or the default one when nothing usable is stored.
    fn load(&self) -> Result<AppData>;
    /// Persists the full aggregate, replacing what was stored before.
    fn save(&self, data: &AppData) -> Result<()>;
}

impl<R: AppDataRepository + ?Sized> AppDataRepository for &R {
    fn load(&self) -> Result<AppData> {
        (**self).load()
    }

    fn save(&self, data: &AppData) -> Result<()> {
        (**self).save(data)
    }
}
