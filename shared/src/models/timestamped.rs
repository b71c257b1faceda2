//! Creation / modification bookkeeping shared by every persisted entity

/// Records when an entity was first saved and when it was last modified.
///
/// Repositories call [`Timestamped::on_create`] before the first insert and
/// [`Timestamped::on_update`] before every later write. `modified_at` stays
/// empty until the first update.
pub trait Timestamped {
    fn created_at(&self) -> i64;
    fn modified_at(&self) -> Option<i64>;

    fn set_created_at(&mut self, at: i64);
    fn set_modified_at(&mut self, at: i64);

    /// Stamp a freshly built entity
    fn on_create(&mut self, now: i64) {
        self.set_created_at(now);
    }

    /// Stamp an entity that is being saved again
    fn on_update(&mut self, now: i64) {
        self.set_modified_at(now);
    }
}

/// Implements [`Timestamped`] for structs with `created_at: i64` and
/// `modified_at: Option<i64>` fields.
macro_rules! impl_timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::Timestamped for $ty {
                fn created_at(&self) -> i64 {
                    self.created_at
                }

                fn modified_at(&self) -> Option<i64> {
                    self.modified_at
                }

                fn set_created_at(&mut self, at: i64) {
                    self.created_at = at;
                }

                fn set_modified_at(&mut self, at: i64) {
                    self.modified_at = Some(at);
                }
            }
        )+
    };
}

pub(crate) use impl_timestamped;
