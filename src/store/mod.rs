//! Generic record store.
//!
//! A [`Store`] owns the in-memory mirror of one record list and persists the
//! full list under the record type's storage key after every mutation.

pub mod codec;
pub mod id;

use crate::errors::AppResult;
use crate::storage::KvStorage;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use codec::DecodeError;

/// A flat record persisted as one element of a stored list.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Key under which the whole list is stored.
    const STORAGE_KEY: &'static str;
    /// Singular, lowercase name used in notices and logs.
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

/// Read the current snapshot of `T` without holding a store.
///
/// An absent key or malformed content yields an empty list. Reads never write:
/// the malformed value is only reported once a [`Store`] overwrites it.
pub fn load_snapshot<T, S>(storage: &S) -> AppResult<Vec<T>>
where
    T: Record,
    S: KvStorage + ?Sized,
{
    read_list::<T, S>(storage).map(|(list, _)| list)
}

/// The stored list plus the decode failure, if the stored value was malformed.
fn read_list<T, S>(storage: &S) -> AppResult<(Vec<T>, Option<String>)>
where
    T: Record,
    S: KvStorage + ?Sized,
{
    let Some(raw) = storage.get_item(T::STORAGE_KEY)? else {
        return Ok((Vec::new(), None));
    };

    match codec::decode_list::<T>(T::STORAGE_KEY, &raw) {
        Ok(list) => Ok((list, None)),
        Err(e) => Ok((Vec::new(), Some(e.to_string()))),
    }
}

pub struct Store<'a, T, S>
where
    T: Record,
    S: KvStorage + ?Sized,
{
    storage: &'a mut S,
    items: Vec<T>,
    /// Decode failure of the stored value the mirror was loaded from.
    discarded: Option<String>,
}

impl<'a, T, S> Store<'a, T, S>
where
    T: Record,
    S: KvStorage + ?Sized,
{
    /// Bind a store to `storage` and load its current list.
    pub fn open(storage: &'a mut S) -> AppResult<Self> {
        let (items, discarded) = read_list::<T, S>(&*storage)?;
        Ok(Self {
            storage,
            items,
            discarded,
        })
    }

    /// Re-read the persisted list into the mirror.
    pub fn load(&mut self) -> AppResult<&[T]> {
        let (items, discarded) = read_list::<T, S>(&*self.storage)?;
        self.items = items;
        self.discarded = discarded;
        Ok(&self.items)
    }

    /// Serialize `list` and overwrite whatever is stored under the key.
    ///
    /// Overwriting a malformed value logs its decode failure, once.
    pub fn save(&mut self, list: Vec<T>) -> AppResult<()> {
        let raw = codec::encode_list(&list)?;
        self.storage.set_item(T::STORAGE_KEY, &raw)?;
        if let Some(reason) = self.discarded.take() {
            // Logging must not turn a completed write into a failure.
            let _ = self.storage.log(
                "load",
                T::STORAGE_KEY,
                &format!("{reason}; replaced by the new list"),
            );
        }
        self.items = list;
        Ok(())
    }

    /// Prepend `item`: the newest record is always first.
    pub fn append(&mut self, item: T) -> AppResult<()> {
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item);
        next.extend(self.items.iter().cloned());
        self.save(next)
    }

    /// Replace every record whose id equals `id` with `transform(record)`.
    ///
    /// Returns `false`, without writing, when no record matches.
    pub fn update<F>(&mut self, id: &str, mut transform: F) -> AppResult<bool>
    where
        F: FnMut(T) -> T,
    {
        if self.find(id).is_none() {
            return Ok(false);
        }

        let next = self
            .items
            .iter()
            .cloned()
            .map(|x| if x.id() == id { transform(x) } else { x })
            .collect();
        self.save(next)?;
        Ok(true)
    }

    /// Drop every record whose id equals `id`.
    ///
    /// Returns `false`, without writing, when no record matches.
    pub fn remove(&mut self, id: &str) -> AppResult<bool> {
        if self.find(id).is_none() {
            return Ok(false);
        }

        let next = self.items.iter().filter(|x| x.id() != id).cloned().collect();
        self.save(next)?;
        Ok(true)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|x| x.id() == id)
    }

    /// Identifier for a record created at `now_ms`, unique within this store.
    pub fn next_id(&self, now_ms: i64) -> String {
        id::next_id(&self.items, now_ms)
    }
}
