//! Ordered medicine list: the single piece of state behind the list screen.
//!
//! Pure state. Mutations return a [`ListChange`] describing what moved and
//! never talk to a host themselves; see [`crate::adapter`] for delivery.

use crate::change::ListChange;
use crate::error::ListError;
use crate::models::Medicine;

/// Returned by [`MedicineList::index_of_id_or_sentinel`] when nothing matches.
pub const NOT_FOUND: i64 = -1;

/// Ordered sequence of medicines in display order.
///
/// The list owns its records. The only way to change them is through
/// [`append`](Self::append), [`replace_at`](Self::replace_at) and
/// [`remove_at`](Self::remove_at). Id uniqueness is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineList {
    items: Vec<Medicine>,
}

impl MedicineList {
    /// Take ownership of the initial records.
    pub fn new(items: Vec<Medicine>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Result<&Medicine, ListError> {
        self.items
            .get(position)
            .ok_or_else(|| ListError::out_of_range(position, self.items.len()))
    }

    /// Position of the first record whose id equals `id`.
    ///
    /// Records without an id never match. With duplicate ids the lowest
    /// position wins.
    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|m| m.has_id(id))
    }

    /// [`find_index_by_id`](Self::find_index_by_id) with `-1` for "not found",
    /// for hosts that pass positions as signed integers.
    pub fn index_of_id_or_sentinel(&self, id: &str) -> i64 {
        self.find_index_by_id(id)
            .and_then(|p| i64::try_from(p).ok())
            .unwrap_or(NOT_FOUND)
    }

    pub fn append(&mut self, medicine: Medicine) -> ListChange {
        self.items.push(medicine);
        ListChange::Inserted {
            position: self.items.len() - 1,
        }
    }

    pub fn replace_at(
        &mut self,
        position: usize,
        medicine: Medicine,
    ) -> Result<ListChange, ListError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(position)
            .ok_or_else(|| ListError::out_of_range(position, len))?;
        *slot = medicine;
        Ok(ListChange::Changed { position })
    }

    /// Remove the record at `position`, shifting later records up by one.
    /// Returns the change together with the removed record.
    pub fn remove_at(&mut self, position: usize) -> Result<(ListChange, Medicine), ListError> {
        if position >= self.items.len() {
            return Err(ListError::out_of_range(position, self.items.len()));
        }
        let removed = self.items.remove(position);
        Ok((ListChange::Removed { position }, removed))
    }

    /// Read-only view of the current records, in display order.
    pub fn as_slice(&self) -> &[Medicine] {
        &self.items
    }

    /// Owned copy of the current records, for handing to a persistence layer.
    pub fn to_vec(&self) -> Vec<Medicine> {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Medicine> {
        self.items.iter()
    }

    /// Give the records back, consuming the list.
    pub fn into_inner(self) -> Vec<Medicine> {
        self.items
    }
}

impl<'a> IntoIterator for &'a MedicineList {
    type Item = &'a Medicine;
    type IntoIter = std::slice::Iter<'a, Medicine>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Medicine> for MedicineList {
    fn from_iter<I: IntoIterator<Item = Medicine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
