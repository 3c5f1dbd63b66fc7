//! Binds the medicine list to a scrollable list view.
//!
//! The host UI drives rendering through the [`ListAdapter`] capability
//! (count, create a row, bind a row). Mutations go through
//! [`MedicineAdapter`], which applies them to the [`MedicineList`] and then
//! forwards exactly one [`ListChange`] to the [`RenderHost`].

use serde::{Deserialize, Serialize};

use crate::change::ListChange;
use crate::error::ListError;
use crate::formatter::{DefaultRowFormatter, RowFormatter};
use crate::host::RenderHost;
use crate::list::MedicineList;
use crate::models::Medicine;

// ═══════════════════════════════════════════════════════════
// Row capability
// ═══════════════════════════════════════════════════════════

/// The three text slots of a medicine row.
pub trait RowSlots {
    fn set_name(&mut self, text: &str);
    fn set_time(&mut self, text: &str);
    fn set_days(&mut self, text: &str);
}

/// Plain row used when the host has no widget of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRow {
    pub name: String,
    pub time: String,
    pub days: String,
}

impl RowSlots for MedicineRow {
    fn set_name(&mut self, text: &str) {
        text.clone_into(&mut self.name);
    }

    fn set_time(&mut self, text: &str) {
        text.clone_into(&mut self.time);
    }

    fn set_days(&mut self, text: &str) {
        text.clone_into(&mut self.days);
    }
}

/// What a list view needs from its data source.
pub trait ListAdapter {
    type Item;
    type Row;

    fn item_count(&self) -> usize;
    fn item(&self, position: usize) -> Result<&Self::Item, ListError>;
    fn create_row(&self) -> Self::Row;
    fn bind_row(&self, row: &mut Self::Row, position: usize) -> Result<(), ListError>;
}

// ═══════════════════════════════════════════════════════════
// MedicineAdapter
// ═══════════════════════════════════════════════════════════

/// Medicine list plus the host that gets told about every change.
///
/// Every mutation takes `&mut self`; a host that shares the adapter across
/// threads wraps it in its own lock.
#[derive(Debug)]
pub struct MedicineAdapter<H, F = DefaultRowFormatter> {
    list: MedicineList,
    formatter: F,
    host: H,
}

impl<H: RenderHost> MedicineAdapter<H, DefaultRowFormatter> {
    /// Adapter with the default 24-hour formatter.
    pub fn new(medicines: Vec<Medicine>, host: H) -> Self {
        Self::with_formatter(medicines, DefaultRowFormatter::default(), host)
    }
}

impl<H: RenderHost, F: RowFormatter> MedicineAdapter<H, F> {
    pub fn with_formatter(medicines: Vec<Medicine>, formatter: F, host: H) -> Self {
        Self {
            list: MedicineList::new(medicines),
            formatter,
            host,
        }
    }

    // ─── Reads ───────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, position: usize) -> Result<&Medicine, ListError> {
        self.list.get(position)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.list.find_index_by_id(id)
    }

    /// Current records in display order.
    pub fn medicines(&self) -> &[Medicine] {
        self.list.as_slice()
    }

    pub fn list(&self) -> &MedicineList {
        &self.list
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Fill any row widget with the record at `position`.
    pub fn bind_into<R: RowSlots + ?Sized>(
        &self,
        row: &mut R,
        position: usize,
    ) -> Result<(), ListError> {
        let medicine = self.list.get(position)?;
        row.set_name(&medicine.name);
        row.set_time(
            &self
                .formatter
                .format_time(medicine.hour_of_day, medicine.minute),
        );
        row.set_days(&self.formatter.format_days(medicine.days_of_week));
        Ok(())
    }

    /// Bind every record into fresh rows, in display order.
    pub fn render_all(&self) -> Vec<MedicineRow> {
        self.list
            .iter()
            .map(|m| MedicineRow {
                name: m.name.clone(),
                time: self.formatter.format_time(m.hour_of_day, m.minute),
                days: self.formatter.format_days(m.days_of_week),
            })
            .collect()
    }

    // ─── Mutations ───────────────────────────────────────────

    pub fn append(&mut self, medicine: Medicine) -> ListChange {
        let change = self.list.append(medicine);
        self.emit(change);
        change
    }

    pub fn replace_at(
        &mut self,
        position: usize,
        medicine: Medicine,
    ) -> Result<ListChange, ListError> {
        let change = self.list.replace_at(position, medicine)?;
        self.emit(change);
        Ok(change)
    }

    pub fn remove_at(&mut self, position: usize) -> Result<(ListChange, Medicine), ListError> {
        let (change, removed) = self.list.remove_at(position)?;
        self.emit(change);
        Ok((change, removed))
    }

    /// Replace the record with the same id, or append if there is none.
    /// Records without an id are always appended.
    pub fn upsert(&mut self, medicine: Medicine) -> Result<ListChange, ListError> {
        let existing = medicine
            .id
            .as_deref()
            .and_then(|id| self.list.find_index_by_id(id));

        match existing {
            Some(position) => self.replace_at(position, medicine),
            None => Ok(self.append(medicine)),
        }
    }

    /// Remove the first record with this id. Nothing happens when absent.
    pub fn remove_by_id(&mut self, id: &str) -> Option<(ListChange, Medicine)> {
        let position = self.list.find_index_by_id(id)?;
        self.remove_at(position).ok()
    }

    /// Give back the records and the host, consuming the adapter.
    pub fn into_parts(self) -> (Vec<Medicine>, H) {
        (self.list.into_inner(), self.host)
    }

    fn emit(&mut self, change: ListChange) {
        tracing::debug!(
            kind = change.kind().as_str(),
            position = change.position(),
            len = self.list.len(),
            "Applied medicine list change"
        );
        self.host.on_change(change);
    }
}

impl<H: RenderHost, F: RowFormatter> ListAdapter for MedicineAdapter<H, F> {
    type Item = Medicine;
    type Row = MedicineRow;

    fn item_count(&self) -> usize {
        self.list.len()
    }

    fn item(&self, position: usize) -> Result<&Medicine, ListError> {
        self.list.get(position)
    }

    fn create_row(&self) -> MedicineRow {
        MedicineRow::default()
    }

    fn bind_row(&self, row: &mut MedicineRow, position: usize) -> Result<(), ListError> {
        self.bind_into(row, position)
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
