//! Focus tracking across the fields of a draft

/// Which field of which entry has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldCursor {
    pub entry: usize,
    pub field: usize,
}

impl FieldCursor {
    /// Move to the next field, continuing into the next entry and wrapping
    /// back to the first field of the first entry
    pub fn next(&mut self, field_count: usize, entry_count: usize) {
        if field_count == 0 || entry_count == 0 {
            *self = Self::default();
            return;
        }
        if self.field + 1 < field_count {
            self.field += 1;
        } else {
            self.field = 0;
            self.entry = (self.entry + 1) % entry_count;
        }
    }

    /// Move to the previous field, wrapping to the last field of the last entry
    pub fn prev(&mut self, field_count: usize, entry_count: usize) {
        if field_count == 0 || entry_count == 0 {
            *self = Self::default();
            return;
        }
        if self.field > 0 {
            self.field -= 1;
        } else {
            self.field = field_count - 1;
            self.entry = if self.entry == 0 {
                entry_count - 1
            } else {
                self.entry - 1
            };
        }
    }

    /// Focus the first field of an entry
    pub fn focus_entry(&mut self, entry: usize) {
        self.entry = entry;
        self.field = 0;
    }

    /// Pull the cursor back inside the draft after entries were removed
    pub fn clamp(&mut self, field_count: usize, entry_count: usize) {
        self.entry = self.entry.min(entry_count.saturating_sub(1));
        self.field = self.field.min(field_count.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
