use core::fmt;
use std::sync::Arc;

use crate::{Column, ColumnOptions, PickerOption};

/// Per-column construction data.
#[derive(Clone, Debug)]
pub struct ColumnSpec<O = PickerOption> {
    pub values: Vec<O>,
    /// Overrides the shared config's default index when set.
    pub default_index: Option<usize>,
}

impl<O> ColumnSpec<O> {
    pub fn new(values: Vec<O>) -> Self {
        Self {
            values,
            default_index: None,
        }
    }

    pub fn with_default_index(mut self, default_index: usize) -> Self {
        self.default_index = Some(default_index);
        self
    }
}

/// A callback fired when any column commits a user-driven change.
///
/// Arguments are the column index and the new option index. It fires synchronously
/// from within the column call that committed the change; read aggregate values after
/// that call returns.
pub type PickerChangeCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// An explicit owner of one or more picker columns.
///
/// The picker constructs and destroys its columns itself; columns never register
/// themselves anywhere. It reads each column's committed value and index and routes
/// commands by column position, but never touches a column's in-flight gesture state;
/// pointer events go straight to [`Picker::column_mut`].
#[derive(Clone, Debug)]
pub struct Picker<O = PickerOption> {
    columns: Vec<Column<O>>,
}

impl<O> Picker<O>
where
    O: Clone + PartialEq + fmt::Display + 'static,
{
    /// Builds one column per [`ColumnSpec`] from a shared config.
    ///
    /// `on_change` fires with `(column_index, option_index)` whenever a column commits
    /// a user-driven change; it wraps (and replaces) the shared config's own
    /// `on_change`.
    pub fn new(
        shared: ColumnOptions<O>,
        specs: Vec<ColumnSpec<O>>,
        on_change: Option<PickerChangeCallback>,
    ) -> Self {
        let columns = specs
            .into_iter()
            .enumerate()
            .map(|(column_index, spec)| {
                let mut opts = shared.clone();
                if let Some(default_index) = spec.default_index {
                    opts.default_index = default_index;
                }
                if let Some(relay) = on_change.clone() {
                    opts.on_change = Some(Arc::new(move |_column: &Column<O>, option_index| {
                        relay(column_index, option_index);
                    }));
                }
                Column::new(opts, spec.values)
            })
            .collect();
        Self { columns }
    }

    /// Single-column picker over a flat list of values.
    pub fn simple(
        shared: ColumnOptions<O>,
        values: Vec<O>,
        on_change: Option<PickerChangeCallback>,
    ) -> Self {
        Self::new(shared, vec![ColumnSpec::new(values)], on_change)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, index: usize) -> Option<&Column<O>> {
        self.columns.get(index)
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column<O>> {
        self.columns.get_mut(index)
    }

    pub fn column_value(&self, index: usize) -> Option<&O> {
        self.columns.get(index)?.value()
    }

    pub fn set_column_value(&mut self, index: usize, text: &str) {
        if let Some(column) = self.columns.get_mut(index) {
            column.set_value(text);
        }
    }

    pub fn column_index(&self, index: usize) -> Option<usize> {
        Some(self.columns.get(index)?.current_index())
    }

    pub fn set_column_index(&mut self, index: usize, option_index: usize) {
        if let Some(column) = self.columns.get_mut(index) {
            column.set_index(option_index);
        }
    }

    pub fn column_options(&self, index: usize) -> Option<&[O]> {
        Some(self.columns.get(index)?.options())
    }

    /// Replaces one column's options; equal lists are a no-op, differing lists reset
    /// that column's selection to index 0.
    pub fn set_column_options(&mut self, index: usize, values: Vec<O>) {
        if let Some(column) = self.columns.get_mut(index) {
            column.set_options(values);
        }
    }

    /// Committed value of every column, in column order.
    pub fn values(&self) -> Vec<Option<&O>> {
        self.columns.iter().map(Column::value).collect()
    }

    /// Sets each column's value by display text, in column order.
    pub fn set_values(&mut self, texts: &[&str]) {
        for (column, text) in self.columns.iter_mut().zip(texts) {
            column.set_value(text);
        }
    }

    /// Committed index of every column, in column order.
    pub fn indexes(&self) -> Vec<usize> {
        self.columns.iter().map(Column::current_index).collect()
    }

    pub fn set_indexes(&mut self, indexes: &[usize]) {
        for (column, &index) in self.columns.iter_mut().zip(indexes) {
            column.set_index(index);
        }
    }

    /// Settles every column immediately, flushing pending change notifications, so a
    /// confirm action reads final values even while a settle animation is mid-flight.
    pub fn confirm(&mut self) {
        for column in &mut self.columns {
            column.transition_end();
        }
    }
}
