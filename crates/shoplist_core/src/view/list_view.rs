//! Ordered row collection with editing and filter state.

use uuid::Uuid;

/// Stable identifier for one rendered row.
///
/// Generated per row and decoupled from any live UI artifact, so the
/// session can target rows without relying on object identity.
pub type RowId = Uuid;

/// One visual row of the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub name: String,
    /// At most one row in the view has this set.
    pub editing: bool,
    /// False when the active filter excludes this row.
    pub visible: bool,
}

impl Row {
    fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            editing: false,
            visible: true,
        }
    }
}

/// The renderer-facing list state: ordered rows plus view flags.
#[derive(Debug, Default)]
pub struct ListView {
    rows: Vec<Row>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the view with one row per item, in sequence order.
    ///
    /// Drops all editing and filter marks along with the old rows.
    pub fn render_all(&mut self, items: &[String]) {
        self.rows = items.iter().map(Row::new).collect();
    }

    /// Appends one visible row and returns its stable id.
    ///
    /// New rows are appended visible regardless of the active filter; the
    /// filter only re-applies on the next `apply_filter` call, matching the
    /// interactive behavior of filter-as-you-type.
    pub fn append_row(&mut self, name: impl Into<String>) -> RowId {
        let row = Row::new(name);
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Detaches the row with the given id, if present.
    pub fn remove_row(&mut self, id: RowId) {
        self.rows.retain(|row| row.id != id);
    }

    /// Detaches all rows.
    pub fn clear_all(&mut self) {
        self.rows.clear();
    }

    /// Tags at most one row as being edited; untags all others.
    pub fn mark_editing(&mut self, target: Option<RowId>) {
        for row in &mut self.rows {
            row.editing = target == Some(row.id);
        }
    }

    /// Shows rows whose text contains `substring` case-insensitively and
    /// hides the rest. The empty string matches everything.
    pub fn apply_filter(&mut self, substring: &str) {
        let needle = substring.to_lowercase();
        for row in &mut self.rows {
            row.visible = row.name.to_lowercase().contains(&needle);
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Total row count, hidden rows included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows currently shown under the active filter.
    pub fn visible_len(&self) -> usize {
        self.rows.iter().filter(|row| row.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::ListView;

    fn view_with(names: &[&str]) -> ListView {
        let mut view = ListView::new();
        view.render_all(&names.iter().map(|n| n.to_string()).collect::<Vec<_>>());
        view
    }

    #[test]
    fn render_all_preserves_order() {
        let view = view_with(&["Milk", "Eggs", "Bread"]);
        let names: Vec<_> = view.rows().iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Eggs", "Bread"]);
    }

    #[test]
    fn append_and_remove_by_id() {
        let mut view = view_with(&["Milk"]);
        let id = view.append_row("Eggs");
        assert_eq!(view.len(), 2);

        view.remove_row(id);
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows()[0].name, "Milk");
    }

    #[test]
    fn mark_editing_moves_the_single_mark() {
        let mut view = view_with(&["Milk", "Eggs"]);
        let first = view.rows()[0].id;
        let second = view.rows()[1].id;

        view.mark_editing(Some(first));
        assert!(view.row(first).unwrap().editing);
        assert!(!view.row(second).unwrap().editing);

        view.mark_editing(Some(second));
        assert!(!view.row(first).unwrap().editing);
        assert!(view.row(second).unwrap().editing);

        view.mark_editing(None);
        assert!(view.rows().iter().all(|row| !row.editing));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut view = view_with(&["Oat Milk", "Eggs", "milkshake"]);

        view.apply_filter("MILK");
        let shown: Vec<_> = view
            .rows()
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(shown, ["Oat Milk", "milkshake"]);

        view.apply_filter("");
        assert_eq!(view.visible_len(), 3);
    }
}
