//! Drag events and their payload

/// Kind of an entry in the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    File,
    String,
}

/// One entry of the item list fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataItem<F> {
    kind: ItemKind,
    file: Option<F>,
}

impl<F> DataItem<F> {
    /// A file entry whose accessor yields `file`
    #[must_use]
    pub fn file(file: F) -> Self {
        Self {
            kind: ItemKind::File,
            file: Some(file),
        }
    }

    /// A file entry whose accessor yields nothing
    #[must_use]
    pub fn unavailable_file() -> Self {
        Self {
            kind: ItemKind::File,
            file: None,
        }
    }

    /// A non-file entry (text, URL, ...)
    #[must_use]
    pub fn string() -> Self {
        Self {
            kind: ItemKind::String,
            file: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Materialize the file, if this entry carries one
    #[must_use]
    pub fn into_file(self) -> Option<F> {
        match self.kind {
            ItemKind::File => self.file,
            ItemKind::String => None,
        }
    }
}

/// Payload of a drop: a direct file list and/or an item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTransfer<F> {
    files: Option<Vec<F>>,
    items: Option<Vec<DataItem<F>>>,
}

impl<F> Default for DataTransfer<F> {
    fn default() -> Self {
        Self {
            files: None,
            items: None,
        }
    }
}

impl<F> DataTransfer<F> {
    /// A payload with neither list
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<F>) -> Self {
        self.files = Some(files);
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<DataItem<F>>) -> Self {
        self.items = Some(items);
        self
    }

    /// Extract the dropped files.
    ///
    /// The direct file list wins when it is present and non-empty. Otherwise
    /// file entries of the item list are materialized in source order.
    #[must_use]
    pub fn into_files(self) -> Vec<F> {
        if let Some(files) = self.files {
            if !files.is_empty() {
                return files;
            }
        }

        self.items
            .unwrap_or_default()
            .into_iter()
            .filter(|item| item.kind() == ItemKind::File)
            .filter_map(DataItem::into_file)
            .collect()
    }
}

/// Notification from the drop target's subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent<F> {
    Enter,
    Leave,
    Over,
    Drop(DataTransfer<F>),
}
