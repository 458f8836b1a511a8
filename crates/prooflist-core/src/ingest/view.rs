//! Visual feedback of the drop target

use std::collections::BTreeSet;

/// Receives "active" on/off changes of the drop target
pub trait DropZoneView {
    fn set_active(&mut self, active: bool);
}

/// Class names applied while a drag hovers the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneOptions {
    pub drag_over_classes: Vec<String>,
    pub drag_active_classes: Vec<String>,
}

impl Default for DropZoneOptions {
    fn default() -> Self {
        Self {
            drag_over_classes: vec![
                "border-primary".to_string(),
                "bg-[rgba(0,26,114,0.03)]".to_string(),
            ],
            drag_active_classes: vec!["drag-over".to_string()],
        }
    }
}

impl DropZoneOptions {
    #[must_use]
    pub fn with_drag_over_classes(mut self, classes: Vec<String>) -> Self {
        self.drag_over_classes = classes;
        self
    }

    #[must_use]
    pub fn with_drag_active_classes(mut self, classes: Vec<String>) -> Self {
        self.drag_active_classes = classes;
        self
    }

    fn all_classes(&self) -> impl Iterator<Item = &String> {
        self.drag_over_classes
            .iter()
            .chain(self.drag_active_classes.iter())
    }
}

/// Class set of the drop target element
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    options: DropZoneOptions,
    classes: BTreeSet<String>,
}

impl ClassList {
    #[must_use]
    pub fn new(options: DropZoneOptions) -> Self {
        Self {
            options,
            classes: BTreeSet::new(),
        }
    }

    /// Add a class unrelated to drag feedback
    pub fn add(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl DropZoneView for ClassList {
    fn set_active(&mut self, active: bool) {
        let classes: Vec<String> = self.options.all_classes().cloned().collect();
        for class in classes {
            if active {
                self.classes.insert(class);
            } else {
                self.classes.remove(&class);
            }
        }
    }
}
