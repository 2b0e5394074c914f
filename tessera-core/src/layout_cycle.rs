use crate::config::LayoutDescriptor;

/// The configured layouts and which one is active.
#[derive(Debug, Clone)]
pub struct LayoutCycle {
    layouts: Vec<LayoutDescriptor>,
    index: usize,
}

impl LayoutCycle {
    /// Start at the first layout. An empty list falls back to a single `Max`.
    #[must_use]
    pub fn new(layouts: Vec<LayoutDescriptor>) -> Self {
        let layouts = if layouts.is_empty() {
            tracing::warn!("No layouts were configured - defaulting to a single Max layout");
            vec![LayoutDescriptor::Max]
        } else {
            layouts
        };
        tracing::debug!(
            "Available layouts: {:?}",
            layouts.iter().map(LayoutDescriptor::name).collect::<Vec<_>>()
        );
        Self { layouts, index: 0 }
    }

    #[must_use]
    pub fn current(&self) -> &LayoutDescriptor {
        &self.layouts[self.index]
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn next(&mut self) -> &LayoutDescriptor {
        self.index = (self.index + 1) % self.layouts.len();
        self.current()
    }

    pub fn previous(&mut self) -> &LayoutDescriptor {
        self.index = (self.index + self.layouts.len() - 1) % self.layouts.len();
        self.current()
    }

    /// Jump to the first layout called `name`.
    pub fn set(&mut self, name: &str) -> bool {
        match self.layouts.iter().position(|l| l.name() == name) {
            Some(index) => {
                self.index = index;
                true
            }
            None => {
                tracing::warn!("There is no layout with the name {:?}", name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnsLayout, StackLayout};

    fn cycle() -> LayoutCycle {
        LayoutCycle::new(vec![
            LayoutDescriptor::Columns(ColumnsLayout::default()),
            LayoutDescriptor::Max,
            LayoutDescriptor::Stack(StackLayout::default()),
        ])
    }

    #[test]
    fn next_wraps_around() {
        let mut c = cycle();
        assert_eq!(c.current().name(), "columns");
        assert_eq!(c.next().name(), "max");
        assert_eq!(c.next().name(), "stack");
        assert_eq!(c.next().name(), "columns");
    }

    #[test]
    fn previous_wraps_around() {
        let mut c = cycle();
        assert_eq!(c.previous().name(), "stack");
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_list_falls_back_to_max() {
        let mut c = LayoutCycle::new(vec![]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.next(), &LayoutDescriptor::Max);
    }

    #[test]
    fn set_by_name() {
        let mut c = cycle();
        assert!(c.set("stack"));
        assert_eq!(c.index(), 2);
        assert!(!c.set("zoomy"));
        assert_eq!(c.index(), 2);
    }
}
