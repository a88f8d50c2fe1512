//! Element registry: dense records indexed by ElemId, looked up by path.
//!
//! `lookup` is the explicit optional boundary for every host event that names
//! an element: unknown paths return `None` and the caller silently skips.

use crate::ids::{ElemId, IdAllocator};
use crate::page::{ElementRole, PageSnapshot};
use hashbrown::HashMap;
use vitrine_api_core::{Rect, TargetPath};

#[derive(Clone, Debug)]
pub struct ElementRecord {
    pub id: ElemId,
    pub path: TargetPath,
    pub rect: Rect,
    pub role: ElementRole,
    pub anchor: Option<String>,
}

#[derive(Default, Debug)]
pub struct ElementRegistry {
    ids: IdAllocator,
    by_path: HashMap<TargetPath, ElemId>,
    records: Vec<ElementRecord>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all records and rebuild from a page snapshot.
    pub fn load(&mut self, page: &PageSnapshot) {
        self.clear();
        for desc in &page.elements {
            let id = self.ids.alloc_elem();
            self.by_path.insert(desc.path.clone(), id);
            self.records.push(ElementRecord {
                id,
                path: desc.path.clone(),
                rect: desc.rect,
                role: desc.role.clone(),
                anchor: desc.anchor.clone(),
            });
        }
    }

    pub fn clear(&mut self) {
        self.ids.reset_elems();
        self.by_path.clear();
        self.records.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Optional lookup boundary: `None` means the host named an element this
    /// snapshot does not know, and the event is skipped.
    pub fn lookup(&self, path: &TargetPath) -> Option<&ElementRecord> {
        self.by_path.get(path).map(|id| &self.records[id.0 as usize])
    }

    pub fn get(&self, id: ElemId) -> Option<&ElementRecord> {
        self.records.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.records.iter()
    }

    /// First record matching a predicate on its role.
    pub fn find_by_role(&self, pred: impl Fn(&ElementRole) -> bool) -> Option<&ElementRecord> {
        self.records.iter().find(|r| pred(&r.role))
    }

    /// Record answering to a fragment id, if any.
    pub fn find_by_anchor(&self, fragment: &str) -> Option<&ElementRecord> {
        self.records
            .iter()
            .find(|r| r.anchor.as_deref() == Some(fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ElementDesc;

    fn page() -> PageSnapshot {
        PageSnapshot {
            elements: vec![
                ElementDesc {
                    path: TargetPath::parse("page/Header").unwrap(),
                    rect: Rect::new(0.0, 0.0, 1000.0, 80.0),
                    role: ElementRole::Header,
                    anchor: None,
                },
                ElementDesc {
                    path: TargetPath::parse("page/Features").unwrap(),
                    rect: Rect::new(0.0, 1200.0, 1000.0, 600.0),
                    role: ElementRole::Section,
                    anchor: Some("features".into()),
                },
            ],
        }
    }

    #[test]
    fn load_lookup_and_miss() {
        let mut reg = ElementRegistry::new();
        reg.load(&page());
        assert_eq!(reg.len(), 2);
        let header = TargetPath::parse("page/Header").unwrap();
        assert!(reg.lookup(&header).is_some());
        let unknown = TargetPath::parse("page/Nope").unwrap();
        assert!(reg.lookup(&unknown).is_none());
    }

    #[test]
    fn reload_reassigns_dense_ids() {
        let mut reg = ElementRegistry::new();
        reg.load(&page());
        reg.load(&page());
        let ids: Vec<u32> = reg.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn find_by_anchor() {
        let mut reg = ElementRegistry::new();
        reg.load(&page());
        assert!(reg.find_by_anchor("features").is_some());
        assert!(reg.find_by_anchor("pricing").is_none());
    }
}
