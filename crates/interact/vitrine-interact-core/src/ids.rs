//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElemId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NoticeId(pub u32);

/// Monotonic allocator for ElemId and NoticeId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_elem: u32,
    next_notice: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_elem(&mut self) -> ElemId {
        let id = ElemId(self.next_elem);
        self.next_elem = self.next_elem.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_notice(&mut self) -> NoticeId {
        let id = NoticeId(self.next_notice);
        self.next_notice = self.next_notice.wrapping_add(1);
        id
    }

    /// Reset element allocation only; notice ids stay unique across page
    /// re-initializations so a pending dismiss never hits a reused id.
    #[inline]
    pub fn reset_elems(&mut self) {
        self.next_elem = 0;
    }
}
