use crate::tree::UsageTree;
use indextree::NodeId;

/// One decoded input event. `Other` covers every key the browser ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    MoveUp,
    MoveDown,
    Select,
    Quit,
    Other,
}

/// Navigation state machine over a built usage tree. Row 0 of the view is the
/// synthetic ".." parent row; rows 1.. address the display-sorted children,
/// offset by the scroll position. The browser mutates only its own view
/// state, never the tree.
#[derive(Debug)]
pub struct Browser {
    current: NodeId,
    cursor: usize,
    scroll: usize,
}

impl Browser {
    pub fn new(tree: &UsageTree) -> Self {
        Self {
            current: tree.root(),
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Apply one transition. `viewport_height` is the number of child rows
    /// visible this frame (it changes when the terminal is resized). Returns
    /// false once the quit event is consumed.
    pub fn apply(&mut self, tree: &UsageTree, event: NavEvent, viewport_height: usize) -> bool {
        match event {
            NavEvent::Quit => return false,
            NavEvent::MoveUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                } else if self.scroll > 0 {
                    self.scroll -= 1;
                }
            }
            NavEvent::MoveDown => {
                self.cursor += 1;
                if self.cursor > viewport_height {
                    self.scroll += 1;
                }
            }
            NavEvent::Select => self.select(tree),
            NavEvent::Other => {}
        }
        self.clamp(tree, viewport_height);
        true
    }

    fn select(&mut self, tree: &UsageTree) {
        let target = if self.cursor == 0 {
            tree.parent_of(self.current)
        } else {
            // Indices address the sorted display order, read after the sort.
            let order = tree.children_sorted(self.current);
            match order.get(self.cursor - 1 + self.scroll) {
                Some(&id) => id,
                None => return,
            }
        };

        // ".." at the root resolves to the current folder itself.
        if target == self.current {
            return;
        }
        if tree.is_enterable(target) {
            self.current = target;
            self.cursor = 0;
            self.scroll = 0;
        }
    }

    /// Keep the cursor valid for the currently visible window regardless of
    /// how the child count or the viewport changed.
    fn clamp(&mut self, tree: &UsageTree, viewport_height: usize) {
        let n = tree.child_count(self.current);
        self.scroll = self.scroll.min(n);
        self.cursor = self
            .cursor
            .min(n - self.scroll)
            .min(viewport_height);
    }
}
