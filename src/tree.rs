use indextree::{Arena, NodeId};

/// The two node variants. Folders carry an aggregate size, files a direct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Folder,
}

/// A node in the usage tree.
#[derive(Debug, Clone)]
pub struct UsageNode {
    pub name: String,
    pub size: u64,
    /// Distance from the root, cosmetic only.
    pub depth: u16,
    pub kind: ItemKind,
}

/// Hierarchical usage tree backed by an arena allocator. Parent links are
/// arena edges, so cycles are unrepresentable and ownership stays single.
/// The tree is read-only once built; only the builder mutates it.
#[derive(Debug)]
pub struct UsageTree {
    arena: Arena<UsageNode>,
    root: NodeId,
}

impl UsageTree {
    /// Create a tree holding just a root folder of size 0.
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(UsageNode {
            name: root_name.into(),
            size: 0,
            depth: 0,
            kind: ItemKind::Folder,
        });
        Self { arena, root }
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, node: UsageNode) -> NodeId {
        let id = self.arena.new_node(node);
        parent.append(id, &mut self.arena);
        id
    }

    pub(crate) fn set_size(&mut self, id: NodeId, size: u64) {
        if let Some(node) = self.arena.get_mut(id) {
            node.get_mut().size = size;
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &UsageNode {
        self.arena[id].get()
    }

    /// Parent of `id`; the root is its own parent, so navigating up from the
    /// root is a no-op rather than an error.
    pub fn parent_of(&self, id: NodeId) -> NodeId {
        self.arena[id].parent().unwrap_or(id)
    }

    pub fn children(&self, folder: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        folder.children(&self.arena)
    }

    pub fn child_count(&self, folder: NodeId) -> usize {
        folder.children(&self.arena).count()
    }

    /// Children of `folder` in display order: descending size, ties keeping
    /// insertion order. Browser selection indices and rendered rows both read
    /// this same ordering, so the sort always happens before indices do.
    pub fn children_sorted(&self, folder: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = folder.children(&self.arena).collect();
        ids.sort_by(|a, b| self.arena[*b].get().size.cmp(&self.arena[*a].get().size));
        ids
    }

    /// Whether Select may enter this node: folders only, and only with a
    /// non-zero aggregate size (an empty view has no largest-size reference
    /// for bar rendering).
    pub fn is_enterable(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.kind == ItemKind::Folder && node.size > 0
    }

    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.descendants(&self.arena)
    }

    /// Aggregate size of the whole tree.
    pub fn total_size(&self) -> u64 {
        self.node(self.root).size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> UsageTree {
        let mut tree = UsageTree::new("root");
        let root = tree.root();
        tree.add_child(
            root,
            UsageNode {
                name: "small".to_string(),
                size: 10,
                depth: 1,
                kind: ItemKind::File,
            },
        );
        tree.add_child(
            root,
            UsageNode {
                name: "big".to_string(),
                size: 90,
                depth: 1,
                kind: ItemKind::Folder,
            },
        );
        tree.set_size(root, 100);
        tree
    }

    #[test]
    fn test_root_is_its_own_parent() {
        let tree = sample_tree();
        assert_eq!(tree.parent_of(tree.root()), tree.root());
    }

    #[test]
    fn test_children_sorted_descending() {
        let tree = sample_tree();
        let order = tree.children_sorted(tree.root());
        assert_eq!(tree.node(order[0]).name, "big");
        assert_eq!(tree.node(order[1]).name, "small");
    }

    #[test]
    fn test_children_sorted_ties_keep_insertion_order() {
        let mut tree = UsageTree::new("root");
        let root = tree.root();
        for name in ["first", "second", "third"] {
            tree.add_child(
                root,
                UsageNode {
                    name: name.to_string(),
                    size: 50,
                    depth: 1,
                    kind: ItemKind::File,
                },
            );
        }
        let order = tree.children_sorted(root);
        let names: Vec<&str> = order.iter().map(|&id| tree.node(id).name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_enterable_requires_nonzero_folder() {
        let mut tree = sample_tree();
        let root = tree.root();
        let order = tree.children_sorted(root);
        assert!(tree.is_enterable(order[0])); // folder, size 90
        assert!(!tree.is_enterable(order[1])); // file

        let empty = tree.add_child(
            root,
            UsageNode {
                name: "empty".to_string(),
                size: 0,
                depth: 1,
                kind: ItemKind::Folder,
            },
        );
        assert!(!tree.is_enterable(empty));
    }

    #[test]
    fn test_each_child_has_exactly_one_parent() {
        let tree = sample_tree();
        let root = tree.root();
        for id in tree.children(root) {
            assert_eq!(tree.parent_of(id), root);
        }
        // root itself plus two children reachable exactly once
        assert_eq!(tree.descendants(root).count(), 3);
    }
}
