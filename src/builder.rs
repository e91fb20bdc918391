use crate::error::BuildError;
use crate::lister::{ItemRef, Lister};
use crate::tree::{ItemKind, UsageNode, UsageTree};
use indextree::NodeId;
use tracing::{debug, info};

/// Build a complete usage tree from a remote listing, depth-first, one
/// `list_children` call per folder. Folder sizes aggregate bottom-up; any
/// listing failure aborts the whole build with no partial tree.
pub fn build_tree(
    lister: &dyn Lister,
    root_ref: &ItemRef,
    root_name: &str,
) -> Result<UsageTree, BuildError> {
    let mut tree = UsageTree::new(root_name);
    let root = tree.root();
    let total = build_folder(lister, &mut tree, root, root_ref, 1)?;
    tree.set_size(root, total);
    info!(total, "listing aggregated");
    Ok(tree)
}

fn build_folder(
    lister: &dyn Lister,
    tree: &mut UsageTree,
    folder_id: NodeId,
    folder_ref: &ItemRef,
    depth: u16,
) -> Result<u64, BuildError> {
    let entries = lister.list_children(folder_ref).map_err(|source| BuildError::List {
        folder: folder_ref.clone(),
        name: tree.node(folder_id).name.clone(),
        source,
    })?;
    debug!(folder = %folder_ref, entries = entries.len(), "listed folder");

    let mut total = 0u64;
    for entry in entries {
        match (entry.is_folder, entry.size) {
            (false, Some(size)) => {
                tree.add_child(
                    folder_id,
                    UsageNode {
                        name: entry.name,
                        size,
                        depth,
                        kind: ItemKind::File,
                    },
                );
                total += size;
            }
            (true, _) => {
                let child = tree.add_child(
                    folder_id,
                    UsageNode {
                        name: entry.name,
                        size: 0,
                        depth,
                        kind: ItemKind::Folder,
                    },
                );
                let subtotal = build_folder(lister, tree, child, &entry.item_ref, depth + 1)?;
                tree.set_size(child, subtotal);
                total += subtotal;
            }
            // Size unknown remotely: counted as a zero-byte leaf.
            (false, None) => {
                tree.add_child(
                    folder_id,
                    UsageNode {
                        name: entry.name,
                        size: 0,
                        depth,
                        kind: ItemKind::File,
                    },
                );
            }
        }
    }
    Ok(total)
}
