//! Constraint-based ordering of one menu level.
//!
//! Items are split into separator-delimited groups, groups linked by `before` / `after`
//! references are merged, items are sorted inside each group, groups are sorted by their
//! `beforeGroupContaining` / `afterGroupContaining` references, and the result is joined back
//! with exactly one separator between non-empty groups.
//!
//! Unresolvable references are ignored and conflicting ones are broken by dropping an edge; only
//! a malformed `position` string is an error.

use crate::position::{Position, Relationship};
use crate::{MenuItem, Result};
use menusort_graphlib::{EdgeMap, topsort_with_dropped};
use rustc_hash::FxHashMap as HashMap;

/// A menu item together with its parsed position.
#[derive(Debug, Clone)]
struct Entry {
    item: MenuItem,
    position: Option<Position>,
}

impl Entry {
    fn command(&self) -> Option<&str> {
        self.item.command.as_deref()
    }
}

type Group = Vec<Entry>;

/// Sorts one level of a menu. Submenus are left untouched.
///
/// Every non-separator position is validated before any reordering happens, so an error never
/// comes with partial output.
pub fn sort_menu_items(items: Vec<MenuItem>) -> Result<Vec<MenuItem>> {
    let entries = items
        .into_iter()
        .map(|item| -> Result<Entry> {
            // Separators never take part in ordering, so their positions are not read.
            let position = if item.is_separator() {
                None
            } else {
                item.parsed_position()?
            };
            Ok(Entry { item, position })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut groups = split_groups(entries, |e| e.item.is_separator());
    merge_groups(&mut groups);
    let groups: Vec<Group> = groups.into_iter().map(sort_items_in_group).collect();
    let groups = sort_groups(groups);

    let groups: Vec<Vec<MenuItem>> = groups
        .into_iter()
        .map(|g| g.into_iter().map(|e| e.item).collect())
        .collect();
    Ok(join_groups(groups, MenuItem::separator))
}

/// Sorts every level of a menu tree, submenus included.
pub fn sort_menu_tree(items: Vec<MenuItem>) -> Result<Vec<MenuItem>> {
    sort_menu_items(items)?
        .into_iter()
        .map(|mut item| -> Result<MenuItem> {
            if let Some(children) = item.submenu.take() {
                item.submenu = Some(sort_menu_tree(children)?);
            }
            Ok(item)
        })
        .collect()
}

/// Splits `items` on separators. Consecutive separators do not open empty groups, but the first
/// and last group may be empty.
pub fn split_groups<T>(
    items: impl IntoIterator<Item = T>,
    is_separator: impl Fn(&T) -> bool,
) -> Vec<Vec<T>> {
    let mut groups: Vec<Vec<T>> = vec![Vec::new()];
    for item in items {
        if is_separator(&item) {
            if groups.last().is_some_and(|g| !g.is_empty()) {
                groups.push(Vec::new());
            }
        } else if let Some(current) = groups.last_mut() {
            current.push(item);
        }
    }
    groups
}

/// Concatenates `groups`, putting one separator between the output so far and each following
/// non-empty group. Empty groups vanish.
pub fn join_groups<T>(groups: Vec<Vec<T>>, separator: impl Fn() -> T) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for group in groups {
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(separator());
        }
        out.extend(group);
    }
    out
}

/// Merges groups connected by `before` / `after` references until nothing changes.
///
/// The owning group is appended to the end of the group holding the referenced command and
/// removed from the list. Each pass starts from the top, so chains collapse regardless of the
/// order in which they are discovered.
fn merge_groups(groups: &mut Vec<Group>) {
    while let Some((from, into)) = find_group_merge(groups) {
        let moved = groups.remove(from);
        let into = if into > from { into - 1 } else { into };
        tracing::trace!(from, into, moved = moved.len(), "merging menu groups");
        groups[into].extend(moved);
    }
}

/// Returns `(owning group, target group)` for the first mergeable reference.
fn find_group_merge(groups: &[Group]) -> Option<(usize, usize)> {
    for (i, group) in groups.iter().enumerate() {
        for entry in group {
            let Some(position) = &entry.position else {
                continue;
            };
            if !position.relationship.is_item_level() {
                continue;
            }
            if let Some(target) = find_other_group(groups, i, &position.command) {
                return Some((i, target));
            }
        }
    }
    None
}

/// First group, other than `owner`, that contains an item with `command`.
fn find_other_group(groups: &[Group], owner: usize, command: &str) -> Option<usize> {
    groups
        .iter()
        .enumerate()
        .position(|(j, g)| j != owner && g.iter().any(|e| e.command() == Some(command)))
}

fn sort_items_in_group(group: Group) -> Group {
    let original_order: Vec<usize> = (0..group.len()).collect();
    // Later duplicates win.
    let command_to_index: HashMap<&str, usize> = group
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.command().map(|c| (c, i)))
        .collect();

    let mut edges: EdgeMap = EdgeMap::new();
    for (i, entry) in group.iter().enumerate() {
        let Some(position) = &entry.position else {
            continue;
        };
        let Some(&to) = command_to_index.get(position.command.as_str()) else {
            continue;
        };
        match position.relationship {
            Relationship::Before => {
                edges.add_edge(to, i);
            }
            Relationship::After => {
                edges.add_edge(i, to);
            }
            _ => {}
        }
    }

    let sorted = topsort_with_dropped(&original_order, &edges);
    for (v, w) in &sorted.dropped {
        tracing::debug!(
            item = group[*v].command(),
            dependency = group[*w].command(),
            "ignoring conflicting menu item position"
        );
    }
    reorder(group, &sorted.order)
}

fn sort_groups(groups: Vec<Group>) -> Vec<Group> {
    let original_order: Vec<usize> = (0..groups.len()).collect();
    let mut edges: EdgeMap = EdgeMap::new();

    for (i, group) in groups.iter().enumerate() {
        // Only the first resolvable group rule in a group is respected.
        for entry in group {
            let Some(position) = &entry.position else {
                continue;
            };
            if !position.relationship.is_group_level() {
                continue;
            }
            let Some(to) = find_other_group(&groups, i, &position.command) else {
                continue;
            };
            match position.relationship {
                Relationship::AfterGroupContaining => {
                    edges.add_edge(i, to);
                }
                Relationship::BeforeGroupContaining => {
                    edges.add_edge(to, i);
                }
                _ => {}
            }
            break;
        }
    }

    let sorted = topsort_with_dropped(&original_order, &edges);
    if !sorted.dropped.is_empty() {
        tracing::debug!(
            dropped = sorted.dropped.len(),
            "ignoring conflicting menu group positions"
        );
    }
    reorder(groups, &sorted.order)
}

fn reorder<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect()
}
