//! Merging menu templates into a menu, and taking them back out.
//!
//! Items are matched by normalized label and by whether they carry a submenu. Matching
//! submenus are merged recursively; matching leaf items are replaced when the incoming item is at
//! least as specific as the one already present.

use crate::{MenuItem, Platform};

/// Merges `item` into `menu`.
///
/// `specificity` ranks where the item came from; pass `f64::INFINITY` for items that should always
/// win. The merged copy remembers it, so later merges of the same label can be compared against it.
pub fn merge(menu: &mut Vec<MenuItem>, item: &MenuItem, specificity: f64, platform: Platform) {
    let mut item = clone_menu_item(item);
    item.specificity = Some(specificity);

    let Some(index) = find_matching_item_index(menu, &item, platform) else {
        add_item_to_menu(item, menu);
        return;
    };

    let matching = &mut menu[index];
    if let Some(children) = item.submenu.take() {
        let target = matching.submenu.get_or_insert_with(Vec::new);
        for child in &children {
            merge(target, child, specificity, platform);
        }
    } else if matching.specificity.is_some_and(|existing| specificity >= existing) {
        tracing::trace!(label = item.label.as_deref(), "replacing menu item");
        *matching = item;
    }
}

/// Removes what [`merge`] added for `item`.
///
/// Submenus are unmerged child by child; an entry is removed once it is a leaf or its submenu is
/// empty.
pub fn unmerge(menu: &mut Vec<MenuItem>, item: &MenuItem, platform: Platform) {
    let Some(index) = find_matching_item_index(menu, item, platform) else {
        return;
    };

    let matching = &mut menu[index];
    if let (Some(children), Some(target)) = (&item.submenu, matching.submenu.as_mut()) {
        for child in children {
            unmerge(target, child, platform);
        }
    }

    if matching.submenu.as_ref().is_none_or(Vec::is_empty) {
        menu.remove(index);
    }
}

/// Drops mnemonic markers (`&`) on platforms that use them.
pub fn normalize_label(label: Option<&str>, platform: Platform) -> Option<String> {
    let label = label?;
    if platform.uses_mnemonics() {
        Some(label.replace('&', ""))
    } else {
        Some(label.to_string())
    }
}

/// Deep copy keeping only the attributes a menu template may set.
///
/// `position`, `specificity` and unrecognised keys are not carried over.
pub fn clone_menu_item(item: &MenuItem) -> MenuItem {
    MenuItem {
        item_type: item.item_type.clone(),
        label: item.label.clone(),
        enabled: item.enabled,
        visible: item.visible,
        command: item.command.clone(),
        submenu: item
            .submenu
            .as_ref()
            .map(|children| children.iter().map(clone_menu_item).collect()),
        command_detail: item.command_detail.clone(),
        role: item.role.clone(),
        accelerator: item.accelerator.clone(),
        position: None,
        specificity: None,
        extra: Default::default(),
    }
}

/// Appends `item`, unless both it and the current last item are separators.
fn add_item_to_menu(item: MenuItem, menu: &mut Vec<MenuItem>) {
    let last_is_separator = menu.last().is_some_and(MenuItem::is_separator);
    if !(item.is_separator() && last_is_separator) {
        menu.push(item);
    }
}

fn find_matching_item_index(
    menu: &[MenuItem],
    item: &MenuItem,
    platform: Platform,
) -> Option<usize> {
    if item.is_separator() {
        return None;
    }
    let label = normalize_label(item.label.as_deref(), platform);
    menu.iter().position(|candidate| {
        normalize_label(candidate.label.as_deref(), platform) == label
            && candidate.submenu.is_some() == item.submenu.is_some()
    })
}
