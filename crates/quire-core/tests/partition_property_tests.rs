//! Property tests for the partition algorithm: coverage, order
//! preservation, and the build/destroy round trip, over arbitrary item
//! counts and page sizes.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use quire_core::{Paginator, Settings};
use quire_dom::{ElementTree, NodeId};

/// Bound the search space: item counts and page sizes beyond this add
/// nothing but runtime.
const MAX_ITEMS: usize = 48;
const MAX_AMOUNT: usize = 12;

fn build_items(n: usize) -> (ElementTree, NodeId, Vec<NodeId>) {
    let mut tree = ElementTree::new();
    let container = tree.alloc_element("ul");
    let root = tree.root();
    tree.append_child(root, container);

    let mut items = Vec::with_capacity(n);
    for _ in 0..n {
        let item = tree.alloc_element("li");
        tree.append_child(container, item);
        items.push(item);
    }
    (tree, container, items)
}

fn settings_with_amount(amount: usize) -> Settings {
    Settings {
        amount,
        ..Settings::default()
    }
}

/// A built paginator over `len` items with `amount` per page, with a
/// silent handler so rejected targets don't spam test output.
fn built(
    len: usize,
    amount: usize,
) -> (ElementTree, NodeId, Vec<NodeId>, Paginator<ElementTree>) {
    let (mut tree, container, items) = build_items(len);
    let mut paginator = Paginator::new(container, settings_with_amount(amount))
        .unwrap()
        .with_on_invalid_page(|_| {});
    let _ = paginator.build(&mut tree).unwrap();
    (tree, container, items, paginator)
}

/// The page containers, in order, via the structural contract.
fn page_nodes(tree: &ElementTree, container: NodeId) -> Vec<NodeId> {
    let wrap = tree.children(container)
        .iter()
        .copied()
        .find(|&c| tree.has_class(c, quire_core::WRAP_CLASS))
        .expect("wrap element");
    tree.children(wrap).to_vec()
}

#[quickcheck]
fn page_count_is_ceiling_division(len: u8, amount: u8) -> TestResult {
    let len = usize::from(len) % MAX_ITEMS;
    let amount = usize::from(amount) % MAX_AMOUNT;
    if amount == 0 {
        return TestResult::discard();
    }

    let (_, _, _, paginator) = built(len, amount);
    TestResult::from_bool(paginator.page_count() == Some(len.div_ceil(amount)))
}

#[quickcheck]
fn pages_partition_the_items_in_order(len: u8, amount: u8) -> TestResult {
    let len = usize::from(len) % MAX_ITEMS;
    let amount = usize::from(amount) % MAX_AMOUNT;
    if amount == 0 {
        return TestResult::discard();
    }

    let (tree, container, items, _) = built(len, amount);

    // Every page holds exactly its contiguous slice...
    for (i, page) in page_nodes(&tree, container).iter().enumerate() {
        let expected = &items[i * amount..((i + 1) * amount).min(len)];
        if tree.children(*page) != expected {
            return TestResult::failed();
        }
    }

    // ...and their concatenation is the original sequence, once each.
    let gathered: Vec<NodeId> = page_nodes(&tree, container)
        .iter()
        .flat_map(|&page| tree.children(page).to_vec())
        .collect();
    TestResult::from_bool(gathered == items)
}

#[quickcheck]
fn build_then_destroy_is_identity(len: u8, amount: u8) -> TestResult {
    let len = usize::from(len) % MAX_ITEMS;
    let amount = usize::from(amount) % MAX_AMOUNT;
    if amount == 0 {
        return TestResult::discard();
    }

    let (mut tree, container, items, mut paginator) = built(len, amount);
    let _ = paginator.destroy(&mut tree).unwrap();

    TestResult::from_bool(tree.children(container) == items)
}

#[quickcheck]
fn navigation_shows_exactly_one_page_and_never_moves_items(
    len: u8,
    amount: u8,
    target: i8,
) -> TestResult {
    let len = usize::from(len) % MAX_ITEMS;
    let amount = usize::from(amount) % MAX_AMOUNT;
    if amount == 0 || len == 0 {
        return TestResult::discard();
    }

    let (mut tree, container, items, mut paginator) = built(len, amount);
    let _ = paginator.go_to_page(&mut tree, isize::from(target));

    // Whether the target was valid or rejected, the partition is intact.
    let gathered: Vec<NodeId> = page_nodes(&tree, container)
        .iter()
        .flat_map(|&page| tree.children(page).to_vec())
        .collect();
    if gathered != items {
        return TestResult::failed();
    }

    // Exactly one page is visible, and it is the current one.
    let pages = page_nodes(&tree, container);
    let visible: Vec<usize> = pages
        .iter()
        .enumerate()
        .filter(|&(_, &page)| !tree.is_hidden(page))
        .map(|(i, _)| i)
        .collect();
    TestResult::from_bool(visible.len() == 1 && Some(visible[0]) == paginator.cur_page())
}
