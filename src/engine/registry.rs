//! Element registry - index allocation for the parallel arrays.
//!
//! Manages the lifecycle of element indices:
//! - ID <-> index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - Parent context stack for nested element creation
//! - Destroy callbacks run on release (observation teardown hangs off these)

use std::cell::RefCell;
use std::collections::HashMap;

use super::arrays;

// =============================================================================
// REGISTRY STATE
// =============================================================================

thread_local! {
    /// Map element ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to element ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if the pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };

    /// Stack of parent indices for nested element creation.
    static PARENT_STACK: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Count of live elements (drives the empty-tree reset).
    static ALLOCATED_COUNT: RefCell<usize> = const { RefCell::new(0) };

    /// Destroy callbacks registered per index.
    static DESTROY_CALLBACKS: RefCell<HashMap<usize, Vec<Box<dyn FnOnce()>>>> =
        RefCell::new(HashMap::new());
}

// =============================================================================
// PARENT CONTEXT STACK
// =============================================================================

/// Get the current parent index (None at root).
pub fn get_current_parent_index() -> Option<usize> {
    PARENT_STACK.with(|stack| stack.borrow().last().copied())
}

/// Push a parent index onto the stack.
pub fn push_parent_context(index: usize) {
    PARENT_STACK.with(|stack| stack.borrow_mut().push(index));
}

/// Pop a parent index from the stack.
pub fn pop_parent_context() {
    PARENT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });
}

// =============================================================================
// INDEX ALLOCATION
// =============================================================================

/// Allocate an index for a new element.
///
/// # Arguments
/// * `id` - Optional element ID. If not provided, one is generated.
///
/// # Returns
/// The allocated index. Allocating an already-registered ID returns the
/// existing index.
pub fn allocate_index(id: Option<&str>) -> usize {
    let element_id = match id {
        Some(id) => id.to_string(),
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("e{}", *counter);
            *counter += 1;
            id
        }),
    };

    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&element_id).copied());
    if let Some(index) = existing {
        return index;
    }

    let index = FREE_INDICES.with(|free| {
        let mut free = free.borrow_mut();
        if let Some(index) = free.pop() {
            index
        } else {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        }
    });

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(element_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, element_id);
    });
    ALLOCATED_COUNT.with(|count| *count.borrow_mut() += 1);

    arrays::ensure_capacity(index);

    index
}

/// Release an index back to the pool.
///
/// Children are released first (recursively), then destroy callbacks run,
/// then the element's columns are cleared. When the last element goes,
/// all arrays are reset to free memory.
pub fn release_index(index: usize) {
    let id = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned());
    let Some(id) = id else { return };

    // Children first, in document order.
    for child in arrays::take_children(index) {
        release_index(child);
    }

    run_destroy_callbacks(index);

    // Unlink from the parent's order list (or the root list).
    arrays::unlink(index);

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&id);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    ALLOCATED_COUNT.with(|count| {
        let mut count = count.borrow_mut();
        *count = count.saturating_sub(1);
    });

    arrays::clear_at(index);

    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });

    // When the tree is empty, reset everything so memory doesn't accumulate
    // across page navigations.
    let is_empty = ALLOCATED_COUNT.with(|count| *count.borrow() == 0);
    if is_empty {
        arrays::reset_arrays();
        FREE_INDICES.with(|free| free.borrow_mut().clear());
        NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    }
}

// =============================================================================
// DESTROY CALLBACKS
// =============================================================================

/// Register a callback to run when the element at `index` is released.
pub fn on_destroy(index: usize, callback: impl FnOnce() + 'static) {
    DESTROY_CALLBACKS.with(|callbacks| {
        callbacks
            .borrow_mut()
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

fn run_destroy_callbacks(index: usize) {
    let callbacks = DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().remove(&index));
    if let Some(callbacks) = callbacks {
        for callback in callbacks {
            callback();
        }
    }
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// Get the index for an element ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get the ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    INDEX_TO_ID.with(|map| map.borrow().contains_key(&index))
}

/// Count of currently allocated elements.
pub fn allocated_count() -> usize {
    ALLOCATED_COUNT.with(|count| *count.borrow())
}

// =============================================================================
// RESET (FOR TESTING)
// =============================================================================

/// Reset all registry state.
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    PARENT_STACK.with(|stack| stack.borrow_mut().clear());
    ALLOCATED_COUNT.with(|count| *count.borrow_mut() = 0);
    DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().clear());
    arrays::reset_arrays();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_allocate_index() {
        setup();

        let idx1 = allocate_index(None);
        let idx2 = allocate_index(None);
        let idx3 = allocate_index(Some("hero"));

        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);
        assert_eq!(idx3, 2);

        assert!(is_allocated(0));
        assert!(is_allocated(2));
        assert!(!is_allocated(3));
        assert_eq!(allocated_count(), 3);
    }

    #[test]
    fn test_allocate_same_id_returns_existing() {
        setup();

        let a = allocate_index(Some("nav"));
        let b = allocate_index(Some("nav"));
        assert_eq!(a, b);
        assert_eq!(allocated_count(), 1);
    }

    #[test]
    fn test_release_and_reuse() {
        setup();

        let idx1 = allocate_index(None);
        let idx2 = allocate_index(None);

        release_index(idx1);
        assert!(!is_allocated(idx1));
        assert!(is_allocated(idx2));

        // The freed index is reused
        let idx3 = allocate_index(None);
        assert_eq!(idx3, idx1);
    }

    #[test]
    fn test_release_recursive() {
        setup();

        let parent = allocate_index(None);
        let child = allocate_index(None);
        arrays::set_parent(child, Some(parent));
        let grandchild = allocate_index(None);
        arrays::set_parent(grandchild, Some(child));

        release_index(parent);
        assert!(!is_allocated(parent));
        assert!(!is_allocated(child));
        assert!(!is_allocated(grandchild));
        assert_eq!(allocated_count(), 0);
    }

    #[test]
    fn test_parent_context() {
        setup();

        assert_eq!(get_current_parent_index(), None);

        push_parent_context(5);
        assert_eq!(get_current_parent_index(), Some(5));

        push_parent_context(10);
        assert_eq!(get_current_parent_index(), Some(10));

        pop_parent_context();
        assert_eq!(get_current_parent_index(), Some(5));

        pop_parent_context();
        assert_eq!(get_current_parent_index(), None);
    }

    #[test]
    fn test_destroy_callback() {
        use std::cell::Cell;
        use std::rc::Rc;

        setup();

        let called = Rc::new(Cell::new(false));
        let called_clone = called.clone();

        let idx = allocate_index(None);
        on_destroy(idx, move || {
            called_clone.set(true);
        });

        assert!(!called.get());
        release_index(idx);
        assert!(called.get());
    }

    #[test]
    fn test_id_mapping() {
        setup();

        let idx = allocate_index(Some("footer"));
        assert_eq!(get_index("footer"), Some(idx));
        assert_eq!(get_id(idx), Some("footer".to_string()));
    }
}
