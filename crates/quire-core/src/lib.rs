//! Pagination engine for element trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Page bucketing** - contiguous, order-preserving partition of a
//!   container's element children into fixed-size [`Page`]s
//! - **Navigation state machine** - a single visible page, numbered links
//!   with an `active` marker, prev/next paddles disabled at the
//!   boundaries
//! - **Reversible transform** - `destroy` returns every child to the
//!   container in its original order
//!
//! The engine talks to the host document exclusively through the
//! [`Surface`] capability trait; the arena tree from `quire-dom`
//! implements it.
//!
//! # Example
//!
//! ```
//! use quire_core::{Paginator, Settings};
//! use quire_dom::ElementTree;
//!
//! let mut tree = ElementTree::new();
//! let container = tree.alloc_element("div");
//! let root = tree.root();
//! tree.append_child(root, container);
//! for _ in 0..10 {
//!     let item = tree.alloc_element("li");
//!     tree.append_child(container, item);
//! }
//!
//! let mut paginator = Paginator::new(container, Settings::default()).unwrap();
//! let _ = paginator.build(&mut tree).unwrap();
//! assert_eq!(paginator.page_count(), Some(4));
//! assert_eq!(paginator.cur_page(), Some(0));
//!
//! let _ = paginator.go_to_page(&mut tree, 2);
//! assert_eq!(paginator.cur_page(), Some(2));
//!
//! let _ = paginator.destroy(&mut tree).unwrap();
//! assert_eq!(tree.children(container).len(), 10);
//! ```

/// Usage, configuration, and navigation error types.
pub mod error;
/// The page component: one group of elements in one container.
pub mod page;
/// The paginator lifecycle and navigation state machine.
pub mod paginator;
/// Immutable, eagerly-validated configuration.
pub mod settings;
/// The rendering-surface capability interface.
pub mod surface;

pub use error::{NavError, PaginatorError};
pub use page::Page;
pub use paginator::{
    ACTIVE_CLASS, DISABLED_CLASS, InvalidPageHandler, NAV_CLASS, NUMBERS_CLASS, PADDLE_CLASS,
    Paddle, Paginator, WRAP_CLASS, page_class,
};
pub use settings::Settings;
pub use surface::Surface;
