//! Error types for the pagination engine.
//!
//! Two distinct failure families, deliberately kept apart:
//!
//! - [`PaginatorError`] - programmer-usage and configuration faults
//!   (operating on an unbuilt paginator, building twice, a zero page
//!   size). Fatal to the call; returned as `Err` and never routed through
//!   the invalid-page handler.
//! - [`NavError`] - recoverable navigation validation. Reported to the
//!   paginator's invalid-page handler; never surfaces from
//!   [`Paginator::go_to_page`](crate::Paginator::go_to_page).

use thiserror::Error;

/// Fatal usage or configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginatorError {
    /// An operation that requires the built state ran before `build()` or
    /// after `destroy()`.
    #[error("paginator is not built; run build() before this operation")]
    NotBuilt,

    /// `build()` ran on a paginator that is already built.
    #[error("paginator is already built; destroy() it before building again")]
    AlreadyBuilt,

    /// The configured items-per-page amount cannot paginate anything.
    #[error("items per page must be at least 1, got {0}")]
    InvalidAmount(usize),
}

/// Recoverable navigation fault, tagged by cause.
///
/// The two causes recover identically (the handler is invoked with the
/// requested page and state is left untouched), but callers of
/// [`Paginator::try_go_to_page`](crate::Paginator::try_go_to_page) can
/// tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    /// Navigation attempted while unbuilt.
    #[error("navigation attempted before build()")]
    NotBuilt,

    /// The requested page is negative or past the last page.
    #[error("page {0} is out of range")]
    OutOfRange(isize),
}
