//! The paginator: lifecycle, navigation state machine, and control sync.
//!
//! [`Paginator`] partitions a container's element children into fixed-size
//! [`Page`]s, builds the navigation controls, and tracks the current page,
//! keeping the controls' visual state (`active` link, `disabled` paddles)
//! consistent with it. `destroy` reverses the whole transform, returning
//! the children to the container in their original order.
//!
//! The built state is carried as an `Option` payload rather than a flag:
//! operations that require it simply cannot touch pages or controls while
//! it is absent.

use strum_macros::Display;

use crate::error::{NavError, PaginatorError};
use crate::page::Page;
use crate::settings::Settings;
use crate::surface::Surface;

/// Class of the wrapper element owning all page containers.
pub const WRAP_CLASS: &str = "pagination-pages";
/// Class of the navigation root element.
pub const NAV_CLASS: &str = "pagination-nav";
/// Class of the numbered-links block inside the navigation root.
pub const NUMBERS_CLASS: &str = "pagination-numbers";
/// Class shared by both paddle controls.
pub const PADDLE_CLASS: &str = "pagination-paddle";
/// Marker class on the numbered link of the current page.
pub const ACTIVE_CLASS: &str = "active";
/// Marker class on a paddle that is at its boundary.
pub const DISABLED_CLASS: &str = "disabled";

/// Class of the page container at `index` (1-based in the class name,
/// matching the rendered link labels).
#[must_use]
pub fn page_class(index: usize) -> String {
    format!("page-{}", index + 1)
}

/// One of the two stepping controls.
///
/// Renders to its class-name token (`prev` / `next`), which combines with
/// [`PADDLE_CLASS`] on the control element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Paddle {
    /// Steps to the previous page; disabled on the first page.
    Prev,
    /// Steps to the next page; disabled on the last page.
    Next,
}

/// Handler invoked with the requested page when navigation is rejected.
pub type InvalidPageHandler = Box<dyn FnMut(isize)>;

/// Navigation control handles. Sub-controls exist only when the
/// corresponding setting is enabled.
///
/// The numbered-links block element itself needs no handle here: it lives
/// and dies with `root`, and the engine only ever touches the links.
struct Nav<H> {
    root: H,
    numbers: Option<Vec<H>>,
    prev_paddle: Option<H>,
    next_paddle: Option<H>,
}

/// Everything that exists only between `build()` and `destroy()`.
struct BuiltState<H> {
    /// Ordered element snapshot taken at build time; authoritative and
    /// immutable for the lifetime of this build.
    children: Vec<H>,
    /// The pages, in order; a page's index is its identity.
    pages: Vec<Page<H>>,
    /// Wrapper element owning all page containers.
    wrap: H,
    /// Navigation controls; `None` when the snapshot was empty.
    nav: Option<Nav<H>>,
    /// Index of the sole visible page. Meaningful while `pages` is
    /// nonempty.
    cur_page: usize,
}

/// Partitions a container's children into pages and navigates among them.
///
/// Construction touches nothing; [`Paginator::build`] performs the
/// transform against a [`Surface`] and [`Paginator::destroy`] reverses it.
/// The paginator holds handles into the surface but never owns the
/// surface itself, so every operation takes it as a parameter.
pub struct Paginator<S: Surface> {
    settings: Settings,
    on_invalid_page: InvalidPageHandler,
    container: S::Handle,
    state: Option<BuiltState<S::Handle>>,
}

impl<S: Surface> std::fmt::Debug for Paginator<S>
where
    S::Handle: std::fmt::Debug,
{
    // Manual impl: the invalid-page handler is an opaque closure.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("settings", &self.settings)
            .field("container", &self.container)
            .field("built", &self.is_built())
            .field("cur_page", &self.cur_page())
            .field("page_count", &self.page_count())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Paginator<S> {
    /// Create a paginator for `container` with the given settings.
    ///
    /// Nothing is read from or written to the surface yet. The
    /// invalid-page handler defaults to a deduplicated warning log;
    /// override it with [`Paginator::with_on_invalid_page`].
    ///
    /// # Errors
    /// Returns [`PaginatorError::InvalidAmount`] when `settings.amount`
    /// is zero.
    pub fn new(container: S::Handle, settings: Settings) -> Result<Self, PaginatorError> {
        settings.validate()?;
        Ok(Paginator {
            settings,
            on_invalid_page: Box::new(|page| {
                let message = format!("went to invalid page: {page}");
                let _ = quire_common::warning::warn_once("nav", &message);
            }),
            container,
            state: None,
        })
    }

    /// Replace the handler invoked with rejected navigation targets.
    #[must_use]
    pub fn with_on_invalid_page(mut self, handler: impl FnMut(isize) + 'static) -> Self {
        self.on_invalid_page = Box::new(handler);
        self
    }

    /// The settings this paginator was constructed with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The target container handle.
    #[must_use]
    pub fn container(&self) -> S::Handle {
        self.container
    }

    /// Whether the paginator is currently built.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.state.is_some()
    }

    /// Index of the current page, while built with at least one page.
    ///
    /// A zero-page build has no current page: nothing is visible and
    /// every navigation target is out of range.
    #[must_use]
    pub fn cur_page(&self) -> Option<usize> {
        self.state
            .as_ref()
            .filter(|s| !s.pages.is_empty())
            .map(|s| s.cur_page)
    }

    /// Number of pages, while built.
    #[must_use]
    pub fn page_count(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.pages.len())
    }

    /// The ordered element snapshot taken at build time, while built.
    #[must_use]
    pub fn snapshot(&self) -> Option<&[S::Handle]> {
        self.state.as_ref().map(|s| s.children.as_slice())
    }

    /// Partition the container's children into pages and build navigation.
    ///
    /// Snapshots the element children (the snapshot is authoritative for
    /// the lifetime of this build), buckets them into
    /// `ceil(len / amount)` hidden page containers inside a wrapper
    /// appended to the container, builds the navigation controls, and
    /// navigates to page 0.
    ///
    /// An empty container builds successfully into zero pages: the empty
    /// wrapper is still created so `destroy` stays uniform, but no
    /// navigation is created and no initial navigation happens, since
    /// there is no page 0 to refer to.
    ///
    /// # Errors
    /// Returns [`PaginatorError::AlreadyBuilt`] when already built.
    pub fn build(&mut self, surface: &mut S) -> Result<&mut Self, PaginatorError> {
        if self.state.is_some() {
            return Err(PaginatorError::AlreadyBuilt);
        }

        // Step 1: snapshot. Only element children participate.
        let children: Vec<S::Handle> = surface
            .children(self.container)
            .into_iter()
            .filter(|&child| surface.is_element(child))
            .collect();

        let wrap = surface.create_element("div");
        surface.add_class(wrap, WRAP_CLASS);
        surface.append_child(self.container, wrap);

        // Steps 2-4: contiguous slices into hidden per-page containers.
        let mut pages = Vec::with_capacity(children.len().div_ceil(self.settings.amount));
        for (index, slice) in children.chunks(self.settings.amount).enumerate() {
            let node = surface.create_element("div");
            surface.add_class(node, &page_class(index));
            let page = Page::new(surface, node);
            surface.append_child(wrap, node);
            for &child in slice {
                page.add(surface, child);
            }
            pages.push(page);
        }
        let has_pages = !pages.is_empty();

        // The built state is installed before navigation exists so that
        // create_nav and the initial go_to_page observe a built paginator.
        self.state = Some(BuiltState {
            children,
            pages,
            wrap,
            nav: None,
            cur_page: 0,
        });

        self.create_nav(surface)?;

        // Step 6: establish the initial visible state.
        if has_pages {
            let _ = self.go_to_page(surface, 0);
        }
        Ok(self)
    }

    /// Build the navigation controls for the current page set.
    ///
    /// The navigation root is appended to the container after the page
    /// wrapper. The numbered-links block precedes both paddles in the
    /// root's child order. Skipped entirely when there are no pages:
    /// controls referencing page 0 would be invalid.
    ///
    /// # Errors
    /// Returns [`PaginatorError::NotBuilt`] when unbuilt.
    fn create_nav(&mut self, surface: &mut S) -> Result<(), PaginatorError> {
        let Some(state) = self.state.as_ref() else {
            return Err(PaginatorError::NotBuilt);
        };
        let page_count = state.pages.len();
        if page_count == 0 {
            return Ok(());
        }

        let root = surface.create_element("div");
        surface.add_class(root, NAV_CLASS);
        surface.append_child(self.container, root);

        let numbers = if self.settings.numbers {
            let block = surface.create_element("div");
            surface.add_class(block, NUMBERS_CLASS);
            let links = (0..page_count)
                .map(|index| {
                    let link = surface.create_element("a");
                    surface.set_attribute(link, "href", "#");
                    let label = surface.create_text(&(index + 1).to_string());
                    surface.append_child(link, label);
                    surface.append_child(block, link);
                    link
                })
                .collect();
            surface.append_child(root, block);
            Some(links)
        } else {
            None
        };

        let (prev_paddle, next_paddle) = if self.settings.paddles {
            let prev = self.create_paddle(surface, Paddle::Prev);
            surface.append_child(root, prev);
            let next = self.create_paddle(surface, Paddle::Next);
            surface.append_child(root, next);
            (Some(prev), Some(next))
        } else {
            (None, None)
        };

        if let Some(state) = self.state.as_mut() {
            state.nav = Some(Nav {
                root,
                numbers,
                prev_paddle,
                next_paddle,
            });
        }
        Ok(())
    }

    /// Create one paddle control, classed and labeled per the settings.
    fn create_paddle(&self, surface: &mut S, which: Paddle) -> S::Handle {
        let paddle = surface.create_element("a");
        surface.set_attribute(paddle, "href", "#");
        surface.add_class(paddle, PADDLE_CLASS);
        surface.add_class(paddle, &which.to_string());
        let text = match which {
            Paddle::Prev => &self.settings.prev_text,
            Paddle::Next => &self.settings.next_text,
        };
        let label = surface.create_text(text);
        surface.append_child(paddle, label);
        paddle
    }

    /// Make `page` the sole visible page and synchronize the controls.
    ///
    /// Rejected targets (unbuilt paginator, negative page, page past the
    /// end) do not surface here: the invalid-page handler is invoked with
    /// the exact requested value, all state is left unchanged, and the
    /// paginator is returned for further chaining. Use
    /// [`Paginator::try_go_to_page`] to observe the tagged error instead.
    ///
    /// Idempotent: navigating to the current page re-applies identical
    /// state.
    pub fn go_to_page(&mut self, surface: &mut S, page: isize) -> &mut Self {
        if self.try_go_to_page(surface, page).is_err() {
            (self.on_invalid_page)(page);
        }
        self
    }

    /// [`Paginator::go_to_page`], reporting rejection to the caller
    /// instead of the invalid-page handler.
    ///
    /// # Errors
    /// [`NavError::NotBuilt`] when unbuilt; [`NavError::OutOfRange`] when
    /// `page` is negative or not below the page count. Nothing is mutated
    /// on either error.
    pub fn try_go_to_page(&mut self, surface: &mut S, page: isize) -> Result<(), NavError> {
        let Some(state) = self.state.as_mut() else {
            return Err(NavError::NotBuilt);
        };
        let index = usize::try_from(page)
            .ok()
            .filter(|&p| p < state.pages.len())
            .ok_or(NavError::OutOfRange(page))?;

        // Sole-visible-page invariant.
        for (i, candidate) in state.pages.iter().enumerate() {
            if i == index {
                surface.show(candidate.container());
            } else {
                surface.hide(candidate.container());
            }
        }
        state.cur_page = index;

        let last = state.pages.len() - 1;
        if let Some(nav) = state.nav.as_ref() {
            if let Some(links) = nav.numbers.as_ref() {
                for (i, &link) in links.iter().enumerate() {
                    if i == index {
                        surface.add_class(link, ACTIVE_CLASS);
                    } else {
                        surface.remove_class(link, ACTIVE_CLASS);
                    }
                }
            }
            if let Some(prev) = nav.prev_paddle {
                set_disabled(surface, prev, index == 0);
            }
            if let Some(next) = nav.next_paddle {
                set_disabled(surface, next, index == last);
            }
        }
        Ok(())
    }

    /// Activation of the numbered link at `index`, as an external click
    /// would trigger it.
    ///
    /// A no-op when numbers are disabled, when no such link exists, or
    /// when the link is already marked active (re-clicking the current
    /// page's link does nothing); otherwise navigates to that page.
    pub fn activate_number(&mut self, surface: &mut S, index: usize) -> &mut Self {
        let link = self
            .state
            .as_ref()
            .and_then(|s| s.nav.as_ref())
            .and_then(|nav| nav.numbers.as_ref())
            .and_then(|links| links.get(index).copied());
        if let Some(link) = link
            && !surface.has_class(link, ACTIVE_CLASS)
            && let Ok(page) = isize::try_from(index)
        {
            let _ = self.go_to_page(surface, page);
        }
        self
    }

    /// Activation of a paddle control, as an external click would trigger
    /// it.
    ///
    /// A no-op when paddles are disabled or the paddle is in its disabled
    /// state; otherwise steps the current page by one in the paddle's
    /// direction.
    pub fn activate_paddle(&mut self, surface: &mut S, which: Paddle) -> &mut Self {
        let paddle_and_cur = self.state.as_ref().and_then(|s| {
            let nav = s.nav.as_ref()?;
            let paddle = match which {
                Paddle::Prev => nav.prev_paddle,
                Paddle::Next => nav.next_paddle,
            }?;
            Some((paddle, s.cur_page))
        });
        let Some((paddle, cur_page)) = paddle_and_cur else {
            return self;
        };
        if surface.has_class(paddle, DISABLED_CLASS) {
            return self;
        }
        let Ok(cur) = isize::try_from(cur_page) else {
            return self;
        };
        let target = match which {
            Paddle::Prev => cur - 1,
            Paddle::Next => cur + 1,
        };
        let _ = self.go_to_page(surface, target);
        self
    }

    /// Reverse the transform: return every child to the container in its
    /// original order and discard the wrapper, navigation, and pages.
    ///
    /// Pages are released in index order; because they hold contiguous
    /// order-preserving slices, re-appending page by page reconstructs the
    /// exact original child sequence.
    ///
    /// # Errors
    /// Returns [`PaginatorError::NotBuilt`] when unbuilt (including a
    /// second `destroy`).
    pub fn destroy(&mut self, surface: &mut S) -> Result<&mut Self, PaginatorError> {
        let state = self.state.take().ok_or(PaginatorError::NotBuilt)?;

        for page in state.pages {
            page.destroy(surface, self.container);
        }
        surface.remove(state.wrap);
        if let Some(nav) = state.nav {
            surface.remove(nav.root);
        }
        Ok(self)
    }
}

/// Put `paddle` into or out of its disabled state.
fn set_disabled<S: Surface>(surface: &mut S, paddle: S::Handle, disabled: bool) {
    if disabled {
        surface.add_class(paddle, DISABLED_CLASS);
    } else {
        surface.remove_class(paddle, DISABLED_CLASS);
    }
}
