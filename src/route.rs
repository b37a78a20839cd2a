//! Screen routing table.
//!
//! Three screens exist: the product list (default), the create form and the
//! edit form for one product id. `/` redirects to the list.

use std::fmt;

use crate::state::ProductId;

/// Path of the list screen; also where `/` redirects.
pub const LIST_PATH: &str = "/products";

/// A screen the application can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Product list.
    #[default]
    List,
    /// New product form.
    Create,
    /// Edit form for one product.
    Edit(ProductId),
}

impl Route {
    /// What: Resolve a path to a route.
    ///
    /// Inputs:
    /// - `path`: URL-style path, optionally with a trailing slash
    ///
    /// Output:
    /// - `Some(route)` for `/`, `/products`, `/products/create`, `/products/:id/edit`; `None` otherwise.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        if trimmed == "/" || trimmed == LIST_PATH {
            return Some(Self::List);
        }
        let rest = trimmed.strip_prefix("/products/")?;
        if rest == "create" {
            return Some(Self::Create);
        }
        let id = rest.strip_suffix("/edit")?;
        id.parse::<ProductId>().ok().map(Self::Edit)
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::List => LIST_PATH.to_string(),
            Self::Create => format!("{LIST_PATH}/create"),
            Self::Edit(id) => format!("{LIST_PATH}/{id}/edit"),
        }
    }

    /// Route name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "product-list",
            Self::Create => "product-create",
            Self::Edit(_) => "product-edit",
        }
    }

    /// Screen title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::List => "Product Management",
            Self::Create => "Create Product",
            Self::Edit(_) => "Edit Product",
        }
    }

    /// Last breadcrumb segment.
    #[must_use]
    pub const fn breadcrumb(self) -> &'static str {
        match self {
            Self::List => "Products",
            Self::Create => "Create Product",
            Self::Edit(_) => "Edit Product",
        }
    }

    /// Where "back" leads; `None` on the list screen.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::List => None,
            Self::Create | Self::Edit(_) => Some(Self::List),
        }
    }

    /// Breadcrumb trail from the root to this screen.
    #[must_use]
    pub fn breadcrumbs(self) -> Vec<&'static str> {
        let mut trail = Vec::with_capacity(2);
        if let Some(parent) = self.parent() {
            trail.push(parent.breadcrumb());
        }
        trail.push(self.breadcrumb());
        trail
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
