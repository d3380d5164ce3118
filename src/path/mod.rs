mod generic_path;
pub use generic_path::Path;

/// The Type used for Edge weights and the total Cost of a [`Path`]
pub type Cost = f64;

/// The result of a search between two known Nodes.
///
/// An unreachable goal is a regular outcome of a search, not an error, so it is represented
/// as its own variant instead of an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<P> {
    /// The cheapest Path from start to goal
    Found(Path<P>),
    /// The goal cannot be reached from the start
    NoPathFound,
}

impl<P> SearchOutcome<P> {
    /// `true` if a Path was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The Path, if one was found
    pub fn path(&self) -> Option<&Path<P>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPathFound => None,
        }
    }

    /// Converts into the Path, if one was found
    pub fn into_path(self) -> Option<Path<P>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPathFound => None,
        }
    }

    /// Converts the Nodes of a found Path
    pub fn map<Q>(self, f: impl FnMut(P) -> Q) -> SearchOutcome<Q> {
        match self {
            SearchOutcome::Found(path) => SearchOutcome::Found(path.map(f)),
            SearchOutcome::NoPathFound => SearchOutcome::NoPathFound,
        }
    }
}

impl<P> From<Option<Path<P>>> for SearchOutcome<P> {
    fn from(path: Option<Path<P>>) -> Self {
        path.map_or(SearchOutcome::NoPathFound, SearchOutcome::Found)
    }
}
