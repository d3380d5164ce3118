use super::Cost;

/// A Route through the Graph
///
/// Stores the sequence of Nodes from start to goal (both inclusive) and the total Cost of
/// traversing them. The individual Edge weights along the Path are not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use route_planner::Path;
    /// let path = Path::new(vec!["a", "b", "c"], 42.0);
    ///
    /// assert_eq!(path.nodes(), &["a", "b", "c"]);
    /// assert_eq!(path.cost(), 42.0);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The Nodes on the Path, starting with the start and ending with the goal
    pub fn nodes(&self) -> &[P] {
        &self.path
    }

    /// The number of Nodes on the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Nodes of the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// Returns an Iterator over the `(from, to)` steps of the Path.
    ///
    /// A display layer can use this to draw the Path one segment at a time.
    /// ## Examples
    /// ```
    /// # use route_planner::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 2.0);
    /// let steps: Vec<_> = path.steps().collect();
    ///
    /// assert_eq!(steps, vec![(&'a', &'b'), (&'b', &'c')]);
    /// ```
    pub fn steps(&self) -> impl Iterator<Item = (&P, &P)> + '_ {
        self.path.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Converts every Node of the Path, keeping the Cost
    pub fn map<Q>(self, f: impl FnMut(P) -> Q) -> Path<Q> {
        Path {
            path: self.path.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }

    /// Returns the Nodes of the Path, dropping the Cost
    pub fn into_nodes(self) -> Vec<P> {
        self.path
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn path_index() {
        let path = Path::new(vec![4, 2, 0], 42.0);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
        assert_eq!(path.start(), Some(&4));
        assert_eq!(path.goal(), Some(&0));
    }

    #[test]
    fn path_display() {
        let path = Path::new(vec!["Lahore", "Islamabad"], 280.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 280]: Lahore -> Islamabad");
    }

    #[test]
    fn path_display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn path_map() {
        let path = Path::new(vec![1, 2, 3], 7.5).map(|n| n * 10);

        assert_eq!(path.into_nodes(), vec![10, 20, 30]);
    }
}
