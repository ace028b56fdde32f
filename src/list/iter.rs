use crate::error::Error;
use crate::list::List;
use crate::list::Node;

/// Walks a lazy list, forcing one node and one element per step.
/// Safe on infinite lists as long as only finitely many items are requested.
/// After an error in the spine, iteration stops.
pub struct Iter<T> {
    next: Option<List<T>>,
}

impl<T> Iter<T> {
    pub(crate) fn new(list: List<T>) -> Self {
        Self { next: Some(list) }
    }
}

impl<T: Clone + 'static> Iterator for Iter<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.next.take()?;

        match list.force() {
            Err(err) => Some(Err(err)),
            Ok(Node::Nil) => None,
            Ok(Node::Cons(x, xs)) => {
                self.next = Some(xs);
                Some(x.force())
            },
        }
    }
}
