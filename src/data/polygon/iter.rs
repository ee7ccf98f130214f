use crate::data::DirectedEdge;
use crate::data::Point;

pub struct EdgeIter<'a, T: 'a> {
  pub(crate) vertices: &'a [Point<T, 2>],
  pub(crate) index: usize,
}

impl<T> Clone for EdgeIter<'_, T> {
  fn clone(&self) -> Self {
    EdgeIter {
      vertices: self.vertices,
      index: self.index,
    }
  }
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T>;

  fn next(&mut self) -> Option<Self::Item> {
    let dst = self.vertices.get(self.index)?;
    let prev = self.index.checked_sub(1).unwrap_or(self.vertices.len() - 1);
    self.index += 1;
    Some(DirectedEdge {
      src: &self.vertices[prev],
      dst,
    })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {
  fn len(&self) -> usize {
    self.vertices.len().saturating_sub(self.index)
  }
}
