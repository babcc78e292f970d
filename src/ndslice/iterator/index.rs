//! The `Index`/`Indexed` iterator variant: `i[k] = field[indices[k]]`, a
//! lookup composition of a value cursor and an index-producing cursor.

use super::Cursor;

#[derive(Clone, Copy)]
pub struct Index<Base, Indices> {
    base: Base,
    indices: Indices,
}

impl<Base, Indices> Index<Base, Indices>
where
    Base: Cursor,
    Indices: Cursor<Item = usize>,
{
    pub fn new(base: Base, indices: Indices) -> Self {
        Index { base, indices }
    }
}

impl<Base, Indices> Cursor for Index<Base, Indices>
where
    Base: Cursor,
    Indices: Cursor<Item = usize>,
{
    type Item = Base::Item;

    unsafe fn get(&self, k: isize) -> Self::Item {
        let i = self.indices.get(k);
        self.base.get(i as isize)
    }

    fn advance(&mut self, k: isize) {
        self.indices.advance(k);
    }
}
