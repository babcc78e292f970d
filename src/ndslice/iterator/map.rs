//! The `Map` iterator variant: `i[k] = fun(base[k])`. Used to back
//! `Slice::map`/`vmap` (see `lazy.rs`); `fun` must be pure, since it may be
//! called any number of times (zero, once, or repeatedly) for a given `k`.

use super::Cursor;

#[derive(Clone, Copy)]
pub struct Map<C, Fun> {
    base: C,
    fun: Fun,
}

impl<C, Fun, Out> Map<C, Fun>
where
    C: Cursor,
    Fun: Fn(C::Item) -> Out + Copy,
{
    pub fn new(base: C, fun: Fun) -> Self {
        Map { base, fun }
    }
}

impl<C, Fun, Out> Cursor for Map<C, Fun>
where
    C: Cursor,
    Fun: Fn(C::Item) -> Out + Copy,
{
    type Item = Out;

    unsafe fn get(&self, k: isize) -> Out {
        (self.fun)(self.base.get(k))
    }

    fn advance(&mut self, k: isize) {
        self.base.advance(k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndslice::iterator::Pointer;

    #[test]
    fn map_applies_fun_lazily_on_each_read() {
        let data = [1i32, 2, 3];
        let base = unsafe { Pointer::new(data.as_ptr()) };
        let mapped = Map::new(base, |x: &i32| x * 10);
        unsafe {
            assert_eq!(mapped.get(0), 10);
            assert_eq!(mapped.get(2), 30);
        }
    }
}
