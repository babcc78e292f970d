//! The slice-of-slices iterator variant used by `pack`/`ipack`: `i[k]` is
//! itself a [`Slice`](crate::ndslice::Slice), synthesized on demand from a
//! base cursor position and a fixed inner shape. Nothing is materialized
//! up front — only a small stack value is constructed per read, in keeping
//! with this crate's "iterator, not allocation" approach to composed views.

use super::Cursor;

#[derive(Clone, Copy)]
pub struct Packed<C, Fun> {
    base: C,
    make_inner: Fun,
}

impl<C, Fun, Out> Packed<C, Fun>
where
    C: Cursor,
    Fun: Fn(C::Item) -> Out + Copy,
{
    /// `make_inner` turns the base cursor's item at a given outer position
    /// (typically a raw starting pointer/offset) into the inner view.
    pub fn new(base: C, make_inner: Fun) -> Self {
        Packed { base, make_inner }
    }
}

impl<C, Fun, Out> Cursor for Packed<C, Fun>
where
    C: Cursor,
    Fun: Fn(C::Item) -> Out + Copy,
{
    type Item = Out;

    unsafe fn get(&self, k: isize) -> Out {
        (self.make_inner)(self.base.get(k))
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
    fn packed_synthesizes_a_fresh_view_per_read() {
        let data = [0i32, 1, 2, 3, 4, 5];
        let base = unsafe { Pointer::new(data.as_ptr()) };
        // outer axis walks by 3 (the inner pack size); each read yields a
        // 3-element window starting at that pointer.
        let strided_outer = crate::ndslice::iterator::Strided::new(base, 3);
        let packed = Packed::new(strided_outer, |ptr: &i32| {
            let base_ptr = ptr as *const i32;
            unsafe { std::slice::from_raw_parts(base_ptr, 3) }
        });
        unsafe {
            assert_eq!(packed.get(0), &[0, 1, 2]);
            assert_eq!(packed.get(1), &[3, 4, 5]);
        }
    }
}
