//! `kronecker<fun=product>(fields...)`: like [`Cartesian2`]/[`Cartesian3`]
//! but combining per-axis values through a caller-supplied reduction
//! instead of tupling them.

use super::Field;

#[derive(Clone, Copy)]
pub struct Kronecker2<F, G, Fun> {
    a: F,
    b: G,
    fun: Fun,
}

impl<F, G, Fun, Out> Kronecker2<F, G, Fun>
where
    F: Field<1>,
    G: Field<1>,
    Fun: Fn(F::Item, G::Item) -> Out + Copy,
{
    pub fn new(a: F, b: G, fun: Fun) -> Self {
        Kronecker2 { a, b, fun }
    }
}

impl<F, G, Fun, Out> Field<2> for Kronecker2<F, G, Fun>
where
    F: Field<1>,
    G: Field<1>,
    Fun: Fn(F::Item, G::Item) -> Out + Copy,
{
    type Item = Out;

    fn at(&self, index: [usize; 2]) -> Out {
        (self.fun)(self.a.at([index[0]]), self.b.at([index[1]]))
    }
}

#[derive(Clone, Copy)]
pub struct Kronecker3<F, G, H, Fun> {
    a: F,
    b: G,
    c: H,
    fun: Fun,
}

impl<F, G, H, Fun, Out> Kronecker3<F, G, H, Fun>
where
    F: Field<1>,
    G: Field<1>,
    H: Field<1>,
    Fun: Fn(F::Item, G::Item, H::Item) -> Out + Copy,
{
    pub fn new(a: F, b: G, c: H, fun: Fun) -> Self {
        Kronecker3 { a, b, c, fun }
    }
}

impl<F, G, H, Fun, Out> Field<3> for Kronecker3<F, G, H, Fun>
where
    F: Field<1>,
    G: Field<1>,
    H: Field<1>,
    Fun: Fn(F::Item, G::Item, H::Item) -> Out + Copy,
{
    type Item = Out;

    fn at(&self, index: [usize; 3]) -> Out {
        (self.fun)(self.a.at([index[0]]), self.b.at([index[1]]), self.c.at([index[2]]))
    }
}
