//! `cartesian(fields...)`: the Cartesian product of several fields, each
//! over its own index sub-space, combined by tupling.
//!
//! Rust has no variadic generics, so (matching how fixed arities are
//! handled elsewhere in this crate, e.g. `Zip::from(a).and(b).and(c)`-style
//! APIs) this module provides fixed-arity combinators rather than one
//! generic-over-N type.
//! `Cartesian2`/`Cartesian3` cover the common cases; higher arities compose
//! by nesting (`Cartesian2<Cartesian2<F, G>, H>`).

use super::Field;

/// The Cartesian product of two fields `F: Field<NA>` and `G: Field<NB>`,
/// presented as a field over `NA + NB` dimensions... except const-generic
/// addition of array lengths isn't stable either, so `Cartesian2` is
/// specialized to pairs of 1-d fields, which covers the common case of
/// combining iota-like axis generators.
#[derive(Clone, Copy, Debug)]
pub struct Cartesian2<F, G> {
    a: F,
    b: G,
}

impl<F: Field<1>, G: Field<1>> Cartesian2<F, G> {
    pub fn new(a: F, b: G) -> Self {
        Cartesian2 { a, b }
    }
}

impl<F: Field<1>, G: Field<1>> Field<2> for Cartesian2<F, G> {
    type Item = (F::Item, G::Item);

    fn at(&self, index: [usize; 2]) -> Self::Item {
        (self.a.at([index[0]]), self.b.at([index[1]]))
    }
}

/// The Cartesian product of three 1-d fields.
#[derive(Clone, Copy, Debug)]
pub struct Cartesian3<F, G, H> {
    a: F,
    b: G,
    c: H,
}

impl<F: Field<1>, G: Field<1>, H: Field<1>> Cartesian3<F, G, H> {
    pub fn new(a: F, b: G, c: H) -> Self {
        Cartesian3 { a, b, c }
    }
}

impl<F: Field<1>, G: Field<1>, H: Field<1>> Field<3> for Cartesian3<F, G, H> {
    type Item = (F::Item, G::Item, H::Item);

    fn at(&self, index: [usize; 3]) -> Self::Item {
        (self.a.at([index[0]]), self.b.at([index[1]]), self.c.at([index[2]]))
    }
}
