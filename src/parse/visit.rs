// `enum_dispatch` emits the `Expression` impls here, so the variants must be in scope.
use crate::parse::ast::{Expression, Literal, Operation, Reference, Roll};

pub trait Visitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept,
    {
        node.accept(self)
    }

    fn visit_literal(&mut self, lit: &Literal) -> Self::Output;

    fn visit_reference(&mut self, r: &Reference) -> Self::Output;

    fn visit_roll(&mut self, roll: &Roll) -> Self::Output;

    fn visit_operation(&mut self, op: &Operation) -> Self::Output;
}

#[enum_dispatch::enum_dispatch]
pub trait Accept {
    fn accept<V: Visitor + ?Sized>(&self, v: &mut V) -> V::Output;
}

impl Accept for Literal {
    fn accept<V: Visitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_literal(self)
    }
}

impl Accept for Reference {
    fn accept<V: Visitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_reference(self)
    }
}

impl Accept for Roll {
    fn accept<V: Visitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_roll(self)
    }
}

impl Accept for Operation {
    fn accept<V: Visitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_operation(self)
    }
}
