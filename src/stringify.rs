use crate::common::Precedence;
use crate::parse::{
    ast::*,
    visit::{Accept, Visitor},
};
use std::fmt;

/// Renders a tree as canonical text: single spaces around operators, and parentheses
/// only where dropping them would change how the text parses.
struct Printer<'f, 'a> {
    f: &'f mut fmt::Formatter<'a>,
}

impl Printer<'_, '_> {
    fn child(&mut self, expr: &Expression, parens: bool) -> fmt::Result {
        if parens {
            self.f.write_str("(")?;
            expr.accept(self)?;
            self.f.write_str(")")
        } else {
            expr.accept(self)
        }
    }
}

impl Visitor for Printer<'_, '_> {
    type Output = fmt::Result;

    fn visit_literal(&mut self, lit: &Literal) -> Self::Output {
        fmt::Display::fmt(lit, self.f)
    }

    fn visit_reference(&mut self, r: &Reference) -> Self::Output {
        fmt::Display::fmt(r, self.f)
    }

    fn visit_roll(&mut self, roll: &Roll) -> Self::Output {
        fmt::Display::fmt(roll, self.f)
    }

    fn visit_operation(&mut self, op: &Operation) -> Self::Output {
        let precedence = op.op.precedence();
        // Left operands may share our precedence since chains associate to the left.
        let left_parens = binds_looser(&op.left, |p| p < precedence);
        let right_parens = binds_looser(&op.right, |p| p <= precedence);

        self.child(&op.left, left_parens)?;
        write!(self.f, " {} ", op.op)?;
        self.child(&op.right, right_parens)
    }
}

fn binds_looser(expr: &Expression, looser: impl Fn(Precedence) -> bool) -> bool {
    expr.precedence().map_or(false, looser)
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut Printer { f })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}{}", self.num, self.sides, self.modifier)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer { f }.visit_operation(self)
    }
}
