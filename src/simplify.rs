use crate::common::*;
use crate::parse::{
    ast::*,
    visit::{Accept, Visitor},
};
use crate::scope::Scope;
use std::borrow::Cow;

impl Expression {
    /// Folds and cancels literal arithmetic without rolling any dice.
    ///
    /// Returns [`Cow::Borrowed`] holding `self` when nothing could be simplified.
    ///
    /// # Examples
    /// ```
    /// # use dice_calc::parse;
    /// let expr = parse("1d6 + 5 - 2").unwrap();
    /// assert_eq!(expr.simplify().to_string(), "1d6 + 3");
    /// ```
    pub fn simplify(&self) -> Cow<'_, Self> {
        self.simplify_with(&())
    }

    /// Like [`simplify`](Self::simplify), additionally replacing every variable bound in
    /// `scope` with its value.
    pub fn simplify_with<S: Scope + ?Sized>(&self, scope: &S) -> Cow<'_, Self> {
        match self.accept(&mut Simplifier { scope }) {
            Some(simplified) => Cow::Owned(simplified),
            None => Cow::Borrowed(self),
        }
    }
}

/// Rewrites a tree bottom-up. A visit yields `None` when the node is left as is.
struct Simplifier<'s, S: ?Sized> {
    scope: &'s S,
}

impl<S: Scope + ?Sized> Visitor for Simplifier<'_, S> {
    type Output = Option<Expression>;

    fn visit_literal(&mut self, _lit: &Literal) -> Self::Output {
        None
    }

    fn visit_reference(&mut self, r: &Reference) -> Self::Output {
        self.scope.get(&r.name).map(Expression::from)
    }

    fn visit_roll(&mut self, _roll: &Roll) -> Self::Output {
        None
    }

    fn visit_operation(&mut self, op: &Operation) -> Self::Output {
        let new_left = op.left.accept(self);
        let new_right = op.right.accept(self);
        let left = new_left.as_ref().unwrap_or(&*op.left);
        let right = new_right.as_ref().unwrap_or(&*op.right);

        if let (Some(l), Some(r)) = (left.as_literal(), right.as_literal()) {
            return Some(op.op.apply(l, r).into());
        }
        if let Some(merged) = merge_left(left, op.op, right) {
            return Some(merged);
        }
        if new_left.is_none() && new_right.is_none() {
            return None;
        }

        let left = new_left.unwrap_or_else(|| (*op.left).clone());
        let right = new_right.unwrap_or_else(|| (*op.right).clone());
        Some(Operation::new(op.op, left, right).into())
    }
}

/// Merges `(far_left op1 lit1) op2 lit2` into `far_left op lit` when `op1` and `op2`
/// share a precedence level.
fn merge_left(left: &Expression, op2: BinaryOperator, right: &Expression) -> Option<Expression> {
    let lit2 = right.as_literal()?;
    let inner = match left {
        Expression::Operation(inner) if inner.op.precedence() == op2.precedence() => inner,
        _ => return None,
    };
    let lit1 = inner.right.as_literal()?;
    let far_left = (*inner.left).clone();

    Some(match combine(inner.op, lit1, op2, lit2) {
        Some((op, lit)) => Operation::new(op, far_left, lit.into()).into(),
        None => far_left,
    })
}

/// Combines two literals applied in sequence by operators of equal precedence.
///
/// Returns `None` if they cancel out.
fn combine(
    op1: BinaryOperator,
    lit1: Float,
    op2: BinaryOperator,
    lit2: Float,
) -> Option<(BinaryOperator, Float)> {
    use BinaryOperator::*;

    let precedence = op1.precedence();
    if op1 == op2 {
        let combined = match precedence {
            Precedence::Additive => lit1 + lit2,
            Precedence::Multiplicative => lit1 * lit2,
        };
        return Some((op1, combined));
    }
    if lit1 == lit2 {
        return None;
    }

    let (forward, inverse) = if op1.is_inverse() {
        (lit2, lit1)
    } else {
        (lit1, lit2)
    };
    Some(match precedence {
        Precedence::Additive => {
            let net = forward - inverse;
            if net >= 0.0 {
                (Add, net)
            } else {
                (Sub, -net)
            }
        }
        Precedence::Multiplicative => {
            if forward.abs() >= inverse.abs() {
                (Mul, forward / inverse)
            } else {
                (Div, inverse / forward)
            }
        }
    })
}
