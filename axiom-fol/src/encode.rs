/*! Implements reusable patterns for encoding constraint problems as first-order formulae.

The patterns are pure functions that assemble formulae out of the [`syntax`] algebra. Most
of them take a closure that builds the formula to constrain for a single entity (or a pair
of entities for relations), so the same pattern serves every predicate of a problem.

**Example**:
```rust
use axiom_fol::{encode::exactly_one, syntax::{C, Pred, Term}};

let crashed = Pred::new("CrashedServer").unwrap();
let people: Vec<Term> = vec![C::new("mark").unwrap().into(), C::new("john").unwrap().into()];

let formula = exactly_one(&people, |p| crashed.app1(p));
assert_eq!(
    "(CrashedServer('mark) ∨ CrashedServer('john)) ∧ (¬(CrashedServer('mark) ∧ CrashedServer('john)))",
    formula.to_string(),
);
```

[`syntax`]: crate::syntax
*/
use crate::syntax::{and_list, or_list, Error, Fof, Formula, Term, V};
use itertools::Itertools;

/// Returns the disjunction of `p(e)` for every entity `e` in `entities`, in order.
pub fn at_least_one<F>(entities: &[Term], p: F) -> Fof
where
    F: Fn(&Term) -> Fof,
{
    or_list(entities.iter().map(p))
}

/// Returns the conjunction of `¬(p(eᵢ) ∧ p(eⱼ))` for every pair of entities with `i < j`.
///
/// The conjuncts are ordered by the outer index first, so `[a, b, c]` yields the exclusions
/// of `(a, b)`, `(a, c)` and then `(b, c)`. Fewer than two entities yield [`Fof::Top`].
pub fn pairwise_exclusion<F>(entities: &[Term], p: F) -> Fof
where
    F: Fn(&Term) -> Fof,
{
    and_list(
        entities
            .iter()
            .tuple_combinations()
            .map(|(first, second)| Fof::not(p(first).and(p(second)))),
    )
}

/// Returns a formula that holds exactly when `p(e)` holds for one and only one of `entities`.
///
/// The result is always the conjunction of [`at_least_one`] and [`pairwise_exclusion`],
/// even when there are fewer than two entities.
pub fn exactly_one<F>(entities: &[Term], p: F) -> Fof
where
    F: Fn(&Term) -> Fof,
{
    at_least_one(entities, &p).and(pairwise_exclusion(entities, &p))
}

/// Returns a formula that holds exactly when one and only one of `formulae` holds.
///
/// Unlike [`exactly_one`], the alternatives are arbitrary formulae, such as the different
/// predicates of a single individual.
///
/// **Example**:
/// ```rust
/// # use axiom_fol::{encode::exactly_one_of, syntax::{Pred, V}};
/// let x = V::new("x").unwrap();
/// let odd = Pred::new("Odd").unwrap().app1(&x);
/// let even = Pred::new("Even").unwrap().app1(&x);
///
/// assert_eq!(
///     "(Odd(x) ∨ Even(x)) ∧ (¬(Odd(x) ∧ Even(x)))",
///     exactly_one_of(vec![odd, even]).to_string(),
/// );
/// ```
pub fn exactly_one_of(formulae: Vec<Fof>) -> Fof {
    let exclusions = formulae
        .iter()
        .tuple_combinations()
        .map(|(first, second)| Fof::not(first.clone().and(second.clone())))
        .collect::<Vec<_>>();
    or_list(formulae).and(and_list(exclusions))
}

/// Defines a relation by a biconditional: returns `definiens ⇔ definiendum`, universally
/// closed over `variables` with the first variable outermost.
///
/// **Example**:
/// ```rust
/// # use axiom_fol::{encode::define_by_iff, syntax::{Pred, V}};
/// let x = V::new("x").unwrap();
/// let y = V::new("y").unwrap();
/// let male = Pred::new("Male").unwrap();
/// let parent = Pred::new("Parent").unwrap();
/// let father = Pred::new("Father").unwrap();
///
/// let formula = define_by_iff(
///     vec![x.clone(), y.clone()],
///     male.app1(&x).and(parent.app2(&y, &x)),
///     father.app2(&y, &x),
/// );
/// assert_eq!(
///     "∀ x. (∀ y. ((Male(x) ∧ Parent(y, x)) ⇔ Father(y, x)))",
///     formula.to_string(),
/// );
/// ```
pub fn define_by_iff(variables: Vec<V>, definiens: Fof, definiendum: Fof) -> Fof {
    Fof::forall_all(variables, definiens.iff(definiendum))
}

/// Returns the universal closure of `formula` over its free variables, in the order of
/// their first occurrence. A sentence is returned unchanged.
pub fn universal_closure(formula: Fof) -> Fof {
    let free = formula.free_vars().into_iter().cloned().collect();
    Fof::forall_all(free, formula)
}

/// Returns a formula stating that `x` is related by `relation` to exactly one individual
/// other than itself:
///
/// `∃ y. ((R(x, y) ∧ ¬(x = y)) ∧ (∀ z. (R(x, z) → z = y)))`
///
/// `x` may be a constant or a variable bound elsewhere; `y` and `z` are bound by the
/// formula itself. Fails with [`Error::MalformedFormula`] if `y` and `z` are the same
/// variable or if `x` is one of them, since the binders would capture it.
///
/// [`Error::MalformedFormula`]: crate::syntax::Error::MalformedFormula
pub fn unique_witness<F>(x: &Term, y: &V, z: &V, relation: F) -> Result<Fof, Error>
where
    F: Fn(&Term, &Term) -> Fof,
{
    if y == z {
        return Err(Error::malformed(
            "unique_witness",
            "distinct witness variables",
            format!("`{}` twice", y),
        ));
    }
    if let Some(v) = x.as_var().filter(|v| *v == y || *v == z) {
        return Err(Error::malformed(
            "unique_witness",
            format!("a subject other than `{}` and `{}`", y, z),
            format!("`{}`", v),
        ));
    }

    let witness = Term::from(y);
    let other = Term::from(z);
    Ok(Fof::exists(
        y.clone(),
        and_list(vec![
            relation(x, &witness),
            Fof::not(x.clone().equals(witness.clone())),
            Fof::forall(
                z.clone(),
                relation(x, &other).implies(other.equals(witness)),
            ),
        ]),
    ))
}
