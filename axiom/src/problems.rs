/*! Assembles the knowledge bases of a few classic problems in knowledge representation.

Every problem is a [`Theory`] and, for puzzles that ask a question, a query formula whose
free variables are the unknowns. The propositional problems (`1a`–`1c`) and first-order
definitions (`2a`–`2d`) are single formulae with no query.

**Example**:
```rust
let liar = axiom::problems::liar().unwrap();

assert_eq!(6, liar.theory().len());
assert_eq!("CrashedServer(x)", liar.query().unwrap().to_string());
```

[`Theory`]: axiom_fol::syntax::Theory
*/
use crate::trace::{PROBLEM, VALIDATE};
use axiom_fol::{
    encode::{define_by_iff, exactly_one, exactly_one_of, unique_witness},
    engine::{Answer, Engine},
    syntax::{Error, Fof, Pred, Sig, Term, Theory, C, V},
};

/// Is a named knowledge base with an optional query.
#[derive(Clone, Debug)]
pub struct Problem {
    name: &'static str,
    description: &'static str,
    theory: Theory,
    query: Option<Fof>,
}

impl Problem {
    fn new(
        name: &'static str,
        description: &'static str,
        theory: Theory,
        query: Option<Fof>,
    ) -> Self {
        match &query {
            Some(q) => info!(
                event = PROBLEM,
                problem = name,
                formulae = theory.len() as u64,
                query = %q,
            ),
            None => info!(event = PROBLEM, problem = name, formulae = theory.len() as u64),
        }
        Self {
            name,
            description,
            theory,
            query,
        }
    }

    /// Returns the name by which the problem is looked up.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the natural-language statement of the problem.
    pub fn description(&self) -> &str {
        self.description
    }

    /// Returns the knowledge base of the problem.
    pub fn theory(&self) -> &Theory {
        &self.theory
    }

    /// Returns the query of the problem, if it asks one.
    pub fn query(&self) -> Option<&Fof> {
        self.query.as_ref()
    }

    /// Checks that predicates are used consistently across the theory and the query and
    /// that every formula of the theory is a sentence. Returns the joint signature.
    pub fn validate(&self) -> Result<Sig, Error> {
        let result = self
            .theory
            .validate(self.query.as_ref().unwrap_or(&Fof::Top));
        match &result {
            Ok(_) => debug!(event = VALIDATE, problem = self.name, valid = true),
            Err(e) => debug!(
                event = VALIDATE,
                problem = self.name,
                valid = false,
                error = %e,
            ),
        }
        result
    }

    /// Hands the theory and the query of the problem to `engine`. Returns `None` if the
    /// problem has no query.
    pub fn ask<E: Engine>(&self, engine: &E) -> Option<Result<Answer, E::Error>> {
        self.query.as_ref().map(|q| engine.ask(&self.theory, q))
    }
}

fn single(name: &'static str, description: &'static str, formula: Fof) -> Problem {
    Problem::new(name, description, vec![formula].into(), None)
}

/// "If it's summer and we're in California, then it doesn't rain."
pub fn formula_1a() -> Result<Problem, Error> {
    let summer = Pred::new("Summer")?;
    let california = Pred::new("California")?;
    let rain = Pred::new("Rain")?;

    let formula = summer
        .app0()
        .and(california.app0())
        .implies(Fof::not(rain.app0()));
    Ok(single(
        "1a",
        "If it's summer and we're in California, then it doesn't rain.",
        formula,
    ))
}

/// "It's wet if and only if it is raining or the sprinklers are on."
pub fn formula_1b() -> Result<Problem, Error> {
    let rain = Pred::new("Rain")?;
    let wet = Pred::new("Wet")?;
    let sprinklers = Pred::new("Sprinklers")?;

    let formula = wet.app0().iff(rain.app0().or(sprinklers.app0()));
    Ok(single(
        "1b",
        "It's wet if and only if it is raining or the sprinklers are on.",
        formula,
    ))
}

/// "Either it's day or night (but not both)."
pub fn formula_1c() -> Result<Problem, Error> {
    let day = Pred::new("Day")?;
    let night = Pred::new("Night")?;

    let formula = exactly_one_of(vec![day.app0(), night.app0()]);
    Ok(single(
        "1c",
        "Either it's day or night (but not both).",
        formula,
    ))
}

/// "Every person has a parent."
pub fn formula_2a() -> Result<Problem, Error> {
    let person = Pred::new("Person")?;
    let parent = Pred::new("Parent")?;
    let x = V::new("x")?;
    let y = V::new("y")?;

    let formula = Fof::forall(
        x.clone(),
        person
            .app1(&x)
            .implies(Fof::exists(y.clone(), parent.app2(&x, &y))),
    );
    Ok(single("2a", "Every person has a parent.", formula))
}

/// "At least one person has no children."
pub fn formula_2b() -> Result<Problem, Error> {
    let person = Pred::new("Person")?;
    let child = Pred::new("Child")?;
    let x = V::new("x")?;
    let y = V::new("y")?;

    let formula = Fof::exists(
        x.clone(),
        person
            .app1(&x)
            .and(Fof::not(Fof::exists(y.clone(), child.app2(&x, &y)))),
    );
    Ok(single("2b", "At least one person has no children.", formula))
}

/// Defines `Father` in terms of `Male` and `Parent`.
pub fn formula_2c() -> Result<Problem, Error> {
    let male = Pred::new("Male")?;
    let parent = Pred::new("Parent")?;
    let father = Pred::new("Father")?;
    let x = V::new("x")?;
    let y = V::new("y")?;

    let formula = define_by_iff(
        vec![x.clone(), y.clone()],
        male.app1(&x).and(parent.app2(&y, &x)),
        father.app2(&y, &x),
    );
    Ok(single(
        "2c",
        "A male x is the father of y exactly when x is a parent of y.",
        formula,
    ))
}

/// Defines `Granddaughter` in terms of `Female` and `Child`.
pub fn formula_2d() -> Result<Problem, Error> {
    let female = Pred::new("Female")?;
    let child = Pred::new("Child")?;
    let granddaughter = Pred::new("Granddaughter")?;
    let x = V::new("x")?;
    let y = V::new("y")?;
    let z = V::new("z")?;

    let formula = define_by_iff(
        vec![x.clone(), y.clone()],
        granddaughter.app2(&y, &x),
        female.app1(&x).and(Fof::exists(
            z.clone(),
            child.app2(&y, &z).and(child.app2(&z, &x)),
        )),
    );
    Ok(single(
        "2d",
        "x is a granddaughter of y exactly when x is female and a child of a child of y.",
        formula,
    ))
}

/// The liar puzzle: four people make statements about who crashed the server, exactly one
/// of them tells the truth and exactly one of them crashed the server. The query asks who
/// crashed the server.
pub fn liar() -> Result<Problem, Error> {
    let tell_truth = Pred::new("TellTruth")?;
    let crashed_server = Pred::new("CrashedServer")?;

    let mark = C::new("mark")?;
    let john = C::new("john")?;
    let nicole = C::new("nicole")?;
    let susan = C::new("susan")?;
    let people: Vec<Term> = vec![
        mark.clone().into(),
        john.clone().into(),
        nicole.clone().into(),
        susan.clone().into(),
    ];

    let theory = vec![
        // Mark: "It wasn't me!"
        tell_truth
            .app1(&mark)
            .iff(Fof::not(crashed_server.app1(&mark))),
        // John: "It was Nicole!"
        tell_truth.app1(&john).iff(crashed_server.app1(&nicole)),
        // Nicole: "No, it was Susan!"
        tell_truth.app1(&nicole).iff(crashed_server.app1(&susan)),
        // Susan: "Nicole's a liar."
        tell_truth
            .app1(&susan)
            .iff(Fof::not(tell_truth.app1(&nicole))),
        exactly_one(&people, |p| tell_truth.app1(p)),
        exactly_one(&people, |p| crashed_server.app1(p)),
    ];
    let query = crashed_server.app1(V::new("x")?);

    Ok(Problem::new(
        "liar",
        "Mark, John, Nicole and Susan accuse each other of crashing the server; \
         only one of them tells the truth. Who crashed the server?",
        theory.into(),
        Some(query),
    ))
}

/// Axioms of even and odd numbers and their successors. The query asks whether every number
/// has a larger even number.
pub fn ints() -> Result<Problem, Error> {
    let even = Pred::new("Even")?;
    let odd = Pred::new("Odd")?;
    let successor = Pred::new("Successor")?;
    let larger = Pred::new("Larger")?;
    let x = V::new("x")?;
    let y = V::new("y")?;
    let z = V::new("z")?;

    let theory = vec![
        // each number has exactly one successor, which is not equal to itself
        Fof::forall(
            x.clone(),
            unique_witness(&Term::from(&x), &y, &z, |a, b| successor.app2(a, b))?,
        ),
        // each number is either even or odd, but not both
        Fof::forall(x.clone(), exactly_one_of(vec![odd.app1(&x), even.app1(&x)])),
        // the successor of an even number is odd
        Fof::forall_all(
            vec![x.clone(), y.clone()],
            even.app1(&x)
                .and(successor.app2(&x, &y))
                .implies(odd.app1(&y)),
        ),
        // the successor of an odd number is even
        Fof::forall_all(
            vec![x.clone(), y.clone()],
            odd.app1(&x)
                .and(successor.app2(&x, &y))
                .implies(even.app1(&y)),
        ),
        // the successor of a number is larger than the number
        Fof::forall_all(
            vec![x.clone(), y.clone()],
            successor.app2(&x, &y).implies(larger.app2(&y, &x)),
        ),
        // larger is transitive
        Fof::forall_all(
            vec![x.clone(), y.clone(), z.clone()],
            larger
                .app2(&x, &y)
                .and(larger.app2(&y, &z))
                .implies(larger.app2(&x, &z)),
        ),
    ];
    let query = Fof::forall(
        x.clone(),
        Fof::exists(y.clone(), even.app1(&y).and(larger.app2(&y, &x))),
    );

    Ok(Problem::new(
        "ints",
        "Every number has a unique successor that alternates between even and odd and is \
         larger than it. Does every number have a larger even number?",
        theory.into(),
        Some(query),
    ))
}

/// Returns every problem, in presentation order.
pub fn catalog() -> Result<Vec<Problem>, Error> {
    Ok(vec![
        formula_1a()?,
        formula_1b()?,
        formula_1c()?,
        formula_2a()?,
        formula_2b()?,
        formula_2c()?,
        formula_2d()?,
        liar()?,
        ints()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use axiom_fol::{engine::Binding, syntax::Formula};

    #[test]
    fn propositional() {
        assert_eq!(
            "(Summer() ∧ California()) → (¬Rain())",
            formula_1a().unwrap().theory().to_string()
        );
        assert_eq!(
            "Wet() ⇔ (Rain() ∨ Sprinklers())",
            formula_1b().unwrap().theory().to_string()
        );
        assert_eq!(
            "(Day() ∨ Night()) ∧ (¬(Day() ∧ Night()))",
            formula_1c().unwrap().theory().to_string()
        );
    }

    #[test]
    fn first_order() {
        assert_eq!(
            "∀ x. (Person(x) → (∃ y. Parent(x, y)))",
            formula_2a().unwrap().theory().to_string()
        );
        assert_eq!(
            "∃ x. (Person(x) ∧ (¬(∃ y. Child(x, y))))",
            formula_2b().unwrap().theory().to_string()
        );
        assert_eq!(
            "∀ x. (∀ y. ((Male(x) ∧ Parent(y, x)) ⇔ Father(y, x)))",
            formula_2c().unwrap().theory().to_string()
        );
        assert_eq!(
            "∀ x. (∀ y. (Granddaughter(y, x) ⇔ (Female(x) ∧ (∃ z. (Child(y, z) ∧ Child(z, x))))))",
            formula_2d().unwrap().theory().to_string()
        );
    }

    #[test]
    fn catalog_is_valid() {
        let problems = catalog().unwrap();
        assert_eq!(
            vec!["1a", "1b", "1c", "2a", "2b", "2c", "2d", "liar", "ints"],
            problems.iter().map(Problem::name).collect::<Vec<_>>()
        );
        for problem in &problems {
            assert!(problem.validate().is_ok(), "{} is not valid", problem.name());
            assert!(!problem.description().is_empty());
        }
    }

    #[test]
    fn round_trip() {
        for problem in catalog().unwrap() {
            let formulae = problem.theory().iter().chain(problem.query());
            for formula in formulae {
                assert_eq!(formula, &formula.to_string().parse::<Fof>().unwrap());
                assert_eq!(formula, &format!("{:?}", formula).parse::<Fof>().unwrap());
            }
            let text = problem
                .theory()
                .iter()
                .map(|f| format!("{};\n", f))
                .collect::<String>();
            assert_eq!(problem.theory(), &text.parse::<Theory>().unwrap());
        }
    }

    #[test]
    fn liar_knowledge_base() {
        let liar = liar().unwrap();
        let theory = liar.theory();
        assert_eq!(6, theory.len());
        assert!(theory[..4].iter().all(|f| matches!(f, Fof::Iff(_))));
        for exactly_one in &theory[4..] {
            match exactly_one {
                Fof::And(this) => {
                    assert_eq!(4, this.left().disjuncts().len());
                    assert_eq!(6, this.right().conjuncts().len());
                }
                _ => panic!("expecting a conjunction, found {}", exactly_one),
            }
        }
        assert_eq!(
            "TellTruth('mark) ⇔ (¬CrashedServer('mark))",
            theory[0].to_string()
        );
        assert_eq!(
            "¬(CrashedServer('mark) ∧ CrashedServer('john))",
            theory[5].conjuncts()[1].to_string()
        );
        assert_eq!(4, liar.validate().unwrap().constants().len());
    }

    #[test]
    fn liar_answer() {
        let liar = liar().unwrap();
        let answer = liar.ask(&BruteForce).unwrap().unwrap();

        let mut expected = Binding::new();
        expected.insert(V::new("x").unwrap(), C::new("mark").unwrap());
        assert_eq!(Answer::Bindings(vec![expected]), answer);
    }

    #[test]
    fn entailment() {
        let problem = formula_1a().unwrap();
        assert!(problem.ask(&BruteForce).is_none());

        let summer = Pred::new("Summer").unwrap().app0();
        let california = Pred::new("California").unwrap().app0();
        let rain = Pred::new("Rain").unwrap().app0();

        let mut theory = problem.theory().clone();
        theory.extend(vec![summer.clone(), california]);
        assert_eq!(
            Answer::Entailed(true),
            BruteForce.ask(&theory, &Fof::not(rain.clone())).unwrap()
        );

        let mut theory = problem.theory().clone();
        theory.push(summer);
        assert_eq!(
            Answer::Entailed(false),
            BruteForce.ask(&theory, &Fof::not(rain)).unwrap()
        );
    }

    #[test]
    fn ints_axioms() {
        let ints = ints().unwrap();
        let theory = ints.theory();
        assert_eq!(6, theory.len());
        assert!(theory.iter().all(|f| f.free_vars().is_empty()));
        assert_eq!(
            "∀ x. (∃ y. (Even(y) ∧ Larger(y, x)))",
            ints.query().unwrap().to_string()
        );
        assert_eq!(
            "∀ x. ((Odd(x) ∨ Even(x)) ∧ (¬(Odd(x) ∧ Even(x))))",
            theory[1].to_string()
        );
        assert_eq!(
            "∀ x. (∀ y. ((Even(x) ∧ Successor(x, y)) → Odd(y)))",
            theory[2].to_string()
        );
        assert_eq!(
            "∀ x. (∀ y. (Successor(x, y) → Larger(y, x)))",
            theory[4].to_string()
        );
        assert_eq!(
            "∀ x. (∀ y. (∀ z. ((Larger(x, y) ∧ Larger(y, z)) → Larger(x, z))))",
            theory[5].to_string()
        );
    }

    #[test]
    fn successor_instance() {
        let ints = ints().unwrap();
        let n = C::new("n").unwrap();
        let instance = match &ints.theory()[0] {
            Fof::Forall(this) => this.formula().instantiate(this.variable(), &n),
            f => panic!("expecting a universal formula, found {}", f),
        };
        match &instance {
            Fof::Exists(this) => {
                let conjuncts = this.formula().conjuncts();
                assert_eq!(3, conjuncts.len());
                assert_eq!("Successor('n, y)", conjuncts[0].to_string());
                assert_eq!("¬('n = y)", conjuncts[1].to_string());
                assert_eq!("∀ z. (Successor('n, z) → (z = y))", conjuncts[2].to_string());
            }
            f => panic!("expecting an existential formula, found {}", f),
        }
        assert!(instance.check_scope(&[]).is_ok());
    }
}
