use axiom_fol::{
    engine::{Answer, Binding, Engine},
    syntax::{Error, Fof, Formula, Pred, Term, Theory, C, V},
};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

// the largest number of ground atoms for which models are enumerated.
const MAX_ATOMS: usize = 16;

#[derive(Error, Debug)]
pub enum BruteForceError {
    #[error(transparent)]
    Syntax(#[from] Error),

    #[error("too many ground atoms to enumerate: {0}")]
    TooManyAtoms(usize),
}

type Fact = (Pred, Vec<C>);

/// Answers queries by enumerating every Herbrand model over the constants of the theory and
/// the query. Constants name distinct individuals.
pub struct BruteForce;

impl BruteForce {
    fn models(theory: &Theory, domain: &[C], atoms: &[Fact]) -> Vec<HashSet<Fact>> {
        (0..1u32 << atoms.len())
            .map(|bits| {
                atoms
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| bits & (1u32 << i) != 0)
                    .map(|(_, atom)| atom.clone())
                    .collect::<HashSet<_>>()
            })
            .filter(|model| {
                theory
                    .iter()
                    .all(|f| eval(f, model, domain, &BTreeMap::new()))
            })
            .collect()
    }
}

impl Engine for BruteForce {
    type Error = BruteForceError;

    fn ask(&self, theory: &Theory, query: &Fof) -> Result<Answer, Self::Error> {
        let sig = theory.validate(query)?;
        let domain = sig.constants().iter().cloned().collect_vec();
        let atoms = sig
            .predicates()
            .values()
            .flat_map(|p| {
                tuples(&domain, p.arity)
                    .into_iter()
                    .map(move |args| (p.symbol.clone(), args))
            })
            .collect_vec();
        if atoms.len() > MAX_ATOMS {
            return Err(BruteForceError::TooManyAtoms(atoms.len()));
        }

        let models = Self::models(theory, &domain, &atoms);
        let vars = query.free_vars().into_iter().cloned().collect_vec();
        let bindings = tuples(&domain, vars.len())
            .into_iter()
            .map(|values| vars.iter().cloned().zip(values).collect::<Binding>())
            .filter(|binding| {
                models
                    .iter()
                    .all(|model| eval(query, model, &domain, binding))
            })
            .collect_vec();

        Ok(Answer::for_query(query, bindings))
    }
}

// every tuple of `arity` elements of `domain`; a single empty tuple when `arity` is zero.
fn tuples(domain: &[C], arity: usize) -> Vec<Vec<C>> {
    (0..arity).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|tuple| {
                domain.iter().map(move |c| {
                    let mut tuple = tuple.clone();
                    tuple.push(c.clone());
                    tuple
                })
            })
            .collect()
    })
}

fn ground(term: &Term, env: &BTreeMap<V, C>) -> Option<C> {
    match term {
        Term::Var(v) => env.get(v).cloned(),
        Term::Const(c) => Some(c.clone()),
    }
}

fn eval(formula: &Fof, model: &HashSet<Fact>, domain: &[C], env: &BTreeMap<V, C>) -> bool {
    match formula {
        Fof::Top => true,
        Fof::Bottom => false,
        Fof::Atom(this) => this
            .terms()
            .iter()
            .map(|t| ground(t, env))
            .collect::<Option<Vec<_>>>()
            .map_or(false, |args| {
                model.contains(&(this.predicate().clone(), args))
            }),
        Fof::Equals(this) => match (ground(this.left(), env), ground(this.right(), env)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        },
        Fof::Not(this) => !eval(this.formula(), model, domain, env),
        Fof::And(this) => {
            eval(this.left(), model, domain, env) && eval(this.right(), model, domain, env)
        }
        Fof::Or(this) => {
            eval(this.left(), model, domain, env) || eval(this.right(), model, domain, env)
        }
        Fof::Implies(this) => {
            !eval(this.premise(), model, domain, env)
                || eval(this.consequence(), model, domain, env)
        }
        Fof::Iff(this) => {
            eval(this.left(), model, domain, env) == eval(this.right(), model, domain, env)
        }
        Fof::Exists(this) => domain.iter().any(|c| {
            let mut env = env.clone();
            env.insert(this.variable().clone(), c.clone());
            eval(this.formula(), model, domain, &env)
        }),
        Fof::Forall(this) => domain.iter().all(|c| {
            let mut env = env.clone();
            env.insert(this.variable().clone(), c.clone());
            eval(this.formula(), model, domain, &env)
        }),
    }
}
