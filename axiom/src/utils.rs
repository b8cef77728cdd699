use crate::terminal::{Role, Stylus};
use anyhow::{Context, Error};
use axiom::problems::Problem;
use axiom_fol::syntax::{Fof, Sig, Theory};
use itertools::Itertools;
use std::{
    fs,
    io::{stdin, Read},
    path::Path,
};

pub(crate) fn read_theory_from_file(filename: &Path) -> Result<Theory, Error> {
    let contents = fs::read_to_string(filename)
        .with_context(|| format!("failed to read the input file `{}`", filename.display()))?;

    contents
        .parse()
        .context("failed to parse the input theory")
}

pub(crate) fn read_theory_from_stdin() -> Result<Theory, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    let theory = s.parse().context("failed to parse the input theory")?;
    Ok(theory)
}

fn render(formula: &Fof, ascii: bool) -> String {
    if ascii {
        format!("{:?}", formula)
    } else {
        formula.to_string()
    }
}

pub(crate) fn print_problem(problem: &Problem, stylus: &Stylus, ascii: bool) {
    stylus.set(Role::Info);
    println!("{}. {}", problem.name(), problem.description());
    println!();

    stylus.set(Role::Theory);
    problem
        .theory()
        .iter()
        .for_each(|f| println!("  {}", render(f, ascii)));

    if let Some(query) = problem.query() {
        println!();
        stylus.set(Role::Info);
        print!("Query: ");
        stylus.set(Role::Query);
        println!("{}", render(query, ascii));
    }

    println!();
    match problem.validate() {
        Ok(sig) => print_signature(&sig, stylus),
        Err(e) => {
            stylus.set(Role::Error);
            println!("Invalid: {}", e);
        }
    }

    stylus.set(Role::Info);
    println!("\n- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -\n");
}

pub(crate) fn print_signature(sig: &Sig, stylus: &Stylus) {
    let constants = sig.constants().iter().join(", ");
    let predicates = sig.predicates().values().join(", ");

    stylus.set(Role::Info);
    print!("Constants: ");
    stylus.set(Role::Theory);
    println!("{}", constants);
    stylus.set(Role::Info);
    print!("Predicates: ");
    stylus.set(Role::Theory);
    println!("{}", predicates);
}
