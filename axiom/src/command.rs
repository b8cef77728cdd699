use crate::terminal::{Role, Stylus};
use crate::{constants::ASCII_ART, utils::*};
use anyhow::{bail, Context, Error};
use axiom::{
    problems::{catalog, Problem},
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE, VALIDATE},
};
use axiom_fol::syntax::Fof;
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "list", about = "List the available problems")]
    List,
    #[structopt(
        name = "show",
        about = "Print the knowledge base and query of problems"
    )]
    Show {
        #[structopt(help = "Names of the problems to show (all problems if omitted)")]
        names: Vec<String>,
        #[structopt(long = "ascii", help = "Print formulae in ASCII notation")]
        ascii: bool,
    },
    #[structopt(
        name = "check",
        about = "Check a theory for arity mismatches and unbound variables"
    )]
    Check {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input theory file (standard input if omitted)"
        )]
        input: Option<PathBuf>,
        #[structopt(
            short = "q",
            long = "query",
            help = "Query to check against the theory; its free variables are allowed"
        )]
        query: Option<String>,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::List => {
                let problems = catalog().context("failed to assemble the problems")?;
                for problem in problems {
                    stylus.set(Role::Info);
                    print!("{:>6}  ", problem.name());
                    stylus.set(Role::Theory);
                    println!("{}", problem.description());
                }
                Ok(())
            }
            ProcessCommand::Show { names, ascii } => {
                let problems = catalog().context("failed to assemble the problems")?;
                let selected: Vec<&Problem> = if names.is_empty() {
                    problems.iter().collect()
                } else {
                    names
                        .iter()
                        .map(|name| match problems.iter().find(|p| p.name() == name) {
                            Some(problem) => Ok(problem),
                            None => bail!("unknown problem `{}`", name),
                        })
                        .collect::<Result<_, _>>()?
                };
                selected
                    .into_iter()
                    .for_each(|p| print_problem(p, stylus, ascii));
                Ok(())
            }
            ProcessCommand::Check { input, query } => {
                let theory = if let Some(input) = input {
                    read_theory_from_file(&input)?
                } else {
                    read_theory_from_stdin()?
                };
                let query = match query {
                    Some(query) => query
                        .parse::<Fof>()
                        .context("failed to parse the query")?,
                    None => Fof::Top,
                };

                stylus.set(Role::Info);
                println!("Checking theory:");
                stylus.set(Role::Theory);
                theory.iter().for_each(|f| println!("  {}", f));
                println!();

                match theory.validate(&query) {
                    Ok(sig) => {
                        debug!(event = VALIDATE, problem = "input", valid = true);
                        print_signature(&sig, stylus);
                        Ok(())
                    }
                    Err(e) => {
                        debug!(
                            event = VALIDATE,
                            problem = "input",
                            valid = false,
                            error = %e,
                        );
                        Err(Error::new(e).context("the theory is not valid"))
                    }
                }
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "axiom",
    about = "A tool for assembling and checking first-order knowledge bases",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = Stylus::new(!self.no_color);

        if !stylus.is_plain() {
            stylus.set(Role::Logo);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = self.log {
            let log = if log.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_JSON_LOG_FILE)
            } else {
                log
            };
            let file = fs::File::create(&log)
                .with_context(|| format!("cannot create the log file `{}`", log.display()))?;
            let logger = JsonLogger::new(file);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
