/*! Provides an algebra for building propositional and first-order formulae, together with
a set of reusable patterns for encoding constraint problems as knowledge bases that an
external inference engine can consume. */
#[macro_use]
extern crate lalrpop_util;

pub mod encode;
pub mod engine;
pub mod parser;
pub mod syntax;
#[cfg(test)]
mod test_macros;
