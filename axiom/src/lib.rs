/*! Assembles knowledge bases for classic problems in knowledge representation on top of
[`axiom_fol`], and traces their assembly and validation. */
#[macro_use]
extern crate tracing;

pub mod problems;
pub mod trace;
#[cfg(test)]
mod test_prelude;
