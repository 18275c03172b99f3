//! Sentences and sequents of the object language

pub mod sentence;
pub mod sequent;

pub use sentence::{Atom, Sentence};
pub use sequent::{Sequent, SequentDisplay};
