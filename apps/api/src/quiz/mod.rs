// Stream aptitude quiz: fixed questions, answer ledger, scoring,
// recommendation, and the timed flow that ties them together.

pub mod flow;
pub mod handlers;
pub mod ledger;
pub mod questions;
pub mod recommendation;
pub mod scoring;
pub mod session;
