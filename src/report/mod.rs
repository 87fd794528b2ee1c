/// Report domain: the analysis data handed to formatters and the
/// per-instance lifecycle every formatter follows.
pub mod domain;
