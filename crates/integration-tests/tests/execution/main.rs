#![allow(unused_crate_dependencies)]

mod abstract_types;
mod arguments;
mod basic;
mod config;
mod mutations;
mod null_propagation;
mod ordering;
mod panics;
mod variables;
