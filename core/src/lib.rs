//! This crate implements the data model and operations of rslet, a small
//! single-user version-control system: content-addressed blobs and commits,
//! a staging area, branches, and three-way merges.
//!
//! Storage is abstracted by the [`repo::Repo`] trait. Everything a user can
//! do is a method on [`Repository`].

pub mod merge;
pub mod object;
pub mod path;
pub mod repo;
pub mod stage;

mod repository;
pub use repository::{Modification, Repository, Status};
