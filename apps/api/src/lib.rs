//! Backend for the personal portfolio site: status probes, contact form
//! submissions, and resume downloads with simple analytics, backed by
//! PostgreSQL. The served PDF itself is produced ahead of time by the
//! `render-resume` binary.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;
