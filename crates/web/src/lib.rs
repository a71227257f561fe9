//! Fluir web application library.
//!
//! This crate provides the Fluir site as a library, allowing it to be
//! tested and reused (the CLI drives migrations and seeding through it).
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side templates
//! - `SQLite` via sqlx for accounts and sessions
//! - Public pages (registration, login, delivery tracking) plus an admin
//!   panel for account management behind a session-based guard

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
