//! Trip summary server.
//!
//! A web application that asks the Google Directions API for a route
//! between two places and answers: how far, how long, how fast, and what
//! will I be travelling on?

pub mod config;
pub mod directions;
pub mod geocode;
pub mod route;
pub mod summary;
pub mod web;
