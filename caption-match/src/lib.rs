//! Human caption matching experiment: quiz generation, answer collection and scoring.

mod common;
pub mod answer;
pub mod config;
pub mod dataset;
pub mod experiment;
pub mod presentation;
pub mod quiz;
pub mod scoring;
