pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod direct;
pub mod repository;
pub mod screen;
pub mod view;
pub mod viewmodel;
