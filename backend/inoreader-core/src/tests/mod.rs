mod config;
mod error;
mod login;
mod tags;
