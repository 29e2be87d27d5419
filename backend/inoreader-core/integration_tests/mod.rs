mod client;
mod helpers;
mod login;
