pub mod clients;
pub mod controller;
pub mod devices;
pub mod health;
pub mod tags;
