pub mod horoscope_controller;

pub use horoscope_controller::{HoroscopeController, HoroscopeResponse};
