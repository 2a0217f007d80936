//! Working-day calculation for the Indonesian calendar, with national
//! holidays fetched from <https://api-harilibur.vercel.app>.

pub mod calendar;
pub mod error;
pub mod provider;
pub mod service;
