//! Browser adapters for the domain abstractions.

pub mod services;
pub mod static_feed;
pub mod timers;

pub use services::{BrowserTimeProvider, ConsoleLogger, MemoryLogger};
pub use static_feed::StaticPriceFeed;
pub use timers::{GlooScheduler, ManualHandle, ManualScheduler};
