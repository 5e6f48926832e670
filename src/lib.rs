//! # Prototype Primes
//!
//! A two-scene walkthrough of the Prototype pattern. Building a
//! [`PrimeHolder`] is slow on purpose: it finds its batch of primes by
//! naive trial division. Making another one from an existing holder is
//! cheap, as long as the copy is a real copy.
//!
//! ## Scenes
//!
//! 1. **Assignment** - a second handle to the same holder. Moving the index
//!    through one handle moves it for both.
//! 2. **Clone** - [`PrimeHolder::cloned_from`] copies the cached primes into
//!    new storage. The copy and the original change independently.
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin prototype_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums
//! - `tracing` / `tracing-subscriber` - logs the expensive and cheap paths
//! - `serde` / `toml` - optional scene configuration
//! - `colored` - scene headings

pub mod config;
pub mod demo;
pub mod error;
pub mod holder;
pub mod sieve;
pub mod timing;

pub use config::{DemoConfig, SceneIndices};
pub use error::{ConfigError, DemoError, PrimeError};
pub use holder::{PrimeHolder, SharedHolder, PRIME_BATCH};
pub use sieve::{CountingSource, PrimeSource, TrialDivision};
