//! Collatz Wire - TCP client core for the Collatz compute service
//!
//! Connects to a remote compute server with deadline-bounded retry, sends
//! a single decimal request line, and reads one newline-terminated
//! response.
//!
//! # Example
//!
//! ```no_run
//! use collatz_wire::{request_steps, Connector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // One-off request with the default timing parameters
//! println!("{}", request_steps(Connector::new("server", 9000), 27).await?);
//!
//! // Tighter window for a service known to be up already
//! let connector = Connector::new("server", 9000)
//!     .overall_timeout(std::time::Duration::from_secs(10))
//!     .retry_delay(std::time::Duration::from_millis(500));
//! println!("{}", request_steps(connector, 97).await?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frame;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use error::{Error, Result};
pub use request::request_steps;
pub use transport::{Connector, TcpTransport};
