//! Utilities: resolution of the masters, nodes and port options.
//!
//! Each setting resolves in order: commandline flag, environment variable (also
//! settable via a .env file, loaded with dotenv by the binary), built-in
//! default. Changed settings can be written back to .env with
//! [dotenv_writer].
mod functions;

pub use functions::*;
