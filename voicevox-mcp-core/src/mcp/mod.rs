pub mod server;

pub use server::{VoicevoxMcpServer, INSTRUCTIONS};
