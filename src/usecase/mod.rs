//! UseCase layer.
//!
//! One use case per session-layer operation: join, send, close and presence
//! publish. Called from the UI layer; operates on the domain layer through
//! the `SessionRegistry` trait.

pub mod close_session;
pub mod error;
pub mod join_session;
pub mod publish_presence;
pub mod route_message;

pub use close_session::CloseSessionUseCase;
pub use error::{JoinError, SendError};
pub use join_session::JoinSessionUseCase;
pub use publish_presence::PublishPresenceUseCase;
pub use route_message::RouteMessageUseCase;
