//! Authentication module
//!
//! JWT-based authentication with argon2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::PasswordService;
