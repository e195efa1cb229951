//! Account handlers - sign-up, sign-in, sign-out.

mod sign_in;
mod sign_out;
mod sign_up;

pub use sign_in::{SignInCommand, SignInHandler, SignInResult};
pub use sign_out::{SignOutCommand, SignOutHandler};
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
