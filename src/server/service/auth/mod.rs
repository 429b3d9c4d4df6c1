//! Google sign-in.
//!
//! Two entry points establish a session: the OAuth2 redirect flow (`oauth`) and the Google
//! Identity Services credential post. Both end with an ID token that is checked by
//! `GoogleAuthService::verify_id_token` before the user is upserted.

pub mod google;
pub mod oauth;

pub use google::{GoogleAuthService, GoogleIdentity, GoogleTokenVerifier, IdTokenVerifier};
pub use oauth::GoogleOAuthService;
