pub mod client;
pub mod response;

pub use client::{CheckInApi, HttpCheckInClient, RemoteSettings};
pub use response::{ApiResponse, SIGN_IN_RULE, SIGN_OUT_RULE, SuccessRule};
