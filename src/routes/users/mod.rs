pub mod invite;
pub mod list;
pub mod resend;
pub mod revoke;
