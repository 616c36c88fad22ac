pub mod health_check;
pub mod index;
pub mod newsletter;
pub mod subscriptions;
