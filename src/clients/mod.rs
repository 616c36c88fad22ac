pub mod buttondown_client;
