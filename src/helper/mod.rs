pub mod api_client;
pub mod form_helpers;
