pub mod get_services;
