pub mod login_admin;
