pub mod profile_server;
